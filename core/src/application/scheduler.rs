use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::analysis::ports::EnrichmentService;

pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(600);
pub const DEFAULT_SWEEP_BATCH_SIZE: u32 = 5;

/// Background sweep that periodically enriches problems the on-create path
/// missed. One loop task; ticks never overlap.
pub struct EnrichmentScheduler {
    interval: Duration,
    batch_size: u32,
    shutdown: watch::Sender<bool>,
}

impl EnrichmentScheduler {
    pub fn new(interval: Duration, batch_size: u32) -> Self {
        let (shutdown, _) = watch::channel(false);

        Self {
            interval,
            batch_size,
            shutdown,
        }
    }

    /// Spawn the sweep loop. The first sweep runs one full interval after
    /// start, not immediately.
    pub fn start<S>(&self, service: S) -> JoinHandle<()>
    where
        S: EnrichmentService + Send + Sync + 'static,
    {
        let mut shutdown_rx = self.shutdown.subscribe();
        let interval = self.interval;
        let batch_size = self.batch_size;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // A sweep that outlasts the interval must not cause a burst of
            // catch-up ticks afterwards.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await;

            tracing::info!(
                interval_secs = interval.as_secs(),
                batch_size,
                "Enrichment scheduler started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    changed = shutdown_rx.changed() => {
                        // A dropped sender counts as shutdown.
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                        continue;
                    }
                }

                match service.enrich_batch(batch_size).await {
                    Ok(outcomes) if !outcomes.is_empty() => {
                        tracing::info!(enriched = outcomes.len(), "Sweep enriched problems");
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Enrichment sweep failed");
                    }
                }
            }

            tracing::info!("Enrichment scheduler stopped");
        })
    }

    /// Signals the loop to exit after the in-flight sweep, if any.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }
}

impl Default for EnrichmentScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_INTERVAL, DEFAULT_SWEEP_BATCH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ports::MockEnrichmentService;

    #[tokio::test]
    async fn scheduler_sweeps_on_each_tick_until_stopped() {
        let mut service = MockEnrichmentService::new();
        service
            .expect_enrich_batch()
            .withf(|limit| *limit == 2)
            .returning(|_| Box::pin(std::future::ready(Ok(Vec::new()))));

        let scheduler = EnrichmentScheduler::new(Duration::from_millis(10), 2);
        let handle = scheduler.start(service);

        tokio::time::sleep(Duration::from_millis(50)).await;
        scheduler.stop();

        handle.await.expect("scheduler task panicked");
    }

    #[tokio::test]
    async fn scheduler_keeps_running_after_a_failed_sweep() {
        let mut service = MockEnrichmentService::new();
        let mut first = true;
        service.expect_enrich_batch().returning(move |_| {
            if std::mem::take(&mut first) {
                Box::pin(std::future::ready(Err(
                    crate::domain::common::entities::app_errors::CoreError::InternalServerError,
                )))
            } else {
                Box::pin(std::future::ready(Ok(Vec::new())))
            }
        });

        let scheduler = EnrichmentScheduler::new(Duration::from_millis(10), 1);
        let handle = scheduler.start(service);

        tokio::time::sleep(Duration::from_millis(50)).await;
        scheduler.stop();

        handle.await.expect("scheduler task panicked");
    }
}
