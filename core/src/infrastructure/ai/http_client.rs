use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::domain::{
    analysis::{ports::AnalysisClient, value_objects::ImageAnalysis},
    common::{AiServiceConfig, UploadConfig, entities::app_errors::CoreError},
};

/// The upstream model reports no usable confidence, so every analysis is
/// stored with this fixed value.
const DEFAULT_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    endpoint: String,
    uploads_root: PathBuf,
    client: Client,
}

/// Wire shape of the analysis endpoint. `detected_category` arrives either
/// as a single string or as an array.
#[derive(Debug, Deserialize)]
struct RawAnalysisResponse {
    detected_category: Option<CategoryField>,
    severity_score: Option<i32>,
    estimated_fix_time: Option<String>,
    #[serde(default)]
    detected_objects: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryField {
    One(String),
    Many(Vec<String>),
}

impl From<RawAnalysisResponse> for ImageAnalysis {
    fn from(raw: RawAnalysisResponse) -> Self {
        let detected_category = raw.detected_category.map(|c| match c {
            CategoryField::One(s) => s,
            CategoryField::Many(list) => list.join(","),
        });

        Self {
            confidence: DEFAULT_CONFIDENCE,
            detected_category,
            severity_score: raw.severity_score,
            estimated_fix_time: raw.estimated_fix_time,
            detected_objects: raw.detected_objects,
        }
    }
}

impl HttpAnalysisClient {
    pub fn new(ai_config: &AiServiceConfig, upload_config: &UploadConfig) -> Self {
        let client = Client::builder()
            .timeout(ai_config.request_timeout)
            .build()
            .unwrap_or_default();

        Self {
            endpoint: ai_config.endpoint.clone(),
            uploads_root: PathBuf::from(&upload_config.root_dir),
            client,
        }
    }

    /// Client with the stock 30 second timeout.
    pub fn with_default_timeout(endpoint: String, uploads_root: impl Into<PathBuf>) -> Self {
        Self::new(
            &AiServiceConfig {
                endpoint,
                request_timeout: Duration::from_secs(30),
            },
            &UploadConfig {
                root_dir: uploads_root.into().to_string_lossy().into_owned(),
            },
        )
    }

    fn resolve_media_path(&self, media_path: &str) -> PathBuf {
        // Stored paths already carry the uploads prefix; strip it rather
        // than doubling it up.
        let relative = Path::new(media_path)
            .strip_prefix(&self.uploads_root)
            .unwrap_or_else(|_| Path::new(media_path));

        self.uploads_root.join(relative)
    }
}

impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, media_path: &str) -> Result<ImageAnalysis, CoreError> {
        let full_path = self.resolve_media_path(media_path);

        let bytes = match tokio::fs::read(&full_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %full_path.display(), "Media file missing");
                return Err(CoreError::NotFound);
            }
            Err(e) => {
                tracing::error!(path = %full_path.display(), "Failed to read media file: {}", e);
                return Err(CoreError::InternalServerError);
            }
        };

        let file_name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Analysis request failed: {}", e);
                CoreError::Upstream(format!("analysis request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Analysis service error: {} - {}", status, body);
            return Err(CoreError::Upstream(format!(
                "analysis service returned {status}: {body}"
            )));
        }

        let raw: RawAnalysisResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse analysis response: {}", e);
            CoreError::Upstream(format!("invalid analysis response: {e}"))
        })?;

        Ok(ImageAnalysis::from(raw))
    }
}
