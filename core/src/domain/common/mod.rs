use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CivitasConfig {
    pub database: DatabaseConfig,
    pub ai_service: AiServiceConfig,
    pub uploads: UploadConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct AiServiceConfig {
    /// Full URL of the external image-analysis endpoint.
    pub endpoint: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Root directory under which problem media files are stored.
    pub root_dir: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
