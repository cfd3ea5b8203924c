use std::time::Duration;

use clap::Parser;
use civitas_core::domain::common::{
    AiServiceConfig, CivitasConfig, DatabaseConfig, UploadConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "civitas", about = "Municipal issue-reporting backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub ai: AiArgs,

    #[command(flatten)]
    pub uploads: UploadArgs,

    #[command(flatten)]
    pub scheduler: SchedulerArgs,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "civitas")]
    pub database_name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AiArgs {
    /// Full URL of the external image-analysis endpoint.
    #[arg(
        long,
        env = "AI_SERVICE_URL",
        default_value = "http://localhost:8000/analyze"
    )]
    pub ai_service_url: String,

    #[arg(long, env = "AI_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub ai_request_timeout_secs: u64,
}

#[derive(Debug, Clone, Parser)]
pub struct UploadArgs {
    /// Directory problem media is written to and served from.
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: String,
}

#[derive(Debug, Clone, Parser)]
pub struct SchedulerArgs {
    #[arg(long, env = "SWEEP_ENABLED", default_value_t = true)]
    pub sweep_enabled: bool,

    /// Seconds between enrichment sweeps.
    #[arg(long, env = "SWEEP_INTERVAL_SECS", default_value_t = 600)]
    pub sweep_interval_secs: u64,

    /// Problems picked up per sweep.
    #[arg(long, env = "SWEEP_BATCH_SIZE", default_value_t = 5)]
    pub sweep_batch_size: u32,
}

impl From<Args> for CivitasConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
            ai_service: AiServiceConfig {
                endpoint: args.ai.ai_service_url,
                request_timeout: Duration::from_secs(args.ai.ai_request_timeout_secs),
            },
            uploads: UploadConfig {
                root_dir: args.uploads.uploads_dir,
            },
        }
    }
}
