use sea_orm::{Database, DatabaseConnection};

use crate::domain::common::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connect and bring the schema up to date before anything else touches
    /// the database.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(config.connection_url()).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;

        tracing::info!("Database connected and migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
