use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod discipline;
pub mod dto;
pub mod error;
pub mod models;
pub mod performance;
pub mod repository;
pub mod services;

pub use discipline::{DisciplineCatalog, DisciplineType};

use crate::error::Result;

/// Shared handle on the Postgres connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
