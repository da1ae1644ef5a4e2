use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::age_group::CreateAgeGroupRequest;
use crate::error::{Result, StorageError};
use crate::models::AgeGroup;

pub struct AgeGroupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AgeGroupRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<AgeGroup>> {
        let age_groups = sqlx::query_as::<_, AgeGroup>(
            "SELECT age_group_id, label FROM age_groups ORDER BY label",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(age_groups)
    }

    pub async fn create(&self, req: &CreateAgeGroupRequest) -> Result<AgeGroup> {
        let age_group = sqlx::query_as::<_, AgeGroup>(
            "INSERT INTO age_groups (label) VALUES ($1) RETURNING age_group_id, label",
        )
        .bind(&req.label)
        .fetch_one(self.pool)
        .await?;

        Ok(age_group)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM age_groups WHERE age_group_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
