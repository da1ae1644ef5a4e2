use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::stadium::{CreateDisciplineRequest, CreateStadiumRequest, UpdateStadiumRequest};
use crate::error::{Result, StorageError};
use crate::models::{Discipline, Stadium};

pub struct StadiumRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StadiumRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Stadium>> {
        let stadiums = sqlx::query_as::<_, Stadium>(
            "SELECT stadium_id, name, indoors_outdoors FROM stadiums ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(stadiums)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Stadium> {
        sqlx::query_as::<_, Stadium>(
            "SELECT stadium_id, name, indoors_outdoors FROM stadiums WHERE stadium_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateStadiumRequest) -> Result<Stadium> {
        let stadium = sqlx::query_as::<_, Stadium>(
            r#"
            INSERT INTO stadiums (name, indoors_outdoors)
            VALUES ($1, $2)
            RETURNING stadium_id, name, indoors_outdoors
            "#,
        )
        .bind(&req.name)
        .bind(&req.indoors_outdoors)
        .fetch_one(self.pool)
        .await?;

        Ok(stadium)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Stadium,
        req: &UpdateStadiumRequest,
    ) -> Result<Stadium> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let indoors_outdoors = req
            .indoors_outdoors
            .as_ref()
            .unwrap_or(&existing.indoors_outdoors);

        sqlx::query_as::<_, Stadium>(
            r#"
            UPDATE stadiums
            SET name = $2,
                indoors_outdoors = $3
            WHERE stadium_id = $1
            RETURNING stadium_id, name, indoors_outdoors
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(indoors_outdoors)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Deleting a stadium removes its disciplines with it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM stadiums WHERE stadium_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn list_disciplines(&self) -> Result<Vec<Discipline>> {
        let disciplines = sqlx::query_as::<_, Discipline>(
            "SELECT discipline_id, stadium_id, name FROM disciplines ORDER BY name, discipline_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(disciplines)
    }

    /// Disciplines offered at one stadium, for the dependent dropdown
    pub async fn list_disciplines_for_stadium(&self, stadium_id: Uuid) -> Result<Vec<Discipline>> {
        let disciplines = sqlx::query_as::<_, Discipline>(
            r#"
            SELECT discipline_id, stadium_id, name
            FROM disciplines
            WHERE stadium_id = $1
            ORDER BY name, discipline_id
            "#,
        )
        .bind(stadium_id)
        .fetch_all(self.pool)
        .await?;

        Ok(disciplines)
    }

    pub async fn create_discipline(&self, req: &CreateDisciplineRequest) -> Result<Discipline> {
        sqlx::query_as::<_, Discipline>(
            r#"
            INSERT INTO disciplines (stadium_id, name)
            VALUES ($1, $2)
            RETURNING discipline_id, stadium_id, name
            "#,
        )
        .bind(req.stadium_id)
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_context(
                "This stadium already has a discipline with that name",
                "Stadium does not exist",
            )
        })
    }

    pub async fn delete_discipline(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM disciplines WHERE discipline_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
