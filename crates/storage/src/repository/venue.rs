use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::venue::CreateVenueRequest;
use crate::error::{Result, StorageError};
use crate::models::Venue;

pub struct VenueRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT venue_id, area, stadium_name FROM venues ORDER BY stadium_name, area",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(venues)
    }

    pub async fn create(&self, req: &CreateVenueRequest) -> Result<Venue> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (area, stadium_name)
            VALUES ($1, $2)
            RETURNING venue_id, area, stadium_name
            "#,
        )
        .bind(&req.area)
        .bind(&req.stadium_name)
        .fetch_one(self.pool)
        .await?;

        Ok(venue)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM venues WHERE venue_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
