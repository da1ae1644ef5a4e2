use sqlx::PgPool;
use uuid::Uuid;

use super::{ensure_discipline_in_stadium, parse_performance};
use crate::dto::record::{CreateRecordRequest, UpdateRecordRequest};
use crate::error::{Result, StorageError};
use crate::models::{Record, RecordListing};

const RECORD_COLUMNS: &str = r#"
    r.record_id, r.owner, r.holder_id, r.age_group_id, r.discipline_id, r.venue_id,
    r.stadium_id, r.performance, r.ranking, r.progression, r.wind, r.record_date,
    r.created_at, r.updated_at
"#;

const LISTING_SELECT: &str = r#"
    a.first_name AS holder_first_name,
    a.last_name AS holder_last_name,
    a.birth_year AS holder_birth_year,
    ag.label AS age_group_label,
    d.name AS discipline_name,
    s.name AS stadium_name,
    ds.indoors_outdoors AS stadium_setting,
    v.area AS venue_area,
    v.stadium_name AS venue_stadium_name
FROM records r
LEFT JOIN athletes a ON a.athlete_id = r.holder_id
LEFT JOIN age_groups ag ON ag.age_group_id = r.age_group_id
LEFT JOIN disciplines d ON d.discipline_id = r.discipline_id
LEFT JOIN stadiums ds ON ds.stadium_id = d.stadium_id
LEFT JOIN stadiums s ON s.stadium_id = r.stadium_id
LEFT JOIN venues v ON v.venue_id = r.venue_id
"#;

const UNIQUE_VIOLATION: &str =
    "A record for this holder, discipline and performance already exists";
const FOREIGN_KEY_VIOLATION: &str =
    "Referenced holder, age group, discipline, venue or stadium does not exist";

pub struct RecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All records with their display labels, in insertion order
    pub async fn list_listings(&self) -> Result<Vec<RecordListing>> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS}, {LISTING_SELECT} ORDER BY r.created_at, r.record_id"
        );

        let listings = sqlx::query_as::<_, RecordListing>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(listings)
    }

    /// A single record with its labels, visible only to its owner
    pub async fn find_listing(&self, id: Uuid, owner: &str) -> Result<RecordListing> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS}, {LISTING_SELECT} WHERE r.record_id = $1 AND r.owner = $2"
        );

        sqlx::query_as::<_, RecordListing>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_owned(&self, id: Uuid, owner: &str) -> Result<Record> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM records r WHERE r.record_id = $1 AND r.owner = $2");

        sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Create a record owned by `owner`, parsing the submitted performance
    pub async fn create(&self, owner: &str, req: &CreateRecordRequest) -> Result<Record> {
        let performance = parse_performance("performance", &req.performance)?;
        ensure_discipline_in_stadium(self.pool, req.stadium_id, req.discipline_id).await?;

        sqlx::query_as::<_, Record>(
            r#"
            INSERT INTO records (owner, holder_id, age_group_id, discipline_id, venue_id,
                                 stadium_id, performance, ranking, progression, wind, record_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING record_id, owner, holder_id, age_group_id, discipline_id, venue_id,
                      stadium_id, performance, ranking, progression, wind, record_date,
                      created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(req.holder_id)
        .bind(req.age_group_id)
        .bind(req.discipline_id)
        .bind(req.venue_id)
        .bind(req.stadium_id)
        .bind(performance)
        .bind(req.ranking)
        .bind(req.progression())
        .bind(req.wind)
        .bind(req.record_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_context(UNIQUE_VIOLATION, FOREIGN_KEY_VIOLATION)
        })
    }

    /// Update a record owned by `owner`; a new performance string is re-parsed
    pub async fn update(
        &self,
        existing: &Record,
        owner: &str,
        req: &UpdateRecordRequest,
    ) -> Result<Record> {
        let performance = match req.performance.as_deref() {
            Some(value) => Some(parse_performance("performance", value)?),
            None => existing.performance,
        };
        let stadium_id = req.stadium_id.or(existing.stadium_id);
        let discipline_id = req.discipline_id.or(existing.discipline_id);

        ensure_discipline_in_stadium(self.pool, stadium_id, discipline_id).await?;

        sqlx::query_as::<_, Record>(
            r#"
            UPDATE records
            SET holder_id = $3,
                age_group_id = $4,
                discipline_id = $5,
                venue_id = $6,
                stadium_id = $7,
                performance = $8,
                ranking = $9,
                progression = $10,
                wind = $11,
                record_date = $12,
                updated_at = NOW()
            WHERE record_id = $1 AND owner = $2
            RETURNING record_id, owner, holder_id, age_group_id, discipline_id, venue_id,
                      stadium_id, performance, ranking, progression, wind, record_date,
                      created_at, updated_at
            "#,
        )
        .bind(existing.record_id)
        .bind(owner)
        .bind(req.holder_id.or(existing.holder_id))
        .bind(req.age_group_id.or(existing.age_group_id))
        .bind(discipline_id)
        .bind(req.venue_id.or(existing.venue_id))
        .bind(stadium_id)
        .bind(performance)
        .bind(req.ranking.or(existing.ranking))
        .bind(req.progression.or(existing.progression))
        .bind(req.wind.or(existing.wind))
        .bind(req.record_date.or(existing.record_date))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_context(UNIQUE_VIOLATION, FOREIGN_KEY_VIOLATION)
        })?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid, owner: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM records WHERE record_id = $1 AND owner = $2")
            .bind(id)
            .bind(owner)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
