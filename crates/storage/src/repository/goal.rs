use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use super::{ensure_discipline_in_stadium, parse_performance};
use crate::dto::goal::{CreateGoalRequest, UpdateGoalRequest};
use crate::error::{Result, StorageError};
use crate::models::{Goal, GoalListing, StadiumSetting};

const GOAL_COLUMNS: &str = r#"
    g.goal_id, g.owner, g.athlete_id, g.age_group_id, g.discipline_id, g.venue_id,
    g.stadium_id, g.performance, g.current_record, g.goal_date, g.created_at, g.updated_at
"#;

const LISTING_SELECT: &str = r#"
    a.first_name AS athlete_first_name,
    a.last_name AS athlete_last_name,
    a.birth_year AS athlete_birth_year,
    ag.label AS age_group_label,
    d.name AS discipline_name,
    s.name AS stadium_name,
    ds.indoors_outdoors AS stadium_setting,
    v.area AS venue_area,
    v.stadium_name AS venue_stadium_name
FROM goals g
LEFT JOIN athletes a ON a.athlete_id = g.athlete_id
LEFT JOIN age_groups ag ON ag.age_group_id = g.age_group_id
LEFT JOIN disciplines d ON d.discipline_id = g.discipline_id
LEFT JOIN stadiums ds ON ds.stadium_id = d.stadium_id
LEFT JOIN stadiums s ON s.stadium_id = g.stadium_id
LEFT JOIN venues v ON v.venue_id = g.venue_id
"#;

const UNIQUE_VIOLATION: &str =
    "A goal for this athlete, discipline and performance already exists";
const FOREIGN_KEY_VIOLATION: &str =
    "Referenced athlete, age group, discipline, venue or stadium does not exist";

pub struct GoalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Goals ordered by target performance, most recent goal date first on ties
    pub async fn list_listings(&self, setting: Option<StadiumSetting>) -> Result<Vec<GoalListing>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {GOAL_COLUMNS}, {LISTING_SELECT} WHERE 1=1"
        ));

        if let Some(setting) = setting {
            query.push(" AND ds.indoors_outdoors = ");
            query.push_bind(setting.as_str());
        }

        query.push(" ORDER BY g.performance ASC, g.goal_date DESC, g.created_at");

        let listings = query
            .build_query_as::<GoalListing>()
            .fetch_all(self.pool)
            .await?;

        Ok(listings)
    }

    pub async fn find_listing(&self, id: Uuid, owner: &str) -> Result<GoalListing> {
        let sql = format!(
            "SELECT {GOAL_COLUMNS}, {LISTING_SELECT} WHERE g.goal_id = $1 AND g.owner = $2"
        );

        sqlx::query_as::<_, GoalListing>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_owned(&self, id: Uuid, owner: &str) -> Result<Goal> {
        let sql = format!("SELECT {GOAL_COLUMNS} FROM goals g WHERE g.goal_id = $1 AND g.owner = $2");

        sqlx::query_as::<_, Goal>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, owner: &str, req: &CreateGoalRequest) -> Result<Goal> {
        let performance = parse_performance("performance", &req.performance)?;
        let current_record = req
            .current_record
            .as_deref()
            .map(|value| parse_performance("current_record", value))
            .transpose()?;
        ensure_discipline_in_stadium(self.pool, req.stadium_id, req.discipline_id).await?;

        sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (owner, athlete_id, age_group_id, discipline_id, venue_id,
                               stadium_id, performance, current_record, goal_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING goal_id, owner, athlete_id, age_group_id, discipline_id, venue_id,
                      stadium_id, performance, current_record, goal_date, created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(req.athlete_id)
        .bind(req.age_group_id)
        .bind(req.discipline_id)
        .bind(req.venue_id)
        .bind(req.stadium_id)
        .bind(performance)
        .bind(current_record)
        .bind(req.goal_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_context(UNIQUE_VIOLATION, FOREIGN_KEY_VIOLATION)
        })
    }

    pub async fn update(&self, existing: &Goal, owner: &str, req: &UpdateGoalRequest) -> Result<Goal> {
        let performance = match req.performance.as_deref() {
            Some(value) => Some(parse_performance("performance", value)?),
            None => existing.performance,
        };
        let current_record = match req.current_record.as_deref() {
            Some(value) => Some(parse_performance("current_record", value)?),
            None => existing.current_record,
        };
        let stadium_id = req.stadium_id.or(existing.stadium_id);
        let discipline_id = req.discipline_id.or(existing.discipline_id);

        ensure_discipline_in_stadium(self.pool, stadium_id, discipline_id).await?;

        sqlx::query_as::<_, Goal>(
            r#"
            UPDATE goals
            SET athlete_id = $3,
                age_group_id = $4,
                discipline_id = $5,
                venue_id = $6,
                stadium_id = $7,
                performance = $8,
                current_record = $9,
                goal_date = $10,
                updated_at = NOW()
            WHERE goal_id = $1 AND owner = $2
            RETURNING goal_id, owner, athlete_id, age_group_id, discipline_id, venue_id,
                      stadium_id, performance, current_record, goal_date, created_at, updated_at
            "#,
        )
        .bind(existing.goal_id)
        .bind(owner)
        .bind(req.athlete_id.or(existing.athlete_id))
        .bind(req.age_group_id.or(existing.age_group_id))
        .bind(discipline_id)
        .bind(req.venue_id.or(existing.venue_id))
        .bind(stadium_id)
        .bind(performance)
        .bind(current_record)
        .bind(req.goal_date.or(existing.goal_date))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_context(UNIQUE_VIOLATION, FOREIGN_KEY_VIOLATION)
        })?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid, owner: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM goals WHERE goal_id = $1 AND owner = $2")
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
