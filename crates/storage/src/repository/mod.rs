pub mod age_group;
pub mod athlete;
pub mod goal;
pub mod record;
pub mod stadium;
pub mod venue;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::performance;

/// Parses a submitted performance string, tagging failures with the field name.
pub(crate) fn parse_performance(field: &'static str, value: &str) -> Result<f64> {
    performance::parse(value).map_err(|source| StorageError::InvalidPerformance { field, source })
}

/// A discipline may only be paired with the stadium it belongs to.
pub(crate) async fn ensure_discipline_in_stadium(
    pool: &PgPool,
    stadium_id: Option<Uuid>,
    discipline_id: Option<Uuid>,
) -> Result<()> {
    let (Some(stadium_id), Some(discipline_id)) = (stadium_id, discipline_id) else {
        return Ok(());
    };

    let owning_stadium: Option<Uuid> =
        sqlx::query_scalar("SELECT stadium_id FROM disciplines WHERE discipline_id = $1")
            .bind(discipline_id)
            .fetch_optional(pool)
            .await?;

    match owning_stadium {
        Some(id) if id == stadium_id => Ok(()),
        Some(_) => Err(StorageError::InvalidInput(
            "Discipline does not belong to the selected stadium".to_string(),
        )),
        None => Err(StorageError::InvalidInput(
            "Discipline does not exist".to_string(),
        )),
    }
}
