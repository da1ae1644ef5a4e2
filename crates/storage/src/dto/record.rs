use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{validate_performance, validate_wind};
use crate::discipline::{DisciplineCatalog, DisciplineType};
use crate::models::{RecordListing, display_name};
use crate::performance;

pub const DEFAULT_PROGRESSION: i32 = 1;

/// Request payload for creating a new record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecordRequest {
    pub holder_id: Option<Uuid>,

    pub age_group_id: Option<Uuid>,

    pub stadium_id: Option<Uuid>,

    pub discipline_id: Option<Uuid>,

    /// `mm:ss.ss` for road events, a plain number for field events
    #[validate(length(min = 1, max = 12, message = "Performance must be between 1 and 12 characters"))]
    #[validate(custom(function = "validate_performance"))]
    pub performance: String,

    pub ranking: Option<i32>,

    pub venue_id: Option<Uuid>,

    #[validate(custom(function = "validate_wind"))]
    pub wind: Option<Decimal>,

    pub record_date: Option<NaiveDate>,

    /// How many times the record has been broken; `1` when omitted or null
    pub progression: Option<i32>,
}

impl CreateRecordRequest {
    pub fn progression(&self) -> i32 {
        self.progression.unwrap_or(DEFAULT_PROGRESSION)
    }
}

/// Request payload for updating an existing record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecordRequest {
    pub holder_id: Option<Uuid>,

    pub age_group_id: Option<Uuid>,

    pub stadium_id: Option<Uuid>,

    pub discipline_id: Option<Uuid>,

    #[validate(length(min = 1, max = 12))]
    #[validate(custom(function = "validate_performance"))]
    pub performance: Option<String>,

    pub ranking: Option<i32>,

    pub venue_id: Option<Uuid>,

    #[validate(custom(function = "validate_wind"))]
    pub wind: Option<Decimal>,

    pub record_date: Option<NaiveDate>,

    pub progression: Option<i32>,
}

/// Record with display labels and its performance rendered for its discipline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordResponse {
    pub record_id: Uuid,
    pub owner: Option<String>,
    pub holder_id: Option<Uuid>,
    pub holder: Option<String>,
    pub age_group_id: Option<Uuid>,
    pub age_group: Option<String>,
    pub discipline_id: Option<Uuid>,
    pub discipline: Option<String>,
    pub discipline_type: Option<DisciplineType>,
    pub stadium_id: Option<Uuid>,
    pub stadium: Option<String>,
    pub indoors_outdoors: Option<String>,
    pub venue_id: Option<Uuid>,
    pub venue: Option<String>,
    pub performance: Option<f64>,
    /// `null` when the discipline is no longer known
    pub formatted_performance: Option<String>,
    pub ranking: Option<i32>,
    pub wind: Option<Decimal>,
    pub progression: Option<i32>,
    pub record_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RecordResponse {
    pub fn new(listing: RecordListing, catalog: &DisciplineCatalog) -> Self {
        let discipline_type = listing
            .discipline_name
            .as_deref()
            .map(|name| catalog.classify(name));
        let formatted_performance =
            discipline_type.map(|kind| performance::format(listing.record.performance, kind));
        let holder = match (listing.holder_first_name, listing.holder_last_name) {
            (Some(first), Some(last)) => {
                Some(display_name(&first, &last, listing.holder_birth_year))
            }
            _ => None,
        };
        let venue = match (listing.venue_stadium_name, listing.venue_area) {
            (Some(stadium_name), Some(area)) => Some(format!("{stadium_name}, {area}")),
            _ => None,
        };
        let record = listing.record;

        Self {
            record_id: record.record_id,
            owner: record.owner,
            holder_id: record.holder_id,
            holder,
            age_group_id: record.age_group_id,
            age_group: listing.age_group_label,
            discipline_id: record.discipline_id,
            discipline: listing.discipline_name,
            discipline_type,
            stadium_id: record.stadium_id,
            stadium: listing.stadium_name,
            indoors_outdoors: listing.stadium_setting,
            venue_id: record.venue_id,
            venue,
            performance: record.performance,
            formatted_performance,
            ranking: record.ranking,
            wind: record.wind,
            progression: record.progression,
            record_date: record.record_date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn listing(discipline_name: Option<&str>, performance: Option<f64>) -> RecordListing {
        RecordListing {
            record: Record {
                record_id: Uuid::new_v4(),
                owner: Some("ioanna".to_string()),
                holder_id: Some(Uuid::new_v4()),
                age_group_id: Some(Uuid::new_v4()),
                discipline_id: discipline_name.map(|_| Uuid::new_v4()),
                venue_id: None,
                stadium_id: Some(Uuid::new_v4()),
                performance,
                ranking: None,
                progression: Some(1),
                wind: Some(Decimal::new(12, 1)),
                record_date: None,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            },
            holder_first_name: Some("Ioanna".to_string()),
            holder_last_name: Some("Papa".to_string()),
            holder_birth_year: Some(1998),
            age_group_label: Some("Women".to_string()),
            discipline_name: discipline_name.map(String::from),
            stadium_name: Some("SEF".to_string()),
            stadium_setting: Some("indoors".to_string()),
            venue_area: None,
            venue_stadium_name: None,
        }
    }

    #[test]
    fn test_road_record_is_formatted_as_time() {
        let catalog = DisciplineCatalog::standard();
        let response = RecordResponse::new(listing(Some("400m Hurdles"), Some(63.45)), &catalog);

        assert_eq!(response.discipline_type, Some(DisciplineType::Road));
        assert_eq!(response.formatted_performance.as_deref(), Some("01:03.45"));
        assert_eq!(response.holder.as_deref(), Some("Ioanna Papa (98)"));
        assert_eq!(response.venue, None);
    }

    #[test]
    fn test_field_record_is_formatted_as_distance() {
        let catalog = DisciplineCatalog::standard();
        let response = RecordResponse::new(listing(Some("Long Jump"), Some(6.1)), &catalog);

        assert_eq!(response.discipline_type, Some(DisciplineType::Field));
        assert_eq!(response.formatted_performance.as_deref(), Some("6.10"));
    }

    #[test]
    fn test_record_without_discipline_is_not_formatted() {
        let catalog = DisciplineCatalog::standard();
        let response = RecordResponse::new(listing(None, Some(52.34)), &catalog);

        assert_eq!(response.discipline_type, None);
        assert_eq!(response.formatted_performance, None);
        assert_eq!(response.performance, Some(52.34));
    }

    #[test]
    fn test_create_request_rejects_bad_performance() {
        let request = CreateRecordRequest {
            holder_id: None,
            age_group_id: None,
            stadium_id: None,
            discipline_id: None,
            performance: "4m18s".to_string(),
            ranking: None,
            venue_id: None,
            wind: None,
            record_date: None,
            progression: Some(1),
        };

        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();
        let performance_errors = field_errors["performance"];

        assert_eq!(
            performance_errors[0].message.as_deref(),
            Some(performance::INVALID_FORMAT_MESSAGE)
        );
    }

    #[test]
    fn test_progression_defaults_to_one_when_omitted_or_null() {
        let omitted: CreateRecordRequest =
            serde_json::from_str(r#"{"performance":"10.5"}"#).unwrap();
        assert_eq!(omitted.progression(), DEFAULT_PROGRESSION);

        let null: CreateRecordRequest =
            serde_json::from_str(r#"{"performance":"10.5","progression":null}"#).unwrap();
        assert_eq!(null.progression, None);
        assert_eq!(null.progression(), DEFAULT_PROGRESSION);

        let given: CreateRecordRequest =
            serde_json::from_str(r#"{"performance":"10.5","progression":3}"#).unwrap();
        assert_eq!(given.progression(), 3);
    }
}
