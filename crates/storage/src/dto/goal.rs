use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_performance;
use crate::discipline::{DisciplineCatalog, DisciplineType};
use crate::models::{GoalListing, display_name};
use crate::performance;

/// Request payload for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    pub athlete_id: Option<Uuid>,

    pub age_group_id: Option<Uuid>,

    pub stadium_id: Option<Uuid>,

    pub discipline_id: Option<Uuid>,

    /// Target performance, `mm:ss.ss` for road events or a plain number for field events
    #[validate(length(
        min = 1,
        max = 12,
        message = "Performance must be between 1 and 12 characters"
    ))]
    #[validate(custom(function = "validate_performance"))]
    pub performance: String,

    /// Current best, same format as `performance`
    #[validate(length(min = 1, max = 12))]
    #[validate(custom(function = "validate_performance"))]
    pub current_record: Option<String>,

    pub venue_id: Option<Uuid>,

    pub goal_date: Option<NaiveDate>,
}

/// Request payload for updating an existing goal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalRequest {
    pub athlete_id: Option<Uuid>,

    pub age_group_id: Option<Uuid>,

    pub stadium_id: Option<Uuid>,

    pub discipline_id: Option<Uuid>,

    #[validate(length(min = 1, max = 12))]
    #[validate(custom(function = "validate_performance"))]
    pub performance: Option<String>,

    #[validate(length(min = 1, max = 12))]
    #[validate(custom(function = "validate_performance"))]
    pub current_record: Option<String>,

    pub venue_id: Option<Uuid>,

    pub goal_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalResponse {
    pub goal_id: Uuid,
    pub owner: Option<String>,
    pub athlete_id: Option<Uuid>,
    pub athlete: Option<String>,
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
    pub formatted_performance: Option<String>,
    pub current_record: Option<f64>,
    pub formatted_current_record: Option<String>,
    pub goal_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl GoalResponse {
    pub fn new(listing: GoalListing, catalog: &DisciplineCatalog) -> Self {
        let discipline_type = listing
            .discipline_name
            .as_deref()
            .map(|name| catalog.classify(name));
        let goal = listing.goal;
        let athlete = match (listing.athlete_first_name, listing.athlete_last_name) {
            (Some(first), Some(last)) => {
                Some(display_name(&first, &last, listing.athlete_birth_year))
            }
            _ => None,
        };
        let venue = match (listing.venue_stadium_name, listing.venue_area) {
            (Some(stadium_name), Some(area)) => Some(format!("{stadium_name}, {area}")),
            _ => None,
        };

        Self {
            goal_id: goal.goal_id,
            owner: goal.owner,
            athlete_id: goal.athlete_id,
            athlete,
            age_group_id: goal.age_group_id,
            age_group: listing.age_group_label,
            discipline_id: goal.discipline_id,
            discipline: listing.discipline_name,
            discipline_type,
            stadium_id: goal.stadium_id,
            stadium: listing.stadium_name,
            indoors_outdoors: listing.stadium_setting,
            venue_id: goal.venue_id,
            venue,
            performance: goal.performance,
            formatted_performance: discipline_type
                .map(|kind| performance::format(goal.performance, kind)),
            current_record: goal.current_record,
            formatted_current_record: discipline_type
                .map(|kind| performance::format(goal.current_record, kind)),
            goal_date: goal.goal_date,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    #[test]
    fn test_goal_formats_both_performances() {
        let catalog = DisciplineCatalog::standard();
        let listing = GoalListing {
            goal: Goal {
                goal_id: Uuid::new_v4(),
                owner: Some("giannis".to_string()),
                athlete_id: None,
                age_group_id: None,
                discipline_id: Some(Uuid::new_v4()),
                venue_id: None,
                stadium_id: None,
                performance: Some(235.0),
                current_record: None,
                goal_date: None,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            },
            athlete_first_name: None,
            athlete_last_name: None,
            athlete_birth_year: None,
            age_group_label: None,
            discipline_name: Some("1500m".to_string()),
            stadium_name: None,
            stadium_setting: None,
            venue_area: Some("Palini".to_string()),
            venue_stadium_name: Some("Palini Track".to_string()),
        };

        let response = GoalResponse::new(listing, &catalog);

        assert_eq!(response.formatted_performance.as_deref(), Some("03:55.00"));
        assert_eq!(response.formatted_current_record.as_deref(), Some(""));
        assert_eq!(response.venue.as_deref(), Some("Palini Track, Palini"));
        assert_eq!(response.athlete, None);
    }

    #[test]
    fn test_current_record_is_optional_but_validated() {
        let mut request = CreateGoalRequest {
            athlete_id: None,
            age_group_id: None,
            stadium_id: None,
            discipline_id: None,
            performance: "3:55".to_string(),
            current_record: None,
            venue_id: None,
            goal_date: None,
        };
        assert!(request.validate().is_ok());

        request.current_record = Some("4:0x".to_string());
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("current_record"));
    }
}
