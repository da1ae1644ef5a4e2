use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Response containing athlete information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_year: Option<i32>,
    pub full_name: String,
    pub display_name: String,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 120,
        message = "First name must be between 1 and 120 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 120,
        message = "Last name must be between 1 and 120 characters"
    ))]
    pub last_name: String,

    #[validate(range(min = 1900, max = 2100, message = "Birth year must be a four-digit year"))]
    pub birth_year: Option<i32>,
}

/// Request payload for updating an existing athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 120))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub last_name: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub birth_year: Option<i32>,
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            full_name: athlete.full_name(),
            display_name: athlete.full_name_with_birth_year(),
            athlete_id: athlete.athlete_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            birth_year: athlete.birth_year,
            created_at: athlete.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let valid = CreateAthleteRequest {
            first_name: "Giannis".to_string(),
            last_name: "Nikolaou".to_string(),
            birth_year: Some(2001),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateAthleteRequest {
            first_name: String::new(),
            last_name: "Nikolaou".to_string(),
            birth_year: Some(99),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("birth_year"));
    }
}
