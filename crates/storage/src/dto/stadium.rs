use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_setting;
use crate::discipline::{DisciplineCatalog, DisciplineType};
use crate::models::Discipline;

/// Request payload for creating a new stadium
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStadiumRequest {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Name must be between 1 and 10 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_setting"))]
    #[serde(default = "default_setting")]
    pub indoors_outdoors: String,
}

/// Request payload for updating an existing stadium
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStadiumRequest {
    #[validate(length(min = 1, max = 10))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_setting"))]
    pub indoors_outdoors: Option<String>,
}

/// Request payload for adding a discipline to a stadium
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDisciplineRequest {
    pub stadium_id: Uuid,

    #[validate(length(
        min = 1,
        max = 25,
        message = "Name must be between 1 and 25 characters"
    ))]
    pub name: String,
}

/// Discipline with its road/field classification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisciplineResponse {
    pub discipline_id: Uuid,
    pub stadium_id: Uuid,
    pub name: String,
    pub discipline_type: DisciplineType,
}

impl DisciplineResponse {
    pub fn new(discipline: Discipline, catalog: &DisciplineCatalog) -> Self {
        Self {
            discipline_type: catalog.classify(&discipline.name),
            discipline_id: discipline.discipline_id,
            stadium_id: discipline.stadium_id,
            name: discipline.name,
        }
    }
}

/// Known discipline names grouped by classification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisciplineCatalogResponse {
    pub road: Vec<String>,
    pub field: Vec<String>,
}

impl From<&DisciplineCatalog> for DisciplineCatalogResponse {
    fn from(catalog: &DisciplineCatalog) -> Self {
        Self {
            road: catalog.road_names().into_iter().map(String::from).collect(),
            field: catalog.field_names().to_vec(),
        }
    }
}

fn default_setting() -> String {
    "outdoors".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stadium_setting_validation() {
        let valid = CreateStadiumRequest {
            name: "SEF".to_string(),
            indoors_outdoors: "indoors".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateStadiumRequest {
            name: "SEF".to_string(),
            indoors_outdoors: "roofless".to_string(),
        };
        assert!(invalid.validate().is_err());

        let too_long = CreateStadiumRequest {
            name: "Olympic Stadium".to_string(),
            indoors_outdoors: "outdoors".to_string(),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_discipline_response_is_classified() {
        let catalog = DisciplineCatalog::standard();
        let discipline = Discipline {
            discipline_id: Uuid::new_v4(),
            stadium_id: Uuid::new_v4(),
            name: "Pole Vault".to_string(),
        };

        let response = DisciplineResponse::new(discipline, &catalog);

        assert_eq!(response.discipline_type, DisciplineType::Field);
    }
}
