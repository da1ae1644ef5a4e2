use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAgeGroupRequest {
    #[validate(length(min = 1, max = 10, message = "Label must be between 1 and 10 characters"))]
    pub label: String,
}
