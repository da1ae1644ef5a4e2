use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Venue;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVenueRequest {
    #[validate(length(min = 1, max = 30, message = "Area must be between 1 and 30 characters"))]
    pub area: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Stadium name must be between 1 and 30 characters"
    ))]
    pub stadium_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueResponse {
    pub venue_id: Uuid,
    pub area: String,
    pub stadium_name: String,
    pub display_name: String,
}

impl From<Venue> for VenueResponse {
    fn from(venue: Venue) -> Self {
        Self {
            display_name: venue.to_string(),
            venue_id: venue.venue_id,
            area: venue.area,
            stadium_name: venue.stadium_name,
        }
    }
}
