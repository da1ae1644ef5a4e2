use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Stadium {
    pub stadium_id: Uuid,
    pub name: String,
    pub indoors_outdoors: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StadiumSetting {
    Indoors,
    #[default]
    Outdoors,
}

impl StadiumSetting {
    pub const ALL: [StadiumSetting; 2] = [Self::Indoors, Self::Outdoors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indoors => "indoors",
            Self::Outdoors => "outdoors",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}
