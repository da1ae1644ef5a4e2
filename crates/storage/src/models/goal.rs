use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Goal {
    pub goal_id: Uuid,
    pub owner: Option<String>,
    pub athlete_id: Option<Uuid>,
    pub age_group_id: Option<Uuid>,
    pub discipline_id: Option<Uuid>,
    pub venue_id: Option<Uuid>,
    pub stadium_id: Option<Uuid>,
    pub performance: Option<f64>,
    pub current_record: Option<f64>,
    pub goal_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct GoalListing {
    #[sqlx(flatten)]
    pub goal: Goal,
    pub athlete_first_name: Option<String>,
    pub athlete_last_name: Option<String>,
    pub athlete_birth_year: Option<i32>,
    pub age_group_label: Option<String>,
    pub discipline_name: Option<String>,
    pub stadium_name: Option<String>,
    pub stadium_setting: Option<String>,
    pub venue_area: Option<String>,
    pub venue_stadium_name: Option<String>,
}
