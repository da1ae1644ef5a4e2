use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::record_query::RecordView;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Record {
    pub record_id: Uuid,
    pub owner: Option<String>,
    pub holder_id: Option<Uuid>,
    pub age_group_id: Option<Uuid>,
    pub discipline_id: Option<Uuid>,
    pub venue_id: Option<Uuid>,
    pub stadium_id: Option<Uuid>,
    pub performance: Option<f64>,
    pub ranking: Option<i32>,
    pub progression: Option<i32>,
    pub wind: Option<Decimal>,
    pub record_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// A record joined with the labels needed to order and display it.
#[derive(Debug, Clone, FromRow)]
pub struct RecordListing {
    #[sqlx(flatten)]
    pub record: Record,
    pub holder_first_name: Option<String>,
    pub holder_last_name: Option<String>,
    pub holder_birth_year: Option<i32>,
    pub age_group_label: Option<String>,
    pub discipline_name: Option<String>,
    pub stadium_name: Option<String>,
    pub stadium_setting: Option<String>,
    pub venue_area: Option<String>,
    pub venue_stadium_name: Option<String>,
}

impl RecordView for RecordListing {
    fn age_group_label(&self) -> Option<&str> {
        self.age_group_label.as_deref()
    }

    fn discipline_name(&self) -> Option<&str> {
        self.discipline_name.as_deref()
    }

    fn stadium_setting(&self) -> Option<&str> {
        self.stadium_setting.as_deref()
    }

    fn performance(&self) -> Option<f64> {
        self.record.performance
    }
}
