use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_year: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Full name followed by the last two digits of the birth year, e.g. "Ioanna Papa (98)".
    pub fn full_name_with_birth_year(&self) -> String {
        display_name(&self.first_name, &self.last_name, self.birth_year)
    }
}

pub fn display_name(first_name: &str, last_name: &str, birth_year: Option<i32>) -> String {
    match birth_year {
        Some(year) => {
            let year = year.to_string();
            let suffix = year.get(2..).unwrap_or_default();
            format!("{first_name} {last_name} ({suffix})")
        }
        None => format!("{first_name} {last_name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(birth_year: Option<i32>) -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            first_name: "Ioanna".to_string(),
            last_name: "Papadopoulou".to_string(),
            birth_year,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(athlete(None).full_name(), "Ioanna Papadopoulou");
    }

    #[test]
    fn test_full_name_with_birth_year() {
        assert_eq!(
            athlete(Some(1998)).full_name_with_birth_year(),
            "Ioanna Papadopoulou (98)"
        );
        assert_eq!(
            athlete(Some(2005)).full_name_with_birth_year(),
            "Ioanna Papadopoulou (05)"
        );
    }

    #[test]
    fn test_full_name_without_birth_year() {
        assert_eq!(
            athlete(None).full_name_with_birth_year(),
            "Ioanna Papadopoulou"
        );
    }
}
