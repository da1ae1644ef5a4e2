use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STANDARD_ROAD_DISCIPLINES: &[&str] = &[
    "60m",
    "60m Hurdles",
    "100m",
    "100m Hurdles",
    "110m Hurdles",
    "110m/100m Hurdles",
    "200m",
    "400m",
    "400m Hurdles",
    "800m",
    "1500m",
    "3000m",
    "3000m Steeplechase",
    "5000m",
    "10000m",
    "4 x 100m Relay",
    "4 x 400m Relay",
];

pub const STANDARD_FIELD_DISCIPLINES: &[&str] = &[
    "Long Jump",
    "Triple Jump",
    "High Jump",
    "Pole Vault",
    "Javelin Throw",
    "Shot Put",
    "Hammer Throw",
    "Discus Throw",
];

/// Whether a discipline's performance is a duration or a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineType {
    Road,
    Field,
}

impl DisciplineType {
    /// Label used for display and for ordering record lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for DisciplineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Road/field membership table, built once at startup and shared read-only.
///
/// Classification is an exact, case-sensitive lookup of the discipline name in
/// the road list; every other name is a field event.
#[derive(Debug, Clone)]
pub struct DisciplineCatalog {
    road: HashSet<String>,
    field: Vec<String>,
}

impl DisciplineCatalog {
    pub fn new<I, S>(road: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            road: road.into_iter().map(Into::into).collect(),
            field: STANDARD_FIELD_DISCIPLINES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_ROAD_DISCIPLINES.iter().copied())
    }

    /// Builds the catalog from a comma-separated road list, falling back to
    /// the standard list when nothing usable is given.
    pub fn from_comma_separated(road_list: Option<&str>) -> Self {
        let names: Vec<&str> = road_list
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if names.is_empty() {
            Self::standard()
        } else {
            Self::new(names)
        }
    }

    pub fn classify(&self, discipline_name: &str) -> DisciplineType {
        if self.road.contains(discipline_name) {
            DisciplineType::Road
        } else {
            DisciplineType::Field
        }
    }

    pub fn road_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.road.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn field_names(&self) -> &[String] {
        &self.field
    }
}

impl Default for DisciplineCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_standard_catalog() {
        let catalog = DisciplineCatalog::standard();

        assert_eq!(catalog.classify("100m"), DisciplineType::Road);
        assert_eq!(catalog.classify("4 x 400m Relay"), DisciplineType::Road);
        assert_eq!(catalog.classify("Long Jump"), DisciplineType::Field);
        assert_eq!(catalog.classify("Unknown Event"), DisciplineType::Field);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let catalog = DisciplineCatalog::standard();

        assert_eq!(catalog.classify("60M"), DisciplineType::Field);
        assert_eq!(catalog.classify("400m hurdles"), DisciplineType::Field);
        assert_eq!(catalog.classify(" 100m"), DisciplineType::Field);
    }

    #[test]
    fn test_custom_road_list_replaces_standard() {
        let catalog = DisciplineCatalog::from_comma_separated(Some("Mile, 100m ,,"));

        assert_eq!(catalog.classify("Mile"), DisciplineType::Road);
        assert_eq!(catalog.classify("100m"), DisciplineType::Road);
        assert_eq!(catalog.classify("200m"), DisciplineType::Field);
        assert_eq!(catalog.road_names(), vec!["100m", "Mile"]);
    }

    #[test]
    fn test_empty_road_list_falls_back_to_standard() {
        let from_none = DisciplineCatalog::from_comma_separated(None);
        let from_blank = DisciplineCatalog::from_comma_separated(Some(" , "));

        assert_eq!(from_none.road_names().len(), STANDARD_ROAD_DISCIPLINES.len());
        assert_eq!(from_blank.classify("800m"), DisciplineType::Road);
    }

    #[test]
    fn test_labels_order_field_before_road() {
        assert!(DisciplineType::Field.as_str() < DisciplineType::Road.as_str());
        assert_eq!(DisciplineType::Road.to_string(), "road");
    }
}
