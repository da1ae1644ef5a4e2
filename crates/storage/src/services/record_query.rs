use std::cmp::Ordering;

use crate::discipline::DisciplineCatalog;
use crate::models::StadiumSetting;

/// Attributes a list entry must expose to be filtered and ordered.
pub trait RecordView {
    fn age_group_label(&self) -> Option<&str>;
    fn discipline_name(&self) -> Option<&str>;
    fn stadium_setting(&self) -> Option<&str>;
    fn performance(&self) -> Option<f64>;
}

/// Orders entries by age group, then discipline type label, then performance.
///
/// The type label is compared as a plain string, so `"field"` entries come
/// before `"road"` entries inside an age group. Missing age groups and
/// missing performances sort last. Exact ties keep their input order.
pub fn sorted_view<T: RecordView>(
    entries: Vec<T>,
    setting: Option<StadiumSetting>,
    catalog: &DisciplineCatalog,
) -> Vec<T> {
    let mut entries: Vec<T> = match setting {
        Some(setting) => entries
            .into_iter()
            .filter(|entry| entry.stadium_setting() == Some(setting.as_str()))
            .collect(),
        None => entries,
    };

    entries.sort_by(|a, b| {
        nulls_last(a.age_group_label(), b.age_group_label(), |x, y| x.cmp(y))
            .then_with(|| type_label(a, catalog).cmp(type_label(b, catalog)))
            .then_with(|| nulls_last(a.performance(), b.performance(), f64::total_cmp))
    });

    entries
}

fn type_label<T: RecordView>(entry: &T, catalog: &DisciplineCatalog) -> &'static str {
    // An unresolved discipline falls through to the field label, like any
    // name missing from the road list.
    catalog
        .classify(entry.discipline_name().unwrap_or_default())
        .as_str()
}

fn nulls_last<V>(a: Option<V>, b: Option<V>, cmp: impl Fn(&V, &V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Entry {
        id: u32,
        age_group: Option<&'static str>,
        discipline: Option<&'static str>,
        setting: Option<&'static str>,
        performance: Option<f64>,
    }

    impl RecordView for Entry {
        fn age_group_label(&self) -> Option<&str> {
            self.age_group
        }

        fn discipline_name(&self) -> Option<&str> {
            self.discipline
        }

        fn stadium_setting(&self) -> Option<&str> {
            self.setting
        }

        fn performance(&self) -> Option<f64> {
            self.performance
        }
    }

    fn entry(
        id: u32,
        age_group: &'static str,
        discipline: &'static str,
        setting: &'static str,
        performance: f64,
    ) -> Entry {
        Entry {
            id,
            age_group: Some(age_group),
            discipline: Some(discipline),
            setting: Some(setting),
            performance: Some(performance),
        }
    }

    fn ids(entries: &[Entry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_groups_by_age_group_then_field_before_road() {
        let catalog = DisciplineCatalog::standard();
        let entries = vec![
            entry(1, "Women", "400m", "outdoors", 59.80),
            entry(2, "Men", "200m", "outdoors", 24.56),
            entry(3, "Women", "Long Jump", "outdoors", 6.10),
            entry(4, "Men", "Shot Put", "outdoors", 14.20),
            entry(5, "Men", "400m", "outdoors", 52.34),
            entry(6, "Men", "High Jump", "indoors", 2.01),
        ];

        let sorted = sorted_view(entries, None, &catalog);

        assert_eq!(ids(&sorted), vec![6, 4, 2, 5, 3, 1]);
    }

    #[test]
    fn test_filter_by_stadium_setting() {
        let catalog = DisciplineCatalog::standard();
        let entries = vec![
            entry(1, "Men", "1500m", "indoors", 250.0),
            entry(2, "Men", "400m", "outdoors", 52.34),
            entry(3, "Women", "400m Hurdles", "indoors", 63.45),
            Entry {
                id: 4,
                age_group: Some("Men"),
                discipline: None,
                setting: None,
                performance: Some(10.0),
            },
        ];

        let outdoors = sorted_view(entries.clone(), Some(StadiumSetting::Outdoors), &catalog);
        assert_eq!(ids(&outdoors), vec![2]);

        let indoors = sorted_view(entries, Some(StadiumSetting::Indoors), &catalog);
        assert_eq!(ids(&indoors), vec![1, 3]);
    }

    #[test]
    fn test_missing_values_sort_last() {
        let catalog = DisciplineCatalog::standard();
        let entries = vec![
            Entry {
                id: 1,
                age_group: None,
                discipline: Some("100m"),
                setting: Some("outdoors"),
                performance: Some(10.5),
            },
            Entry {
                id: 2,
                age_group: Some("Men"),
                discipline: Some("100m"),
                setting: Some("outdoors"),
                performance: None,
            },
            entry(3, "Men", "100m", "outdoors", 11.2),
            entry(4, "Men", "100m", "outdoors", 10.9),
        ];

        let sorted = sorted_view(entries, None, &catalog);

        assert_eq!(ids(&sorted), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_exact_ties_keep_input_order() {
        let catalog = DisciplineCatalog::standard();
        let entries = vec![
            entry(1, "MenU20", "800m", "outdoors", 115.0),
            entry(2, "MenU20", "800m", "outdoors", 115.0),
            entry(3, "MenU20", "1500m", "outdoors", 115.0),
        ];

        let sorted = sorted_view(entries, None, &catalog);

        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_unresolved_discipline_orders_with_field_events() {
        let catalog = DisciplineCatalog::standard();
        let entries = vec![
            entry(1, "Men", "100m", "outdoors", 10.5),
            Entry {
                id: 2,
                age_group: Some("Men"),
                discipline: None,
                setting: None,
                performance: Some(50.0),
            },
        ];

        let sorted = sorted_view(entries, None, &catalog);

        assert_eq!(ids(&sorted), vec![2, 1]);
    }
}
