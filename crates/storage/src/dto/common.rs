use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::StadiumSetting;

/// Query parameters shared by the record and goal list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SettingFilter {
    /// `indoors` or `outdoors`; omitted or empty means no filtering
    pub indoors_outdoors: Option<String>,
}

impl SettingFilter {
    pub fn validate(&self) -> Result<Option<StadiumSetting>, String> {
        match self.indoors_outdoors.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => StadiumSetting::parse(value)
                .map(Some)
                .ok_or_else(|| "indoors_outdoors must be 'indoors' or 'outdoors'".to_string()),
        }
    }
}

pub(crate) fn validate_setting(setting: &str) -> Result<(), validator::ValidationError> {
    if StadiumSetting::parse(setting).is_some() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_indoors_outdoors"))
    }
}

pub(crate) fn validate_performance(value: &str) -> Result<(), validator::ValidationError> {
    match crate::performance::parse(value) {
        Ok(_) => Ok(()),
        Err(e) => {
            let mut error = validator::ValidationError::new("invalid_performance");
            error.message = Some(e.user_message().into());
            Err(error)
        }
    }
}

pub(crate) fn validate_wind(wind: &rust_decimal::Decimal) -> Result<(), validator::ValidationError> {
    let limit = rust_decimal::Decimal::new(99, 1);

    if wind.abs() <= limit && wind.scale() <= 1 {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_wind");
        error.message = Some("Wind must be between -9.9 and 9.9 with one decimal place".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_filter() {
        let none = SettingFilter::default();
        assert_eq!(none.validate(), Ok(None));

        let empty = SettingFilter {
            indoors_outdoors: Some(String::new()),
        };
        assert_eq!(empty.validate(), Ok(None));

        let indoors = SettingFilter {
            indoors_outdoors: Some("indoors".to_string()),
        };
        assert_eq!(indoors.validate(), Ok(Some(StadiumSetting::Indoors)));

        let bogus = SettingFilter {
            indoors_outdoors: Some("Outdoors".to_string()),
        };
        assert!(bogus.validate().is_err());
    }

    #[test]
    fn test_validate_wind() {
        use rust_decimal::Decimal;

        assert!(validate_wind(&Decimal::new(18, 1)).is_ok());
        assert!(validate_wind(&Decimal::new(-99, 1)).is_ok());
        assert!(validate_wind(&Decimal::new(100, 1)).is_err());
        assert!(validate_wind(&Decimal::new(125, 2)).is_err());
    }

    #[test]
    fn test_validate_performance_message() {
        assert!(validate_performance("4:18.5").is_ok());

        let error = validate_performance("fast").unwrap_err();
        assert_eq!(error.code, "invalid_performance");
        assert_eq!(
            error.message.as_deref(),
            Some(crate::performance::INVALID_FORMAT_MESSAGE)
        );
    }
}
