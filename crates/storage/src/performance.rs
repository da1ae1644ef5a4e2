//! Conversion between user-entered performance text and the stored value.
//!
//! Road events are durations (`"4:18.5"`, `"24.56"`) stored as seconds, field
//! events are distances (`"7.15"`) stored as metres. Both end up in the same
//! numeric column; the discipline decides how the number is rendered.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::discipline::DisciplineType;

pub const INVALID_FORMAT_MESSAGE: &str =
    "Invalid format. Expected 'mm:ss.ss' for road events or a plain number for field events.";

lazy_static! {
    static ref MINUTES_SECONDS: Regex =
        Regex::new(r"^(?P<minutes>\d{1,2}):(?P<seconds>\d{1,2}(\.\d{1,3})?)$")
            .expect("minutes:seconds pattern is valid");
    static ref PLAIN_VALUE: Regex =
        Regex::new(r"^(?P<value>\d{1,4}(\.\d{1,3})?)$").expect("plain value pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerformanceError {
    #[error("Invalid performance format: '{input}'")]
    InvalidFormat { input: String },
}

impl PerformanceError {
    /// The fixed message shown next to the offending form field.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => INVALID_FORMAT_MESSAGE,
        }
    }
}

/// Parses `"mm:ss.sss"` first and falls back to a plain `"ssss.sss"` value.
///
/// No range checks: `"4:75"` is accepted as 315 seconds.
pub fn parse(input: &str) -> Result<f64, PerformanceError> {
    let invalid = || PerformanceError::InvalidFormat {
        input: input.to_string(),
    };

    if let Some(caps) = MINUTES_SECONDS.captures(input) {
        let minutes: f64 = caps["minutes"].parse().map_err(|_| invalid())?;
        let seconds: f64 = caps["seconds"].parse().map_err(|_| invalid())?;
        return Ok(minutes * 60.0 + seconds);
    }

    if let Some(caps) = PLAIN_VALUE.captures(input) {
        return caps["value"].parse().map_err(|_| invalid());
    }

    Err(invalid())
}

/// Renders a stored value in its canonical two-decimal form.
///
/// Road values drop whole hours and omit the minutes when there are none,
/// so `45.2` becomes `"45.20"` and `258.5` becomes `"04:18.50"`.
pub fn format(value: Option<f64>, kind: DisciplineType) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match kind {
        DisciplineType::Road => {
            let minutes = ((value % 3600.0) / 60.0).floor() as i64;
            let seconds = value % 60.0;

            if minutes == 0 {
                format!("{seconds:05.2}")
            } else {
                format!("{minutes:02}:{seconds:05.2}")
            }
        }
        DisciplineType::Field => format!("{value:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_minutes_seconds() {
        assert_close(parse("4:18.5").unwrap(), 258.5);
        assert_close(parse("63:45").unwrap(), 63.0 * 60.0 + 45.0);
        assert_close(parse("0:59.999").unwrap(), 59.999);
        assert_close(parse("99:99.99").unwrap(), 99.0 * 60.0 + 99.99);
    }

    #[test]
    fn test_parse_plain_value() {
        assert_close(parse("24.56").unwrap(), 24.56);
        assert_close(parse("632.1").unwrap(), 632.1);
        assert_close(parse("7").unwrap(), 7.0);
        assert_close(parse("1234.567").unwrap(), 1234.567);
    }

    #[test]
    fn test_parse_accepts_out_of_range_seconds() {
        assert_close(parse("4:75").unwrap(), 315.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("abc").unwrap_err();
        assert_eq!(
            err,
            PerformanceError::InvalidFormat {
                input: "abc".to_string()
            }
        );
        assert_eq!(err.user_message(), INVALID_FORMAT_MESSAGE);
    }

    #[test]
    fn test_parse_requires_full_match() {
        for input in [
            "",
            " 4:18.5",
            "4:18.5 ",
            "4:18.5\n",
            "x24.56",
            "24.56s",
            "123:45",
            "4:123",
            "12345",
            "1.2345",
            "4:18.1234",
            "-4.5",
            "1:2:3",
            "4.",
        ] {
            assert!(parse(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_format_road() {
        assert_eq!(format(Some(258.5), DisciplineType::Road), "04:18.50");
        assert_eq!(format(Some(45.2), DisciplineType::Road), "45.20");
        assert_eq!(format(Some(4.18), DisciplineType::Road), "04.18");
        assert_eq!(format(Some(3825.0), DisciplineType::Road), "03:45.00");
        assert_eq!(format(Some(0.0), DisciplineType::Road), "00.00");
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format(Some(7.15), DisciplineType::Field), "7.15");
        assert_eq!(format(Some(63.4), DisciplineType::Field), "63.40");
        assert_eq!(format(Some(0.0), DisciplineType::Field), "0.00");
    }

    #[test]
    fn test_format_missing_value() {
        assert_eq!(format(None, DisciplineType::Road), "");
        assert_eq!(format(None, DisciplineType::Field), "");
    }

    #[test]
    fn test_format_is_canonical() {
        assert_eq!(
            format(Some(parse("4:18").unwrap()), DisciplineType::Road),
            "04:18.00"
        );
    }

    #[test]
    fn test_format_is_stable_under_reparse() {
        for kind in [DisciplineType::Road, DisciplineType::Field] {
            for input in ["4:18.5", "63:45", "24.56", "632.1", "7.15", "0", "12:03.07"] {
                let once = format(Some(parse(input).unwrap()), kind);
                let twice = format(Some(parse(&once).unwrap()), kind);
                assert_eq!(once, twice, "{input} is not stable for {kind:?}");
            }
        }
    }
}
