//! Wire date formats used across the Ozon APIs.
//!
//! The Seller API takes timestamps with microsecond precision and a literal
//! `Z` suffix; date-only and month-only filters use the shorter forms.

use chrono::{DateTime, NaiveDate, Utc};

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";
const DATE_FORMAT: &str = "%Y-%m-%d";
const MONTH_FORMAT: &str = "%Y-%m";

/// `2024-03-01T12:30:45.000000Z`
pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// `2024-03-01`
pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// `2024-03`
pub fn format_month(value: NaiveDate) -> String {
    value.format(MONTH_FORMAT).to_string()
}

/// Serde helper for `Option<DateTime<Utc>>` fields in request structs.
///
/// Pair with `#[serde(skip_serializing_if = "Option::is_none")]` so absent
/// values are pruned rather than sent as `null`.
pub mod serde_opt_date_time {
    use serde::Serializer;

    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&format_date_time(value)),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde helper for required `DateTime<Utc>` fields in request structs.
pub mod serde_date_time {
    use serde::Serializer;

    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date_time(value))
    }
}

/// Serde helper for required `NaiveDate` fields in request structs.
pub mod serde_date {
    use serde::Serializer;

    use super::*;

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*value))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_time_format_has_microseconds_and_z_suffix() {
        let value = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
        assert_eq!(format_date_time(&value), "2024-03-01T12:30:45.000000Z");
    }

    #[test]
    fn date_and_month_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date), "2024-03-01");
        assert_eq!(format_month(date), "2024-03");
    }
}
