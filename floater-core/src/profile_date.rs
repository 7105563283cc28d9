use crate::error::FetchError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;
use serde::{Deserialize, Serialize};

/// Date format used for profile date display and ISO date-only values: "YYYY-MM-DD"
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One available profile for a floater: the backend key used to request it and
/// the date the profile was taken.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ProfileDate {
    pub key: String,
    pub iso_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawProfileDate {
    key: String,
    #[serde(rename = "isoDate")]
    iso_date: String,
}

/// Parse an ISO-8601 date or timestamp down to its calendar date.
///
/// Accepts `2024-03-02`, `2024-03-02T06:15:00Z` and `2024-03-02T06:15:00`.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(s) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|stamp| stamp.date())
}

impl ProfileDate {
    pub fn new(key: &str, iso_date: NaiveDate) -> Self {
        Self {
            key: key.to_string(),
            iso_date,
        }
    }

    /// Decode a `getDates` response body into a list ordered oldest to newest.
    ///
    /// Entries with an unparseable date are skipped.
    pub fn parse_list(body: &str) -> Result<Vec<ProfileDate>, FetchError> {
        let raw: Vec<RawProfileDate> =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    /// Same as [`parse_list`](Self::parse_list) for an already-parsed document.
    pub fn from_list_value(value: &serde_json::Value) -> Result<Vec<ProfileDate>, FetchError> {
        let raw = Vec::<RawProfileDate>::deserialize(value)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: Vec<RawProfileDate>) -> Vec<ProfileDate> {
        let mut dates = raw
            .into_iter()
            .filter_map(|r| match parse_iso_date(&r.iso_date) {
                Some(iso_date) => Some(ProfileDate {
                    key: r.key,
                    iso_date,
                }),
                None => {
                    warn!("skipping profile date {} with bad date {:?}", r.key, r.iso_date);
                    None
                }
            })
            .collect::<Vec<ProfileDate>>();
        dates.sort_by(|a, b| a.iso_date.cmp(&b.iso_date));
        dates
    }

    /// The most recent entry of an ordered list.
    pub fn latest(dates: &[ProfileDate]) -> Option<&ProfileDate> {
        dates.last()
    }

    /// Date formatted for display ("YYYY-MM-DD").
    pub fn display_date(&self) -> String {
        self.iso_date.format(ISO_DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_date_only_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(parse_iso_date("2024-03-02"), Some(expected));
        assert_eq!(parse_iso_date("2024-03-02T06:15:00Z"), Some(expected));
        assert_eq!(parse_iso_date("2024-03-02T06:15:00+02:00"), Some(expected));
        assert_eq!(parse_iso_date("2024-03-02T06:15:00"), Some(expected));
        assert_eq!(parse_iso_date("March 2nd"), None);
    }

    #[test]
    fn test_list_is_ordered_and_skips_bad_dates() {
        let body = r#"[
            {"key": "c3", "isoDate": "2024-03-12T00:00:00Z"},
            {"key": "c1", "isoDate": "2024-02-21"},
            {"key": "bad", "isoDate": "yesterday"},
            {"key": "c2", "isoDate": "2024-03-02"}
        ]"#;
        let dates = ProfileDate::parse_list(body).unwrap();
        let keys: Vec<&str> = dates.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["c1", "c2", "c3"]);
        assert_eq!(ProfileDate::latest(&dates).unwrap().key, "c3");
        assert_eq!(dates[0].display_date(), "2024-02-21");
    }

    #[test]
    fn test_empty_list_has_no_latest() {
        let dates = ProfileDate::parse_list("[]").unwrap();
        assert!(ProfileDate::latest(&dates).is_none());
    }

    #[test]
    fn test_non_list_body_is_a_decode_error() {
        assert!(matches!(
            ProfileDate::parse_list(r#"{"key": "c1"}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_list_decodes_from_parsed_document() {
        let value = serde_json::json!([
            {"key": "b", "isoDate": "2023-11-30"},
            {"key": "a", "isoDate": "2023-10-01"}
        ]);
        let dates = ProfileDate::from_list_value(&value).unwrap();
        assert_eq!(dates[0].key, "a");
        assert!(ProfileDate::from_list_value(&serde_json::json!("nope")).is_err());
    }
}
