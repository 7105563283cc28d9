use crate::error::FetchError;
use crate::level::LevelMeasurement;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary block attached to a profile response.
///
/// Only `level_count` feeds the normalizer (as its cap); the remaining fields
/// are informational and shown in headers.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub level_count: Option<i64>,
    pub cycle_number: Option<i64>,
    pub profile_date: Option<String>,
}

/// A depth profile as returned by `get_latest` / `get_by_date`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub levels: Vec<LevelMeasurement>,
    pub summary: Option<ProfileSummary>,
    /// Number of raw records dropped during decoding because of their shape.
    #[serde(skip)]
    pub rejected_levels: usize,
}

impl ProfileSummary {
    fn from_value(value: &Value) -> Option<ProfileSummary> {
        let obj = value.as_object()?;
        Some(ProfileSummary {
            level_count: obj.get("level_count").and_then(Value::as_i64),
            cycle_number: obj.get("cycle_number").and_then(Value::as_i64),
            profile_date: obj
                .get("profile_date")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

impl ProfileResponse {
    /// Decode a response body.
    ///
    /// The envelope must be a JSON object. Individual level records that do not
    /// have the expected shape are dropped (and counted) rather than failing
    /// the whole response. A missing `levels` field decodes as an empty profile.
    pub fn from_json(body: &str) -> Result<ProfileResponse, FetchError> {
        let root: Value =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        ProfileResponse::from_value(&root)
    }

    pub fn from_value(root: &Value) -> Result<ProfileResponse, FetchError> {
        let obj = root
            .as_object()
            .ok_or_else(|| FetchError::Decode("profile response is not an object".to_string()))?;

        let raw_levels: &[Value] = match obj.get("levels") {
            None | Some(Value::Null) => &[],
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(FetchError::Decode(
                    "`levels` is not an array".to_string(),
                ))
            }
        };

        let mut levels = Vec::with_capacity(raw_levels.len());
        let mut rejected_levels = 0usize;
        for (position, raw) in raw_levels.iter().enumerate() {
            match LevelMeasurement::try_from(raw) {
                Ok(level) => levels.push(level),
                Err(e) => {
                    debug!("dropping level record #{}: {}", position, e);
                    rejected_levels += 1;
                }
            }
        }

        let summary = obj.get("summary").and_then(ProfileSummary::from_value);

        Ok(ProfileResponse {
            levels,
            summary,
            rejected_levels,
        })
    }

    /// The upstream cap on the number of levels, if the summary provides a
    /// positive `level_count`.
    pub fn max_count(&self) -> Option<usize> {
        self.summary
            .as_ref()
            .and_then(|s| s.level_count)
            .filter(|count| *count > 0)
            .and_then(|count| usize::try_from(count).ok())
    }

    /// Number of records in the raw `levels` array, including the ones
    /// rejected while decoding.
    pub fn raw_count(&self) -> usize {
        self.levels.len() + self.rejected_levels
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileResponse;
    use crate::error::FetchError;

    const BODY: &str = r#"{
        "levels": [
            {"level_index": 0, "pres": 1.2, "temp": 21.4, "psal": 35.02},
            {"level_index": 1, "pres": "n/a", "temp": 21.1, "psal": 35.03},
            {"level_index": 2, "pres": 10.6, "temp": null, "psal": 35.04},
            "garbage"
        ],
        "summary": {"level_count": 40, "cycle_number": 112, "profile_date": "2024-03-02"}
    }"#;

    #[test]
    fn test_decodes_levels_and_summary() {
        let response = ProfileResponse::from_json(BODY).unwrap();
        assert_eq!(response.levels.len(), 2);
        assert_eq!(response.rejected_levels, 2);
        assert_eq!(response.max_count(), Some(40));
        let summary = response.summary.unwrap();
        assert_eq!(summary.cycle_number, Some(112));
        assert_eq!(summary.profile_date.as_deref(), Some("2024-03-02"));
    }

    #[test]
    fn test_raw_count_includes_rejected_records() {
        let response = ProfileResponse::from_json(BODY).unwrap();
        assert_eq!(response.raw_count(), 4);
    }

    #[test]
    fn test_level_count_converts_without_truncation() {
        let response = ProfileResponse::from_json(
            r#"{"levels": [], "summary": {"level_count": 9223372036854775807}}"#,
        )
        .unwrap();
        assert_eq!(response.max_count(), usize::try_from(i64::MAX).ok());
        let negative =
            ProfileResponse::from_json(r#"{"levels": [], "summary": {"level_count": -3}}"#)
                .unwrap();
        assert_eq!(negative.max_count(), None);
    }

    #[test]
    fn test_missing_summary_has_no_cap() {
        let response = ProfileResponse::from_json(r#"{"levels": []}"#).unwrap();
        assert!(response.levels.is_empty());
        assert_eq!(response.max_count(), None);
    }

    #[test]
    fn test_non_positive_level_count_is_ignored() {
        let response =
            ProfileResponse::from_json(r#"{"levels": [], "summary": {"level_count": 0}}"#).unwrap();
        assert_eq!(response.max_count(), None);
    }

    #[test]
    fn test_malformed_summary_does_not_fail() {
        let response =
            ProfileResponse::from_json(r#"{"levels": [], "summary": {"level_count": "lots"}}"#)
                .unwrap();
        assert_eq!(response.max_count(), None);
    }

    #[test]
    fn test_missing_levels_is_an_empty_profile() {
        let response = ProfileResponse::from_json(r#"{"summary": null}"#).unwrap();
        assert!(response.levels.is_empty());
    }

    #[test]
    fn test_non_object_envelope_is_a_decode_error() {
        assert!(matches!(
            ProfileResponse::from_json("[1, 2]"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            ProfileResponse::from_json(r#"{"levels": 4}"#),
            Err(FetchError::Decode(_))
        ));
    }
}
