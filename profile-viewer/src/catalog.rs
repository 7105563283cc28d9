//! Embedded profile catalog standing in for the profile backend.
//!
//! The catalog document has the shape
//! `{"floaterId": "...", "dates": [{key, isoDate}], "profiles": {key: response}}`
//! where each response is what the backend returns for `/profiles/{key}`.

use floater_core::{FetchError, ProfileDate, ProfileResponse};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCatalog {
    pub floater_id: String,
    /// Oldest first.
    pub dates: Vec<ProfileDate>,
    profiles: Map<String, Value>,
}

impl ProfileCatalog {
    pub fn parse(body: &str) -> Result<ProfileCatalog, FetchError> {
        let root: Value =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let floater_id = root
            .get("floaterId")
            .and_then(Value::as_str)
            .ok_or_else(|| FetchError::Decode("catalog has no floaterId".to_string()))?
            .to_string();
        let dates = match root.get("dates") {
            Some(value) => ProfileDate::from_list_value(value)?,
            None => Vec::new(),
        };
        let profiles = root
            .get("profiles")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        log::info!(
            "catalog: floater {} with {} dates and {} profiles",
            floater_id,
            dates.len(),
            profiles.len()
        );
        Ok(ProfileCatalog {
            floater_id,
            dates,
            profiles,
        })
    }

    /// The profile stored under `key`, decoded like a backend response.
    /// Unknown keys behave like a 404.
    pub fn get_by_date(&self, key: &str) -> Result<ProfileResponse, FetchError> {
        match self.profiles.get(key) {
            Some(value) => ProfileResponse::from_value(value),
            None => Err(FetchError::Status(404)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "floaterId": "4903011",
        "dates": [
            {"key": "b", "isoDate": "2024-03-02"},
            {"key": "a", "isoDate": "2024-02-01T00:00:00Z"},
            {"key": "gone", "isoDate": "2024-03-09"}
        ],
        "profiles": {
            "a": {"levels": [{"level_index": 0, "pres": 5.0, "temp": 20.0, "psal": 34.1}]},
            "b": {"levels": []}
        }
    }"#;

    #[test]
    fn test_catalog_orders_dates() {
        let catalog = ProfileCatalog::parse(BODY).unwrap();
        assert_eq!(catalog.floater_id, "4903011");
        let keys: Vec<&str> = catalog.dates.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "gone"]);
    }

    #[test]
    fn test_profiles_decode_like_backend_responses() {
        let catalog = ProfileCatalog::parse(BODY).unwrap();
        assert_eq!(catalog.get_by_date("a").unwrap().levels.len(), 1);
        assert!(catalog.get_by_date("b").unwrap().levels.is_empty());
        assert_eq!(catalog.get_by_date("gone"), Err(FetchError::Status(404)));
    }

    #[test]
    fn test_catalog_without_floater_is_rejected() {
        assert!(matches!(
            ProfileCatalog::parse(r#"{"dates": []}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_embedded_fixture_parses() {
        let body = include_str!(concat!(env!("OUT_DIR"), "/profiles.json"));
        let catalog = ProfileCatalog::parse(body).unwrap();
        assert!(!catalog.floater_id.is_empty());
    }
}
