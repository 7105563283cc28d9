use crate::error::DataShapeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw depth-level record, as received from the backend.
///
/// Every field may be absent. Nothing about ordering or uniqueness is
/// guaranteed; the normalizer in `floater-data` is responsible for turning a
/// list of these into a displayable sequence.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct LevelMeasurement {
    pub level_index: Option<i64>,
    /// Pressure in decibar, used as the depth proxy.
    pub pres: Option<f64>,
    /// Temperature in degrees Celsius.
    pub temp: Option<f64>,
    /// Practical salinity.
    pub psal: Option<f64>,
}

impl LevelMeasurement {
    pub fn new(level_index: Option<i64>, pres: Option<f64>, temp: Option<f64>, psal: Option<f64>) -> Self {
        Self {
            level_index,
            pres,
            temp,
            psal,
        }
    }

    /// Index used for ordering; an absent index sorts as level 0.
    pub fn sort_key(&self) -> i64 {
        self.level_index.unwrap_or(0)
    }
}

fn field_to_index(value: Option<&Value>) -> Result<Option<i64>, DataShapeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i64)),
                _ => Err(DataShapeError::InvalidField {
                    field: "level_index",
                    found: n.to_string(),
                }),
            }
        }
        Some(other) => Err(DataShapeError::InvalidField {
            field: "level_index",
            found: other.to_string(),
        }),
    }
}

fn field_to_f64(field: &'static str, value: Option<&Value>) -> Result<Option<f64>, DataShapeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64().filter(|f| f.is_finite())),
        Some(other) => Err(DataShapeError::InvalidField {
            field,
            found: other.to_string(),
        }),
    }
}

impl TryFrom<&Value> for LevelMeasurement {
    type Error = DataShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = value.as_object().ok_or(DataShapeError::NotAnObject)?;
        Ok(LevelMeasurement {
            level_index: field_to_index(obj.get("level_index"))?,
            pres: field_to_f64("pres", obj.get("pres"))?,
            temp: field_to_f64("temp", obj.get("temp"))?,
            psal: field_to_f64("psal", obj.get("psal"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LevelMeasurement;
    use crate::error::DataShapeError;
    use serde_json::json;

    #[test]
    fn test_full_record_parses() {
        let raw = json!({"level_index": 3, "pres": 12.5, "temp": 18.25, "psal": 35.1});
        let level = LevelMeasurement::try_from(&raw).unwrap();
        assert_eq!(level, LevelMeasurement::new(Some(3), Some(12.5), Some(18.25), Some(35.1)));
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let raw = json!({"pres": 4.0, "temp": null});
        let level = LevelMeasurement::try_from(&raw).unwrap();
        assert_eq!(level.level_index, None);
        assert_eq!(level.temp, None);
        assert_eq!(level.psal, None);
        assert_eq!(level.sort_key(), 0);
    }

    #[test]
    fn test_integral_float_index_is_accepted() {
        let raw = json!({"level_index": 7.0, "pres": 1.0});
        let level = LevelMeasurement::try_from(&raw).unwrap();
        assert_eq!(level.level_index, Some(7));
    }

    #[test]
    fn test_fractional_index_is_rejected() {
        let raw = json!({"level_index": 7.5, "pres": 1.0});
        assert!(matches!(
            LevelMeasurement::try_from(&raw),
            Err(DataShapeError::InvalidField { field: "level_index", .. })
        ));
    }

    #[test]
    fn test_string_measurement_is_rejected() {
        let raw = json!({"level_index": 1, "pres": "deep"});
        assert!(matches!(
            LevelMeasurement::try_from(&raw),
            Err(DataShapeError::InvalidField { field: "pres", .. })
        ));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert_eq!(
            LevelMeasurement::try_from(&json!([1, 2, 3])),
            Err(DataShapeError::NotAnObject)
        );
    }
}
