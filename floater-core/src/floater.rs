use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Reporting status of a floater, as shown on its map marker.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FloaterStatus {
    Active,
    Inactive,
    Unknown,
}

impl FloaterStatus {
    fn parse(s: &str) -> FloaterStatus {
        match s.trim().to_lowercase().as_str() {
            "active" | "a" => FloaterStatus::Active,
            "inactive" | "i" | "dead" => FloaterStatus::Inactive,
            _ => FloaterStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FloaterStatus::Active => "active",
            FloaterStatus::Inactive => "inactive",
            FloaterStatus::Unknown => "unknown",
        }
    }
}

/// Marker data for one floater. This is all the map layer consumes.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Floater {
    pub id: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    pub status: FloaterStatus,
}

impl Floater {
    /// Parse a CSV listing of floaters.
    ///
    /// Expected CSV columns (with headers): ID, LATITUDE, LONGITUDE, STATUS.
    /// Rows without an id or without valid coordinates cannot be placed on the
    /// map and are skipped.
    pub fn parse_floater_csv(csv_object: &str) -> Result<Vec<Floater>, csv::Error> {
        let mut floaters: Vec<Floater> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let id = record.get(0).unwrap_or("").trim();
            if id.is_empty() {
                continue;
            }
            let latitude = record.get(1).and_then(|s| s.trim().parse::<f64>().ok());
            let longitude = record.get(2).and_then(|s| s.trim().parse::<f64>().ok());
            let (latitude, longitude) = match (latitude, longitude) {
                (Some(lat), Some(lon))
                    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
                {
                    (lat, lon)
                }
                _ => {
                    log::warn!("skipping floater {} with invalid position", id);
                    continue;
                }
            };
            let status = FloaterStatus::parse(record.get(3).unwrap_or(""));
            floaters.push(Floater {
                id: id.to_string(),
                latitude,
                longitude,
                status,
            });
        }
        Ok(floaters)
    }
}
