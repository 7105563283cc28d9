//! Core types for oceanographic floater depth profiles.
//!
//! - `level`: raw depth-level records as the backend sends them
//! - `profile`: the profile response envelope (`levels` + `summary`)
//! - `profile_date`: dated profile keys for one floater
//! - `floater`: per-device marker data consumed by the map layer
//! - `error`: typed fetch and data-shape errors
//! - `client`: async HTTP client for the profile backend (`api` feature)

pub mod error;
pub mod floater;
pub mod level;
pub mod profile;
pub mod profile_date;

#[cfg(feature = "api")]
pub mod client;

pub use error::{DataShapeError, FetchError};
pub use level::LevelMeasurement;
pub use profile::{ProfileResponse, ProfileSummary};
pub use profile_date::ProfileDate;
