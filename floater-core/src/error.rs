use std::fmt;

/// Errors surfaced by the profile fetch collaborator.
///
/// These are the only failures that leave the core as errors; bad data inside
/// a successful response is handled by dropping records, not by failing.
#[derive(Debug, PartialEq, Clone)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    Http(String),
    /// The backend answered with a non-success status code.
    Status(u16),
    /// The backend answered with an empty body.
    EmptyBody,
    /// The body was not a profile payload at all.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "backend returned status {}", code),
            FetchError::EmptyBody => write!(f, "backend returned an empty response"),
            FetchError::Decode(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// A raw level record that does not have the expected shape.
///
/// Produced while decoding a profile payload and recovered locally: the record
/// is excluded and decoding continues with the next one.
#[derive(Debug, PartialEq, Clone)]
pub enum DataShapeError {
    /// The record is not a JSON object.
    NotAnObject,
    /// A known field holds a value of the wrong type.
    InvalidField { field: &'static str, found: String },
}

impl fmt::Display for DataShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataShapeError::NotAnObject => write!(f, "level record is not an object"),
            DataShapeError::InvalidField { field, found } => {
                write!(f, "level field `{}` has unexpected value {}", field, found)
            }
        }
    }
}

impl std::error::Error for DataShapeError {}
