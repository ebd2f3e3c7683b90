use thiserror::Error;

use crate::temporal::{Chronology, ValueRange};

/// Field, range and conversion errors raised by temporal values.
#[derive(Error, Debug)]
pub enum TemporalError {
    #[error("Invalid value for {field} (valid values {range}): {value}")]
    InvalidRange {
        field: String,
        range: ValueRange,
        value: i64,
    },

    #[error("Unable to obtain {target} from temporal of type {type_name}")]
    Conversion {
        target: &'static str,
        type_name: &'static str,
        #[source]
        source: Box<TemporalError>,
    },

    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("Adjustment only supported on ISO date-time, found {0}")]
    ChronologyMismatch(Chronology),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error(transparent)]
    CoreError(#[from] isochron_core::error::CoreError),
}

impl TemporalError {
    /// Creates an unsupported field error naming `field`.
    #[must_use]
    pub fn unsupported(field: impl std::fmt::Display) -> Self {
        Self::UnsupportedField(field.to_string())
    }
}

pub type TemporalResult<T> = std::result::Result<T, TemporalError>;
