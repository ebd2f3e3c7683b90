use std::string::FromUtf8Error;

use thiserror::Error;

use super::TypeTag;
use crate::error::TemporalError;

#[derive(Error, Debug)]
pub enum SerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid serialized data: unknown type tag {tag}")]
    CorruptStream { tag: u8 },

    #[error("Invalid serialized data: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: TypeTag,
    },

    #[error("Invalid serialized value: {0}")]
    InvalidValue(#[from] TemporalError),

    #[error("Invalid UTF-8 in serialized string: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("String of {0} bytes is too long to serialize")]
    StringTooLong(usize),

    #[error("{count} trailing bytes after serialized value")]
    TrailingBytes { count: usize },
}

pub type SerResult<T> = std::result::Result<T, SerError>;
