//! SDDS (Self Describing Data Sets) decoder
//!
//! SDDS files describe their own layout: a line-oriented ASCII header declares
//! every field, and a binary body follows whose layout is fully determined by
//! that header.
//!
//! # Format Overview
//!
//! ## Header
//!
//! ```text
//! SDDS1
//! !# little-endian
//! &parameter name=Time, type=double, &end
//! &array name=Bins, type=long, &end
//! &column name=Description, type=string, &end
//! &column name=ValueString, type=string, &end
//! &data mode=binary, &end
//! ```
//!
//! - `&parameter`, `&array`, `&column` lines declare fields, in body order
//! - `&data` is the sentinel ending the header
//! - `!# big-endian` switches the body byte order (little-endian otherwise)
//!
//! ## Binary body
//!
//! - 4 bytes: row count (i32)
//! - Parameters: one value each, in declared order
//! - Arrays: i32 element count, then that many values, in declared order
//! - Rows: row-major, every column in declared order for each row
//!
//! Numeric values are stored at their fixed width; strings are an i32 byte
//! length followed by that many bytes of UTF-8.
//!
//! Decoding is a pure function of the input buffer. Gzip and transport are
//! left to the caller.

mod attr;
mod decode;
mod field;
mod header;
mod publish;
mod reader;
mod schema;
mod table;
mod value;

#[cfg(test)]
mod fixture;

pub use attr::attribute;
pub use decode::{decode, decode_body, decode_with, DecodeConfig};
pub use field::{Definition, Role, Type as FieldType};
pub use header::{Endian, Header, DATA_SENTINEL};
pub use publish::{Latest, Ticket};
pub use schema::Schema;
pub use table::{Array, Column, DecodedTable, Parameter, Row, DESCRIPTION_COLUMN, VALUE_COLUMN};
pub use value::Value;

/// Upper bound on the row count read from the body
pub const MAX_ROWS: usize = 1_000_000;

/// Errors from SDDS decoding
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Missing type attribute for {role} '{name}'")]
    MissingFieldType { role: Role, name: String },

    #[error("Unknown field type '{type_name}' for {role} '{name}'")]
    UnknownFieldType {
        role: Role,
        name: String,
        type_name: String,
    },

    #[error("No &column definitions in header")]
    NoColumnsDeclared,

    #[error("Invalid row count {count} (allowed 0..={max})")]
    InvalidRowCount { count: i32, max: usize },

    #[error("Invalid string length {length} at offset {offset}")]
    InvalidStringLength { length: i32, offset: usize },

    #[error("Invalid element count {count} for array '{name}' at offset {offset}")]
    InvalidArrayLength {
        name: String,
        count: i32,
        offset: usize,
    },

    #[error("Unexpected end of input: need {needed} bytes at offset {offset}, {available} available")]
    UnexpectedEndOfInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Missing expected columns: need '{key}' and '{value}'")]
    MissingExpectedColumns { key: String, value: String },

    #[error("Unsupported data mode '{0}'")]
    UnsupportedDataMode(String),
}

/// Error kind without context, for matching on the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedHeader,
    MissingFieldType,
    UnknownFieldType,
    NoColumnsDeclared,
    InvalidRowCount,
    InvalidStringLength,
    InvalidArrayLength,
    UnexpectedEndOfInput,
    MissingExpectedColumns,
    UnsupportedDataMode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedHeader(_) => ErrorKind::MalformedHeader,
            Self::MissingFieldType { .. } => ErrorKind::MissingFieldType,
            Self::UnknownFieldType { .. } => ErrorKind::UnknownFieldType,
            Self::NoColumnsDeclared => ErrorKind::NoColumnsDeclared,
            Self::InvalidRowCount { .. } => ErrorKind::InvalidRowCount,
            Self::InvalidStringLength { .. } => ErrorKind::InvalidStringLength,
            Self::InvalidArrayLength { .. } => ErrorKind::InvalidArrayLength,
            Self::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            Self::MissingExpectedColumns { .. } => ErrorKind::MissingExpectedColumns,
            Self::UnsupportedDataMode(_) => ErrorKind::UnsupportedDataMode,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check if data starts with an SDDS version line
pub fn is_sdds(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4].eq_ignore_ascii_case(b"SDDS")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sdds() {
        assert!(is_sdds(b"SDDS1\n"));
        assert!(is_sdds(b"sdds5\n"));
        assert!(!is_sdds(b"SDD"));
        assert!(!is_sdds(&[0x1f, 0x8b, 0x08, 0x00]));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::NoColumnsDeclared.kind(), ErrorKind::NoColumnsDeclared);

        let err = Error::UnexpectedEndOfInput {
            offset: 10,
            needed: 4,
            available: 1,
        };
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);

        let err = Error::MissingFieldType {
            role: Role::Column,
            name: "Foo".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MissingFieldType);
    }

    #[test]
    fn test_error_display() {
        let err = Error::MalformedHeader("no &data".to_string());
        assert!(err.to_string().contains("Malformed header"));

        let err = Error::MissingFieldType {
            role: Role::Parameter,
            name: "Time".to_string(),
        };
        assert_eq!(err.to_string(), "Missing type attribute for parameter 'Time'");

        let err = Error::UnknownFieldType {
            role: Role::Column,
            name: "X".to_string(),
            type_name: "quad".to_string(),
        };
        assert!(err.to_string().contains("'quad'"));

        let err = Error::InvalidRowCount {
            count: -1,
            max: MAX_ROWS,
        };
        assert!(err.to_string().contains("-1"));

        let err = Error::UnexpectedEndOfInput {
            offset: 12,
            needed: 8,
            available: 3,
        };
        assert!(err.to_string().contains("offset 12"));

        let err = Error::MissingExpectedColumns {
            key: DESCRIPTION_COLUMN.to_string(),
            value: VALUE_COLUMN.to_string(),
        };
        assert!(err.to_string().contains("ValueString"));
    }
}
