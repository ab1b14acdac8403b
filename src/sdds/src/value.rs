//! Decoded SDDS values

use std::fmt;

use serde::Serialize;

use crate::field::Type;

/// A single decoded value, typed by its declared field type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Float64(f64),
    Float32(f32),
    Int32(i32),
    Int16(i16),
    Int8(i8),
    UInt8(u8),
    UInt32(u32),
    UInt16(u16),
    Int64(i64),
    UInt64(u64),
    String(String),
}

impl Value {
    /// Declared type this value was decoded as
    pub fn field_type(&self) -> Type {
        match self {
            Self::Float64(_) => Type::Float64,
            Self::Float32(_) => Type::Float32,
            Self::Int32(_) => Type::Int32,
            Self::Int16(_) => Type::Int16,
            Self::Int8(_) => Type::Int8,
            Self::UInt8(_) => Type::UInt8,
            Self::UInt32(_) => Type::UInt32,
            Self::UInt16(_) => Type::UInt16,
            Self::Int64(_) => Type::Int64,
            Self::UInt64(_) => Type::UInt64,
            Self::String(_) => Type::String,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value widened to f64 (64-bit integers may lose precision)
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float64(v) => Some(v),
            Self::Float32(v) => Some(f64::from(v)),
            Self::Int32(v) => Some(f64::from(v)),
            Self::Int16(v) => Some(f64::from(v)),
            Self::Int8(v) => Some(f64::from(v)),
            Self::UInt8(v) => Some(f64::from(v)),
            Self::UInt32(v) => Some(f64::from(v)),
            Self::UInt16(v) => Some(f64::from(v)),
            Self::Int64(v) => Some(v as f64),
            Self::UInt64(v) => Some(v as f64),
            Self::String(_) => None,
        }
    }

    /// Integer value widened to i64 (`None` for floats, strings, and u64 out of range)
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int32(v) => Some(i64::from(v)),
            Self::Int16(v) => Some(i64::from(v)),
            Self::Int8(v) => Some(i64::from(v)),
            Self::UInt8(v) => Some(i64::from(v)),
            Self::UInt32(v) => Some(i64::from(v)),
            Self::UInt16(v) => Some(i64::from(v)),
            Self::Int64(v) => Some(v),
            Self::UInt64(v) => i64::try_from(v).ok(),
            Self::Float64(_) | Self::Float32(_) | Self::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float64(v) => write!(f, "{}", v),
            Self::Float32(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Int16(v) => write!(f, "{}", v),
            Self::Int8(v) => write!(f, "{}", v),
            Self::UInt8(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::UInt16(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::UInt64(v) => write!(f, "{}", v),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
