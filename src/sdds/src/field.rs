//! SDDS field definitions parsed from header directives

use std::fmt;

use serde::Serialize;

use crate::attr::attribute;
use crate::header::is_directive;
use crate::{Error, Result};

/// SDDS field type
///
/// Serialized with the SDDS spelling (`double`, `long`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    #[serde(rename = "double")]
    Float64,
    #[serde(rename = "float")]
    Float32,
    #[serde(rename = "long")]
    Int32,
    #[serde(rename = "short")]
    Int16,
    #[serde(rename = "char")]
    Int8,
    #[serde(rename = "uchar")]
    UInt8,
    #[serde(rename = "ulong")]
    UInt32,
    #[serde(rename = "ushort")]
    UInt16,
    #[serde(rename = "longlong")]
    Int64,
    #[serde(rename = "ulonglong")]
    UInt64,
    #[serde(rename = "string")]
    String,
}

impl Type {
    /// Parse a `type=` attribute value (case-insensitive)
    ///
    /// Accepts the SDDS names and the width-explicit aliases (`float64`, `int32`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" | "float64" => Some(Self::Float64),
            "float" | "float32" => Some(Self::Float32),
            "long" | "int32" => Some(Self::Int32),
            "short" | "int16" => Some(Self::Int16),
            "char" | "int8" => Some(Self::Int8),
            "uchar" | "uint8" => Some(Self::UInt8),
            "ulong" | "uint32" => Some(Self::UInt32),
            "ushort" | "uint16" => Some(Self::UInt16),
            "longlong" | "int64" => Some(Self::Int64),
            "ulonglong" | "uint64" => Some(Self::UInt64),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// SDDS name of the type
    pub fn name(self) -> &'static str {
        match self {
            Self::Float64 => "double",
            Self::Float32 => "float",
            Self::Int32 => "long",
            Self::Int16 => "short",
            Self::Int8 => "char",
            Self::UInt8 => "uchar",
            Self::UInt32 => "ulong",
            Self::UInt16 => "ushort",
            Self::Int64 => "longlong",
            Self::UInt64 => "ulonglong",
            Self::String => "string",
        }
    }

    /// Encoded width in bytes, `None` for length-prefixed strings
    pub fn width(self) -> Option<usize> {
        match self {
            Self::Float64 | Self::Int64 | Self::UInt64 => Some(8),
            Self::Float32 | Self::Int32 | Self::UInt32 => Some(4),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int8 | Self::UInt8 => Some(1),
            Self::String => None,
        }
    }

    #[inline]
    pub fn is_string(self) -> bool {
        self == Self::String
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which body section a field lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parameter,
    Array,
    Column,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Parameter, Role::Array, Role::Column];

    /// Header directive declaring a field of this role
    pub fn directive(self) -> &'static str {
        match self {
            Self::Parameter => "&parameter",
            Self::Array => "&array",
            Self::Column => "&column",
        }
    }

    /// Role declared by a header line, if it is a field directive
    pub fn of_line(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| is_directive(line, role.directive()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parameter => "parameter",
            Self::Array => "array",
            Self::Column => "column",
        })
    }
}

/// A header-declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
    pub role: Role,
}

impl Definition {
    /// Parse a field directive line
    ///
    /// Returns `Ok(None)` for lines that are not `&parameter`, `&array` or
    /// `&column` directives. A missing name becomes an empty name; a missing,
    /// empty or unrecognized type is an error since the field cannot be sized.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let Some(role) = Role::of_line(line) else {
            return Ok(None);
        };

        let name = attribute(line, "name").unwrap_or_default();

        let Some(type_name) = attribute(line, "type").filter(|t| !t.trim().is_empty()) else {
            return Err(Error::MissingFieldType { role, name });
        };

        let Some(field_type) = Type::parse(&type_name) else {
            return Err(Error::UnknownFieldType {
                role,
                name,
                type_name: type_name.to_ascii_lowercase(),
            });
        };

        Ok(Some(Self {
            name,
            field_type,
            role,
        }))
    }
}
