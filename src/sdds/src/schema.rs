//! Schema building from header lines

use serde::Serialize;

use crate::field::{Definition, Role};
use crate::{Error, Result};

/// Header definitions partitioned by role, each in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub parameters: Vec<Definition>,
    pub arrays: Vec<Definition>,
    pub columns: Vec<Definition>,
}

impl Schema {
    /// Collect a definition from every field directive among `lines`
    ///
    /// Roles may interleave in the header; the body always stores parameters,
    /// then arrays, then rows, so only the order within a role matters.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut schema = Self::default();

        for line in lines {
            let Some(def) = Definition::parse(line.as_ref())? else {
                continue;
            };
            match def.role {
                Role::Parameter => schema.parameters.push(def),
                Role::Array => schema.arrays.push(def),
                Role::Column => schema.columns.push(def),
            }
        }

        tracing::debug!(
            parameters = schema.parameters.len(),
            arrays = schema.arrays.len(),
            columns = schema.columns.len(),
            "built schema"
        );

        Ok(schema)
    }

    /// Fail with `NoColumnsDeclared` when there is no table to decode
    pub fn require_columns(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::NoColumnsDeclared);
        }
        Ok(())
    }

    /// All definitions in body order: parameters, arrays, columns
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.parameters
            .iter()
            .chain(&self.arrays)
            .chain(&self.columns)
    }

    pub fn len(&self) -> usize {
        self.parameters.len() + self.arrays.len() + self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a column definition by name
    pub fn column(&self, name: &str) -> Option<&Definition> {
        self.columns.iter().find(|def| def.name == name)
    }
}
