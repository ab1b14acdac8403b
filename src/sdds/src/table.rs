//! Decoded table and row assembly

use serde::Serialize;

use crate::field::Type;
use crate::value::Value;
use crate::{Error, Result};

/// Column holding the key of the key/value projection
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Column holding the value of the key/value projection
pub const VALUE_COLUMN: &str = "ValueString";

/// A parameter value from the body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
    pub value: Value,
}

/// An array and its elements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Array {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
    pub values: Vec<Value>,
}

/// One column of the row table, one value per row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
    pub values: Vec<Value>,
}

/// Result of decoding one buffer
///
/// Columns are index-aligned: every column holds exactly `row_count` values.
/// Parameters and arrays are empty when retention was turned off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedTable {
    row_count: usize,
    parameters: Vec<Parameter>,
    arrays: Vec<Array>,
    columns: Vec<Column>,
}

impl DecodedTable {
    pub(crate) fn new(
        row_count: usize,
        parameters: Vec<Parameter>,
        arrays: Vec<Array>,
        columns: Vec<Column>,
    ) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == row_count));
        Self {
            row_count,
            parameters,
            arrays,
            columns,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn arrays(&self) -> &[Array] {
        &self.arrays
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// First column with this name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// First parameter with this name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// First array with this name
    pub fn array(&self, name: &str) -> Option<&Array> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Rows in file order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.row_count).map(move |index| Row { table: self, index })
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.row_count).then_some(Row { table: self, index })
    }

    /// Project the `Description`/`ValueString` columns into key/value pairs
    pub fn pairs(&self) -> Result<Vec<(String, String)>> {
        self.pairs_by(DESCRIPTION_COLUMN, VALUE_COLUMN)
    }

    /// Project two named columns into key/value pairs
    ///
    /// Every row is kept, duplicate keys included, in file order. Keys are
    /// trimmed; values are rendered as-is.
    pub fn pairs_by(&self, key_column: &str, value_column: &str) -> Result<Vec<(String, String)>> {
        let (Some(keys), Some(values)) = (self.column(key_column), self.column(value_column)) else {
            return Err(Error::MissingExpectedColumns {
                key: key_column.to_string(),
                value: value_column.to_string(),
            });
        };

        Ok(keys
            .values
            .iter()
            .zip(&values.values)
            .map(|(key, value)| (key.to_string().trim().to_string(), value.to_string()))
            .collect())
    }
}

/// Borrowed view of one row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a DecodedTable,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the named column in this row
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.table.column(column)?.values.get(self.index)
    }

    /// (column name, value) for every column, in declaration order
    pub fn cells(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        let index = self.index;
        self.table
            .columns
            .iter()
            .filter_map(move |c| c.values.get(index).map(|v| (c.name.as_str(), v)))
    }

    pub fn values(&self) -> Vec<&'a Value> {
        self.cells().map(|(_, v)| v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_column(name: &str, values: &[&str]) -> Column {
        Column {
            name: name.to_string(),
            field_type: Type::String,
            values: values.iter().map(|&v| Value::from(v)).collect(),
        }
    }

    fn status_table() -> DecodedTable {
        DecodedTable::new(
            3,
            Vec::new(),
            Vec::new(),
            vec![
                string_column(DESCRIPTION_COLUMN, &["Current ", " ShutterStatus", "Current"]),
                string_column(VALUE_COLUMN, &["103.5", "ON", "102.9"]),
                Column {
                    name: "Severity".to_string(),
                    field_type: Type::Int16,
                    values: vec![Value::Int16(0), Value::Int16(2), Value::Int16(0)],
                },
            ],
        )
    }

    #[test]
    fn test_pairs_keep_duplicates_in_order() {
        let pairs = status_table().pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("Current".to_string(), "103.5".to_string()),
                ("ShutterStatus".to_string(), "ON".to_string()),
                ("Current".to_string(), "102.9".to_string()),
            ]
        );
    }

    #[test]
    fn test_pairs_by_numeric_value() {
        let pairs = status_table().pairs_by(DESCRIPTION_COLUMN, "Severity").unwrap();
        assert_eq!(pairs[1], ("ShutterStatus".to_string(), "2".to_string()));
    }

    #[test]
    fn test_pairs_missing_column() {
        let table = DecodedTable::new(0, Vec::new(), Vec::new(), vec![string_column("Other", &[])]);
        let err = table.pairs().unwrap_err();
        assert_eq!(
            err,
            Error::MissingExpectedColumns {
                key: DESCRIPTION_COLUMN.to_string(),
                value: VALUE_COLUMN.to_string(),
            }
        );
    }

    #[test]
    fn test_rows() {
        let table = status_table();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 3);

        let row = rows[1];
        assert_eq!(row.index(), 1);
        assert_eq!(row.get(VALUE_COLUMN), Some(&Value::from("ON")));
        assert_eq!(row.get("Missing"), None);

        let cells: Vec<_> = row.cells().map(|(name, _)| name).collect();
        assert_eq!(cells, vec![DESCRIPTION_COLUMN, VALUE_COLUMN, "Severity"]);
        assert_eq!(row.values()[2], &Value::Int16(2));

        assert!(table.row(2).is_some());
        assert!(table.row(3).is_none());
    }

    #[test]
    fn test_lookups() {
        let table = status_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec![DESCRIPTION_COLUMN, VALUE_COLUMN, "Severity"]
        );
        assert!(table.column("Severity").is_some());
        assert!(table.parameter("Severity").is_none());
        assert!(table.array("Severity").is_none());
    }

    #[test]
    fn test_serialize() {
        let table = DecodedTable::new(
            1,
            vec![Parameter {
                name: "Time".to_string(),
                field_type: Type::Float64,
                value: Value::Float64(1.5),
            }],
            Vec::new(),
            vec![string_column("Name", &["x"])],
        );
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["row_count"], 1);
        assert_eq!(json["parameters"][0]["type"], "double");
        assert_eq!(json["parameters"][0]["value"], 1.5);
        assert_eq!(json["columns"][0]["values"][0], "x");
    }
}
