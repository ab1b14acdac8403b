//! Binary body decoding
//!
//! Pipeline: header → schema → row count → parameters → arrays → rows →
//! `DecodedTable`. A single cursor advances through the body; any failed read
//! aborts the whole decode since everything after it would be misaligned.

use crate::field::Definition;
use crate::header::Header;
use crate::reader::ByteReader;
use crate::schema::Schema;
use crate::table::{Array, Column, DecodedTable, Parameter};
use crate::{Error, Result, MAX_ROWS};

/// Only binary bodies are supported
const BINARY_MODE: &str = "binary";

/// Decoder settings
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Largest accepted row count
    pub max_rows: usize,
    /// Keep parameter values in the result (skipped by width otherwise)
    pub retain_parameters: bool,
    /// Keep array elements in the result (skipped by width otherwise)
    pub retain_arrays: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_ROWS,
            retain_parameters: true,
            retain_arrays: true,
        }
    }
}

/// Decode a complete, decompressed SDDS buffer with default settings
pub fn decode(data: &[u8]) -> Result<DecodedTable> {
    decode_with(data, &DecodeConfig::default())
}

/// Decode a complete, decompressed SDDS buffer
pub fn decode_with(data: &[u8], config: &DecodeConfig) -> Result<DecodedTable> {
    let header = Header::parse(data)?;
    let schema = Schema::from_lines(&header.lines)?;
    decode_body(data, &header, &schema, config)
}

/// Decode the body of `data` given an already parsed header and schema
pub fn decode_body(
    data: &[u8],
    header: &Header,
    schema: &Schema,
    config: &DecodeConfig,
) -> Result<DecodedTable> {
    schema.require_columns()?;

    if let Some(mode) = header.data_mode() {
        if mode != BINARY_MODE {
            return Err(Error::UnsupportedDataMode(mode));
        }
    }

    let mut reader = ByteReader::new(data, header.body_offset, header.endian);
    reader.skip_padding();

    let row_count = read_row_count(&mut reader, config.max_rows)?;
    tracing::debug!(row_count, offset = reader.position(), "reading body");

    let parameters = read_parameters(&mut reader, &schema.parameters, config.retain_parameters)?;
    let arrays = read_arrays(&mut reader, &schema.arrays, config.retain_arrays)?;
    tracing::trace!(offset = reader.position(), "row table starts");

    let columns = read_rows(&mut reader, &schema.columns, row_count)?;

    tracing::debug!(
        rows = row_count,
        columns = columns.len(),
        trailing = reader.remaining(),
        "decoded table"
    );

    Ok(DecodedTable::new(row_count, parameters, arrays, columns))
}

fn read_row_count(reader: &mut ByteReader, max_rows: usize) -> Result<usize> {
    let count = reader.read_i32()?;
    match usize::try_from(count) {
        Ok(rows) if rows <= max_rows => Ok(rows),
        _ => Err(Error::InvalidRowCount {
            count,
            max: max_rows,
        }),
    }
}

fn read_parameters(
    reader: &mut ByteReader,
    definitions: &[Definition],
    retain: bool,
) -> Result<Vec<Parameter>> {
    let mut parameters = Vec::with_capacity(if retain { definitions.len() } else { 0 });

    for def in definitions {
        if retain {
            parameters.push(Parameter {
                name: def.name.clone(),
                field_type: def.field_type,
                value: reader.read_value(def.field_type)?,
            });
        } else {
            reader.skip_values(def.field_type, 1)?;
        }
    }

    Ok(parameters)
}

fn read_arrays(reader: &mut ByteReader, definitions: &[Definition], retain: bool) -> Result<Vec<Array>> {
    let mut arrays = Vec::with_capacity(if retain { definitions.len() } else { 0 });

    for def in definitions {
        let count = read_element_count(reader, def)?;
        if retain {
            arrays.push(Array {
                name: def.name.clone(),
                field_type: def.field_type,
                values: reader.read_values(def.field_type, count)?,
            });
        } else {
            reader.skip_values(def.field_type, count)?;
        }
    }

    Ok(arrays)
}

fn read_element_count(reader: &mut ByteReader, def: &Definition) -> Result<usize> {
    let offset = reader.position();
    let count = reader.read_i32()?;
    usize::try_from(count).map_err(|_| Error::InvalidArrayLength {
        name: def.name.clone(),
        count,
        offset,
    })
}

/// Read the row-major table: each row visits every column in declared order
fn read_rows(reader: &mut ByteReader, definitions: &[Definition], row_count: usize) -> Result<Vec<Column>> {
    // Every row takes at least one byte per column
    let capacity = row_count.min(reader.remaining());
    let mut columns: Vec<Column> = definitions
        .iter()
        .map(|def| Column {
            name: def.name.clone(),
            field_type: def.field_type,
            values: Vec::with_capacity(capacity),
        })
        .collect();

    for _ in 0..row_count {
        for column in &mut columns {
            let value = reader.read_value(column.field_type)?;
            column.values.push(value);
        }
    }

    Ok(columns)
}
