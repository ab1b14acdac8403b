//! Schema command

use anyhow::{Context, Result};
use sdds::{Endian, Header, Schema};
use serde::Serialize;
use std::path::Path;

use crate::input::read_input;

#[derive(Serialize)]
struct SchemaReport<'a> {
    version: Option<u32>,
    endian: Endian,
    data_mode: Option<String>,
    #[serde(flatten)]
    schema: &'a Schema,
}

pub fn handle(path: &Path, json: bool) -> Result<()> {
    let data = read_input(path)?;
    let output = render(&data, json).with_context(|| format!("Failed to read header of {}", path.display()))?;
    print!("{}", output);
    Ok(())
}

/// Parse the header of `data` and describe it
pub fn render(data: &[u8], json: bool) -> Result<String> {
    let header = Header::parse(data)?;
    let schema = Schema::from_lines(&header.lines)?;

    if json {
        let report = SchemaReport {
            version: header.version,
            endian: header.endian,
            data_mode: header.data_mode(),
            schema: &schema,
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }

    Ok(format_schema(&header, &schema))
}

fn format_schema(header: &Header, schema: &Schema) -> String {
    let mut output = String::new();

    let version = header
        .version
        .map_or_else(|| "unknown".to_string(), |v| v.to_string());
    let endian = match header.endian {
        Endian::Little => "little-endian",
        Endian::Big => "big-endian",
    };
    let mode = header.data_mode().unwrap_or_else(|| "binary".to_string());

    output.push_str(&format!("Version:    {}\n", version));
    output.push_str(&format!("Byte order: {}\n", endian));
    output.push_str(&format!("Data mode:  {}\n", mode));
    output.push_str(&format!(
        "Fields:     {} parameters, {} arrays, {} columns\n",
        schema.parameters.len(),
        schema.arrays.len(),
        schema.columns.len()
    ));

    let width = schema.definitions().map(|d| d.name.len()).max().unwrap_or(0);
    for def in schema.definitions() {
        output.push_str(&format!(
            "  {:<9} {:<width$} {}\n",
            def.role.to_string(),
            def.name,
            def.field_type,
            width = width
        ));
    }

    output
}
