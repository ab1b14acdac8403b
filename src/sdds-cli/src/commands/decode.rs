//! Decode command
//!
//! Resolves settings (flags, then config file, then built-in defaults),
//! decodes the input and renders it in the requested format.

use anyhow::{Context, Result};
use sdds::{DecodeConfig, DESCRIPTION_COLUMN, VALUE_COLUMN};

use crate::cli::DecodeArgs;
use crate::config::Config;
use crate::format::{format_json, format_pairs, format_table, format_tsv, OutputFormat};
use crate::input::read_input;

/// Effective settings for one decode
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub format: OutputFormat,
    pub key_column: String,
    pub value_column: String,
    pub decode: DecodeConfig,
}

impl DecodeOptions {
    /// Merge command-line flags over the config file over defaults
    pub fn resolve(args: &DecodeArgs, config: &Config) -> Self {
        let defaults = DecodeConfig::default();

        Self {
            format: args.format.or(config.format).unwrap_or_default(),
            key_column: args
                .key_column
                .clone()
                .or_else(|| config.key_column.clone())
                .unwrap_or_else(|| DESCRIPTION_COLUMN.to_string()),
            value_column: args
                .value_column
                .clone()
                .or_else(|| config.value_column.clone())
                .unwrap_or_else(|| VALUE_COLUMN.to_string()),
            decode: DecodeConfig {
                max_rows: args.max_rows.or(config.max_rows).unwrap_or(defaults.max_rows),
                retain_parameters: !args.no_parameters,
                retain_arrays: !args.no_arrays,
            },
        }
    }
}

pub fn handle(args: &DecodeArgs) -> Result<()> {
    let config = Config::load()?;
    let options = DecodeOptions::resolve(args, &config);
    tracing::debug!(?options, "resolved decode options");

    let data = read_input(&args.path)?;
    let output = render(&data, &options)
        .with_context(|| format!("Failed to decode {}", args.path.display()))?;

    print!("{}", output);
    Ok(())
}

/// Decode `data` and format it
pub fn render(data: &[u8], options: &DecodeOptions) -> Result<String> {
    let table = sdds::decode_with(data, &options.decode)?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "decoded table"
    );

    Ok(match options.format {
        OutputFormat::Pairs => {
            let pairs = table.pairs_by(&options.key_column, &options.value_column)?;
            format_pairs(&pairs)
        }
        OutputFormat::Tsv => format_tsv(&table),
        OutputFormat::Json => format_json(&table)?,
        OutputFormat::Table => format_table(&table),
    })
}
