//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up sdds CLI defaults.

use crate::config::Config;
use crate::format::OutputFormat;
use anyhow::Result;

/// Settings given on the command line; `None` leaves a setting unchanged
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub key_column: Option<String>,
    pub value_column: Option<String>,
    pub max_rows: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.key_column.is_none()
            && self.value_column.is_none()
            && self.max_rows.is_none()
            && self.format.is_none()
    }
}

/// Handle the configure command
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, update);
    let path = config.save()?;

    print!("{}", format_config(&config));
    println!("Config saved to: {}", path.display());

    Ok(())
}

/// Copy every given setting into `config`
fn apply(config: &mut Config, update: ConfigUpdate) {
    if let Some(column) = update.key_column {
        config.key_column = Some(column);
    }
    if let Some(column) = update.value_column {
        config.value_column = Some(column);
    }
    if let Some(max) = update.max_rows {
        config.max_rows = Some(max);
    }
    if let Some(format) = update.format {
        config.format = Some(format);
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    if config.is_empty() {
        println!("No defaults configured");
    } else {
        print!("{}", format_config(config));
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn format_config(config: &Config) -> String {
    let mut output = String::new();
    if let Some(column) = &config.key_column {
        output.push_str(&format!("Key column: {}\n", column));
    }
    if let Some(column) = &config.value_column {
        output.push_str(&format!("Value column: {}\n", column));
    }
    if let Some(max) = config.max_rows {
        output.push_str(&format!("Max rows: {}\n", max));
    }
    if let Some(format) = config.format {
        output.push_str(&format!("Format: {}\n", format.name()));
    }
    output
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: sdds configure [--key-column NAME] [--value-column NAME]");
    println!("                      [--max-rows N] [--format pairs|tsv|json|table]");
    println!("   or: sdds configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_keeps_unset() {
        let mut config = Config {
            key_column: Some("Name".to_string()),
            max_rows: Some(10),
            ..Config::default()
        };
        apply(
            &mut config,
            ConfigUpdate {
                max_rows: Some(20),
                format: Some(OutputFormat::Tsv),
                ..ConfigUpdate::default()
            },
        );

        assert_eq!(config.key_column.as_deref(), Some("Name"));
        assert_eq!(config.max_rows, Some(20));
        assert_eq!(config.format, Some(OutputFormat::Tsv));
        assert!(config.value_column.is_none());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(ConfigUpdate::default().is_empty());
        let update = ConfigUpdate {
            value_column: Some("Reading".to_string()),
            ..ConfigUpdate::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_format_config() {
        let config = Config {
            value_column: Some("Reading".to_string()),
            format: Some(OutputFormat::Json),
            ..Config::default()
        };
        assert_eq!(format_config(&config), "Value column: Reading\nFormat: json\n");
    }
}
