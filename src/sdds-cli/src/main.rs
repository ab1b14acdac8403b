mod cli;
mod commands;
mod config;
mod format;
mod input;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;
use commands::configure::ConfigUpdate;

/// Default filter when `RUST_LOG` is unset
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "sdds=debug,sdds_cli=debug"
    } else {
        "sdds=info,sdds_cli=info"
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode(args) => {
            commands::decode::handle(&args)?;
        }

        Commands::Schema { path, json } => {
            commands::schema::handle(&path, json)?;
        }

        Commands::Configure {
            key_column,
            value_column,
            max_rows,
            format,
            show,
        } => {
            let update = ConfigUpdate {
                key_column,
                value_column,
                max_rows,
                format,
            };
            commands::configure::handle(update, show)?;
        }
    }

    Ok(())
}
