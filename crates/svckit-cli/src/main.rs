//! Reference data generation CLI - Entry Point
//!
//! `svckit country` and `svckit currency` fetch public reference data and
//! write flat files of SQL insert statements. Progress is reported through
//! the svckit JSON line logger on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use svckit_log::JsonLogger;
use svckit_refdata::{country, currency, write_statements, RefDataClient};

/// Reference data generation toolkit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate SQL inserts for the country table.
    Country {
        /// Source URL for the country JSON array.
        #[arg(long, default_value = country::COUNTRIES_URL)]
        url: String,
        /// Output file path.
        #[arg(short, long, default_value = "country_inserts.sql")]
        output: PathBuf,
    },
    /// Generate SQL inserts for the currency table.
    Currency {
        /// Source URL for the ISO 4217 code CSV.
        #[arg(long, default_value = currency::CODES_URL)]
        codes_url: String,
        /// Source URL for the currency symbol JSON.
        #[arg(long, default_value = currency::SYMBOLS_URL)]
        symbols_url: String,
        /// Output file path.
        #[arg(short, long, default_value = "currency_inserts.sql")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Subscriber for library diagnostics; the progress log below is the
    // crate's own JSON line logger.
    svckit_log::init_diagnostics()?;

    let log = JsonLogger::builder().service("svckit-cli").build();
    let client = RefDataClient::new()?;

    match args.command {
        Command::Country { url, output } => {
            let statements = country::generate(&client, &url).await?;
            write_statements(&output, &statements)?;
            log.info(&format!(
                "generated {} country inserts at {}",
                statements.len(),
                output.display()
            ))?;
        }
        Command::Currency {
            codes_url,
            symbols_url,
            output,
        } => {
            let statements = currency::generate(&client, &codes_url, &symbols_url).await?;
            write_statements(&output, &statements)?;
            log.info(&format!(
                "generated {} currency inserts at {}",
                statements.len(),
                output.display()
            ))?;
        }
    }

    Ok(())
}
