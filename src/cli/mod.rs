pub mod monthly;
pub mod weekly;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::types::{CostrepError, ReportConfig, Result, SortKey, DATE_LAYOUT};

/// Cost analytics reports from Cost Explorer data
#[derive(Parser)]
#[command(name = "costrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Month-over-month report from a CSV exported from the Cost
    /// Explorer console
    #[command(alias = "m")]
    Monthly {
        /// Local path of the exported CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Column used to sort the body in descending order
        #[arg(short, long, value_enum, default_value = "amount")]
        order: SortKey,

        /// Digits behind the decimal point for amount fields
        #[arg(short, long, default_value_t = 4)]
        decimal: usize,

        /// Fail on malformed numeric cells instead of reading them as 0
        #[arg(long)]
        strict: bool,
    },

    /// Week-by-week report from the periodically-synced cost database
    #[command(alias = "w")]
    Weekly {
        /// Path of the synced SQLite cost database
        #[arg(short, long)]
        db: PathBuf,

        /// Start date, YYYY-MM-DD
        #[arg(short, long)]
        start_date: String,

        /// End date, YYYY-MM-DD
        #[arg(short, long)]
        end_date: String,

        /// Filter out services with zero cost across the whole range
        #[arg(short, long)]
        abridge: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Monthly {
                file,
                order,
                decimal,
                strict,
            } => {
                let config = ReportConfig {
                    decimal_precision: decimal,
                    sort_key: order,
                    strict_numeric: strict,
                    ..ReportConfig::default()
                };
                monthly::run(&file, &config)?;
            }
            Commands::Weekly {
                db,
                start_date,
                end_date,
                abridge,
            } => {
                let config = ReportConfig {
                    abridge_empty_rows: abridge,
                    ..ReportConfig::default()
                };
                weekly::run(&db, &start_date, &end_date, &config)?;
            }
        }
        Ok(())
    }
}

/// Parse a YYYY-MM-DD flag or cell value
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_LAYOUT)
        .map_err(|_| CostrepError::InvalidDate(value.to_string()))
}
