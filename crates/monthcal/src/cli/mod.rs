//! CLI command definitions.

pub mod events;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Month calendar with local event storage.
#[derive(Debug, Parser)]
#[command(name = "monthcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the event storage.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage key the events are saved under.
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a month grid.
    Month {
        /// Month to show (YYYY-MM). Defaults to the current month.
        #[arg(long, value_parser = parse_month)]
        month: Option<NaiveDate>,
        /// Months to move forward (positive) or back (negative).
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        offset: i32,
        /// Rows per day cell, header included.
        #[arg(long)]
        cell_height: Option<u16>,
        /// Columns per day cell.
        #[arg(long)]
        cell_width: Option<u16>,
    },
    /// Show the events of one day in display order.
    Day {
        /// Day (YYYY-MM-DD).
        date: NaiveDate,
    },
    /// List every stored event in storage order.
    List,
    /// Add an event.
    Add(events::AddArgs),
    /// Replace an existing event.
    Edit(events::EditArgs),
    /// Delete an event.
    Delete {
        /// Event ID.
        id: String,
    },
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{value}', expected YYYY-MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-06"),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("June").is_err());
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::try_parse_from([
            "monthcal", "add", "--date", "2024-06-01", "--name", "Standup", "--start", "09:00",
            "--end", "09:15",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
                assert_eq!(args.fields.name.as_deref(), Some("Standup"));
                assert!(!args.fields.all_day);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_month_with_negative_offset() {
        let cli = Cli::try_parse_from(["monthcal", "month", "--month", "2024-06", "--offset", "-2"])
            .unwrap();

        match cli.command {
            Commands::Month { month, offset, .. } => {
                assert_eq!(month, NaiveDate::from_ymd_opt(2024, 6, 1));
                assert_eq!(offset, -2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["monthcal", "list", "--format", "json", "--quiet"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }
}
