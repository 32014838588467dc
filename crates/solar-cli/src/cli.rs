//! CLI definition using clap

use clap::{Parser, Subcommand};
use solar_app::export::ExportFormat;
use solar_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solar-track")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fleet fuel (Solar) consumption tracking and efficiency analysis")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override (holds records.json)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a fill-up
    Add {
        /// Unit identifier (e.g., "DT-01")
        #[arg(long, short = 'u')]
        unit: String,

        /// Meter reading after the period (km or hours)
        #[arg(long = "final")]
        final_reading: String,

        /// Litres actually dispensed
        #[arg(long)]
        fuel: String,

        /// Meter reading before the period. Defaults to the unit's last final reading.
        #[arg(long)]
        initial: Option<String>,

        /// Date (YYYY-MM-DD). Defaults to today.
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Show the estimate without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete a record by id
    Delete {
        /// Record id
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List records, newest first
    List {
        /// Filter by unit (any case) or date fragment
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Maximum rows
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Fleet totals and average efficiency
    Stats {
        /// Restrict totals to the search view
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Per-record efficiency, oldest first
    Trend {
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// AI review of the most recent records
    Analyze,

    /// Export a report (CSV or Excel)
    Export {
        #[arg(long, short = 's')]
        search: Option<String>,

        /// File format
        #[arg(long = "type", short = 't', value_enum, default_value_t = ExportFormat::Csv)]
        export_format: ExportFormat,

        /// Output path. Defaults to Laporan_Solar_<date>.<ext> in the current directory.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Browse the unit catalog
    Units {
        /// Case-insensitive identifier search
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set unit catalog override file (.toml or .csv)
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set Gemini model
        #[arg(long)]
        set_model: Option<String>,

        /// Set the environment variable that holds the API key
        #[arg(long)]
        set_api_key_env: Option<String>,

        /// Set analysis window (records)
        #[arg(long)]
        set_window: Option<usize>,

        /// Set summary language
        #[arg(long)]
        set_language: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "solar-track", "add", "--unit", "DT-01", "--final", "250", "--fuel", "40",
        ])
        .unwrap();
        match cli.command {
            Commands::Add {
                unit,
                final_reading,
                fuel,
                initial,
                date,
                dry_run,
            } => {
                assert_eq!(unit, "DT-01");
                assert_eq!(final_reading, "250");
                assert_eq!(fuel, "40");
                assert!(initial.is_none());
                assert!(date.is_none());
                assert!(!dry_run);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_export_defaults_to_csv() {
        let cli = Cli::try_parse_from(["solar-track", "export", "-s", "dt"]).unwrap();
        match cli.command {
            Commands::Export {
                search,
                export_format,
                output,
            } => {
                assert_eq!(search.as_deref(), Some("dt"));
                assert_eq!(export_format, ExportFormat::Csv);
                assert!(output.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["solar-track", "stats", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_add_requires_fuel() {
        assert!(Cli::try_parse_from(["solar-track", "add", "--unit", "DT-01", "--final", "250"]).is_err());
    }
}
