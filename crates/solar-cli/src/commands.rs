//! Subcommand implementations

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use solar_app::app::{
    add_record, analyze_fleet, delete_record, fleet_stats, list_records, prefill_initial_reading,
    preview_for_unit, search_units, trend, DeleteOutcome, NewEntry,
};
use solar_app::config::Config;
use solar_app::export::{default_file_name, export_report, ExportFormat, ReportView};
use solar_app::repository::{load_catalog, open_log_store};
use solar_domain::model::FuelRecord;
use solar_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{
    output_analysis, output_record, output_records, output_stats, output_trend, output_units,
};

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Add {
            unit,
            final_reading,
            fuel,
            initial,
            date,
            dry_run,
        } => {
            let entry = NewEntry {
                date,
                unit_identifier: unit,
                initial_reading: initial,
                final_reading,
                actual_fuel: fuel,
            };
            if dry_run {
                cmd_preview(&config, &entry)
            } else {
                cmd_add(&config, entry, output_format)
            }
        }

        Commands::Delete { id, yes } => cmd_delete(&config, &id, yes),

        Commands::List { search, limit } => cmd_list(&config, search.as_deref(), limit, output_format),

        Commands::Stats { search } => {
            let store = open_log_store(&config)?;
            output_stats(output_format, &fleet_stats(&store, search.as_deref()))
        }

        Commands::Trend { search } => {
            let store = open_log_store(&config)?;
            output_trend(output_format, &trend(&store, search.as_deref()))
        }

        Commands::Analyze => cmd_analyze(&config, output_format),

        Commands::Export {
            search,
            export_format,
            output,
        } => cmd_export(&config, search.as_deref(), export_format, output),

        Commands::Units { search } => {
            let catalog = load_catalog(&config)?;
            output_units(output_format, &search_units(&catalog, search.as_deref()))
        }

        Commands::Config {
            show,
            set_data_dir,
            set_catalog,
            set_model,
            set_api_key_env,
            set_window,
            set_language,
            set_output,
            set_timeout,
            reset,
        } => cmd_config(ConfigUpdate {
            show,
            set_data_dir,
            set_catalog,
            set_model,
            set_api_key_env,
            set_window,
            set_language,
            set_output,
            set_timeout,
            reset,
        }),
    }
}

fn cmd_add(config: &Config, entry: NewEntry, output_format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(config)?;
    let mut store = open_log_store(config)?;

    if entry.initial_reading.is_none() {
        if let Some(prefill) = prefill_initial_reading(&store, &catalog, &entry.unit_identifier) {
            eprintln!("Initial reading from last fill-up: {}", prefill);
        }
    }

    let record = add_record(&mut store, &catalog, entry, Local::now().date_naive())?;
    output_record(output_format, &record)
}

fn cmd_preview(config: &Config, entry: &NewEntry) -> Result<()> {
    let catalog = load_catalog(config)?;
    let store = open_log_store(config)?;

    let initial = match entry.initial_reading {
        Some(ref raw) => parse_reading(raw),
        None => prefill_initial_reading(&store, &catalog, &entry.unit_identifier),
    };
    let final_reading = parse_reading(&entry.final_reading);

    let (meter_kind, ratio) = catalog.resolve(entry.unit_identifier.trim());
    println!("Unit:            {} ({})", entry.unit_identifier.trim(), meter_kind);
    match initial {
        Some(v) => println!("Initial reading: {}", v),
        None => println!("Initial reading: (none)"),
    }

    match preview_for_unit(&catalog, &entry.unit_identifier, initial, final_reading) {
        Some(estimate) => println!(
            "Fuel A (Est):    {:.2} L  (ratio {}, {})",
            estimate,
            ratio,
            meter_kind.formula()
        ),
        None => println!("Fuel A (Est):    -"),
    }
    println!("\n[Dry run - nothing saved]");

    Ok(())
}

fn parse_reading(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn cmd_delete(config: &Config, id: &str, yes: bool) -> Result<()> {
    let mut store = open_log_store(config)?;

    let outcome = delete_record(&mut store, id, |record| yes || confirm_delete(record))?;
    match outcome {
        DeleteOutcome::Deleted => println!("Deleted {}", id),
        DeleteOutcome::Cancelled => println!("Cancelled."),
        DeleteOutcome::NotFound => println!("No record with id {}", id),
    }

    Ok(())
}

fn confirm_delete(record: &FuelRecord) -> bool {
    print!(
        "Delete {} {} ({} L)? [y/N] ",
        record.date_string(),
        record.unit_identifier(),
        record.actual_fuel()
    );
    std::io::stdout().flush().ok();

    let mut input = String::new();
    std::io::stdin().read_line(&mut input).ok();
    input.trim().eq_ignore_ascii_case("y")
}

fn cmd_list(
    config: &Config,
    search: Option<&str>,
    limit: Option<usize>,
    output_format: OutputFormat,
) -> Result<()> {
    let store = open_log_store(config)?;
    let records = list_records(&store, search, limit);
    output_records(output_format, &records)
}

fn cmd_analyze(config: &Config, output_format: OutputFormat) -> Result<()> {
    let store = open_log_store(config)?;

    if store.is_empty() {
        println!("No records yet. Add fill-ups before running an analysis.");
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing fuel efficiency...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = analyze_fleet(&store, config);
    spinner.finish_and_clear();

    output_analysis(output_format, &result)
}

fn cmd_export(
    config: &Config,
    search: Option<&str>,
    export_format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let store = open_log_store(config)?;
    let records = list_records(&store, search, None);

    if records.is_empty() {
        println!("No records to export.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let output_path = output.unwrap_or_else(|| PathBuf::from(default_file_name(export_format, today)));

    let view = ReportView {
        records,
        totals: fleet_stats(&store, None),
        generated_on: today,
    };
    export_report(&view, export_format, &output_path)?;

    println!("Exported {} record(s) to: {}", view.records.len(), output_path.display());
    Ok(())
}

struct ConfigUpdate {
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_catalog: Option<PathBuf>,
    set_model: Option<String>,
    set_api_key_env: Option<String>,
    set_window: Option<usize>,
    set_language: Option<String>,
    set_output: Option<OutputFormat>,
    set_timeout: Option<u64>,
    reset: bool,
}

fn cmd_config(update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = update.set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(path) = update.set_catalog {
        // Fail early on a catalog that would not load
        check_catalog_file(&path)?;
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(model) = update.set_model {
        config.gemini_model = model;
        modified = true;
    }

    if let Some(env) = update.set_api_key_env {
        config.api_key_env = env;
        modified = true;
    }

    if let Some(window) = update.set_window {
        config.analysis_window = window.max(1);
        modified = true;
    }

    if let Some(language) = update.set_language {
        config.analysis_language = language;
        modified = true;
    }

    if let Some(output_format) = update.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(secs) = update.set_timeout {
        config.request_timeout_secs = secs;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn check_catalog_file(path: &std::path::Path) -> Result<()> {
    let candidate = Config {
        catalog_path: Some(path.to_path_buf()),
        ..Config::default()
    };
    load_catalog(&candidate).map(|_| ())
}
