//! SolarTrack - fleet fuel (Solar) consumption tracking
//!
//! Records fill-ups per unit, estimates fuel from the unit's standard ratio,
//! and reports efficiency, trends and AI review.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    solar_app::logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
