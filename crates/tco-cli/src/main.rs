//! Car Economics Calculator - running cost comparison for vehicles
//!
//! A CLI tool that projects daily, monthly and yearly ownership cost for a
//! set of vehicles and points out the cheapest one.

mod cli;
mod commands;
mod output;
mod telemetry;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
