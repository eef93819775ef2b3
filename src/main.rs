//! sln2csproj CLI
//!
//! Usage: sln2csproj <SLN> [--pick N] [--out-dir DIR] [--mode copy|link] [--check]

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.check {
        commands::cmd_check(cli)
    } else {
        commands::cmd_convert(cli)
    }
}
