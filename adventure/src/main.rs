//! Five-room text adventure on the terminal.

use std::path::PathBuf;

use adventure::config::AdventureConfig;
use adventure::play::play;
use anyhow::Result;
use clap::Parser;
use console_io::config::load_config;
use console_io::{Console, exit_codes, logging};

#[derive(Parser)]
#[command(name = "adventure", version, about = "Find the treasure before your health runs out")]
struct Cli {
    /// Optional TOML config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config: AdventureConfig = load_config(cli.config.as_deref())?;
    let mut console = Console::stdio();
    play(&mut console, &config)?;
    Ok(())
}
