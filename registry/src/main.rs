//! Command-line student grade registry.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console_io::config::load_config;
use console_io::{Console, exit_codes, logging};
use registry::app::run_registry;
use registry::config::RegistryConfig;

#[derive(Parser)]
#[command(name = "registry", version, about = "Student grade registry")]
struct Cli {
    /// Optional TOML config overriding capacity, name length or screen clearing.
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
    let mut config: RegistryConfig = load_config(cli.config.as_deref())?;
    config.clear_screen &= io::stdout().is_terminal();
    let mut console = Console::stdio();
    run_registry(&mut console, &config)?;
    Ok(())
}
