//! Command-line ATM simulator.

use std::path::PathBuf;

use anyhow::Result;
use atm::config::AtmConfig;
use atm::teller::run_session;
use clap::Parser;
use console_io::config::load_config;
use console_io::{Console, exit_codes, logging};

#[derive(Parser)]
#[command(name = "atm", version, about = "PIN-gated ATM simulator")]
struct Cli {
    /// Optional TOML config overriding the PIN, opening balance or attempt limit.
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
    let config: AtmConfig = load_config(cli.config.as_deref())?;
    let mut console = Console::stdio();
    run_session(&mut console, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_flag() {
        let cli = Cli::parse_from(["atm", "--config", "bank.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("bank.toml")));
    }
}
