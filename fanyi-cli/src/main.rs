//! fanyi: classify translation inputs and parse model replies

use anyhow::Result;
use clap::{ArgAction, Parser};
use fanyi_cli::commands::Commands;
use fanyi_cli::config::CliConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fanyi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CLI configuration file
    #[arg(long, global = true, value_name = "FILE", env = "FANYI_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    cli.command.execute(&config)
}
