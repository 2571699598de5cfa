//! Loot Tally - Entry Point

use clap::Parser;
use loottally::config::{CliOverrides, DEFAULT_LOG_PATH};
use loottally::logging::TracingSink;
use loottally::model::AppError;
use loottally::view::OutputFormat;
use std::path::PathBuf;
use tracing::info;

/// Loot Tally - platinum, loot and waste report for a play session
#[derive(Parser, Debug)]
#[command(name = "loottally")]
#[command(version)]
#[command(about = "Session economics report from a game client text log")]
pub struct Args {
    /// Path to the session log
    #[arg(default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Path to the item value table (`<item name>, <value>` per line)
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Count silver drops as kept instead of destroyed
    #[arg(long)]
    pub keep_silver: bool,

    /// Count copper drops as kept instead of destroyed
    #[arg(long)]
    pub keep_copper: bool,

    /// Do not count Fine Steel items as destroyed
    #[arg(long)]
    pub keep_fine_steel: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = loottally::config::load_config_with_precedence(args.config.clone())?;
        let merged = loottally::config::merge_config(config_file);
        let with_env = loottally::config::apply_env_overrides(merged);

        loottally::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                values_path: args.values.clone(),
                format: args.format,
                keep_silver: args.keep_silver,
                keep_copper: args.keep_copper,
                keep_fine_steel: args.keep_fine_steel,
            },
        )
    };

    loottally::logging::init(&config.log_file_path)?;

    info!(config = ?config, log = %args.log.display(), "Configuration loaded and resolved");

    let report = loottally::source::analyze_files(
        &args.log,
        &config.values_path,
        config.policy,
        &TracingSink,
    )?;

    print!("{}", loottally::view::render(&report, config.format)?);

    Ok(())
}
