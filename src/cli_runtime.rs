use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use smia::config::ClientConfig;
use smia::logging::{LogTarget, init_logging};

use crate::Commands;

#[derive(Parser)]
#[command(name = "smia")]
#[command(about = "Client for the smia EXT2/EXT3 filesystem engine", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to ./smia.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Engine base URL (overrides config and SMIA_ENGINE_URL)
    #[arg(long, global = true, value_name = "URL")]
    engine_url: Option<String>,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Check TUI logins with the engine's /login
    #[arg(long)]
    remote_auth: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path),
        (None, None) => LogTarget::Sink,
        (None, Some(_)) => LogTarget::Stderr,
    };
    init_logging(target)?;

    let config = ClientConfig::load(cli.config.as_deref())?.with_engine_url(cli.engine_url);
    tracing::debug!(engine = %config.engine_url, "config loaded");

    match cli.command {
        None => {
            smia::tui::run_with_options(smia::tui::TuiRunOptions {
                config,
                remote_auth: cli.remote_auth,
            })?;
        }
        Some(command) => crate::cli_exec::handle_command(command, &config)?,
    }

    Ok(())
}
