use std::path::PathBuf;

use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Run a .smia script against the engine and print its output
    Exec {
        /// Script file (.smia)
        file: PathBuf,
        /// Session user
        #[arg(long)]
        user: String,
        /// Session password
        #[arg(long)]
        password: String,
        /// Partition id to bind the session to
        #[arg(long)]
        partition: Option<String>,
        /// Check the credentials with the engine's /login first
        #[arg(long)]
        remote_auth: bool,
    },

    /// List the engine's virtual disks
    Disks {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one disk from the catalog
    Disk {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
