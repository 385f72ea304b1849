//! Development stand-in for the smia engine.
//!
//! Serves the same HTTP contract as the real engine with canned behavior so the
//! client can be exercised locally and from integration tests. It does not
//! simulate a filesystem.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;

use smia::model::DiskDescriptor;

#[path = "smia_engine_stub/types.rs"]
mod types;
use self::types::*;
#[path = "smia_engine_stub/handlers.rs"]
mod handlers;
use self::handlers::*;
#[path = "smia_engine_stub/runtime.rs"]
mod runtime;

#[derive(Parser)]
#[command(name = "smia-engine-stub")]
#[command(about = "Stand-in smia engine for development and tests", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3001")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// JSON file with the disk catalog served by `GET /disks`
    #[arg(long)]
    disks_file: Option<PathBuf>,

    /// Accepted login, as `name:password:partition` (repeatable)
    #[arg(long = "user", value_name = "NAME:PASS:PARTITION")]
    users: Vec<String>,

    /// Delay every `POST /execute` reply by this many milliseconds
    #[arg(long, default_value_t = 0)]
    execute_delay_ms: u64,

    /// Answer every `POST /execute` with 500
    #[arg(long)]
    fail_execute: bool,
}

#[tokio::main]
async fn main() {
    smia::logging::init_logging(smia::logging::LogTarget::Stderr).ok();
    if let Err(err) = runtime::run(Args::parse()).await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
