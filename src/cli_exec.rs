use std::sync::Arc;

use anyhow::{Context, Result};

use smia::app::AppState;
use smia::config::ClientConfig;
use smia::engine::{EngineApi, EngineClient};
use smia::gateway::ExecutionGateway;
use smia::router::{Route, Screen};
use smia::session::{AcceptAnyAuthenticator, Authenticator, RemoteAuthenticator};

use crate::Commands;

pub(crate) fn handle_command(command: Commands, config: &ClientConfig) -> Result<()> {
    let engine = Arc::new(EngineClient::new(config)?);
    let mut state = AppState::new(config)?;

    match command {
        Commands::Exec {
            file,
            user,
            password,
            partition,
            remote_auth,
        } => {
            state
                .load_script(&file)
                .with_context(|| format!("load {}", file.display()))?;

            let remote;
            let auth: &dyn Authenticator = if remote_auth {
                remote = RemoteAuthenticator::new(&engine);
                &remote
            } else {
                &AcceptAnyAuthenticator
            };
            state
                .login(&user, &password, partition, auth)
                .context("login")?;

            let gateway = ExecutionGateway::new(engine.clone() as Arc<dyn EngineApi>);
            let session = state.session().cloned();
            state
                .console_mut()
                .submit_blocking(session.as_ref(), &gateway);

            let result = state.console().output();
            let output = &result.output_text;
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            if result.is_failure() {
                anyhow::bail!("engine request failed ({})", engine.base_url());
            }
        }

        Commands::Disks { json } => {
            state.catalog_mut().fetch(engine.as_ref());
            if let Some(err) = state.catalog().last_error() {
                eprintln!("warning: {}", err);
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(state.catalog().disks())
                        .context("encode disks")?
                );
                return Ok(());
            }

            if state.catalog().is_empty() {
                println!("(no hay discos)");
                return Ok(());
            }
            for disk in state.catalog().disks() {
                let mut lines = smia::catalog::entry_lines(disk).into_iter();
                if let Some(name) = lines.next() {
                    println!("{}", name);
                }
                for l in lines {
                    println!("  {}", l);
                }
            }
        }

        Commands::Disk { name, json } => {
            state.catalog_mut().fetch(engine.as_ref());
            match state.catalog().find(&name) {
                Some(disk) => state.open_disk(disk),
                None => state.navigate(Route::Viewer { name: name.clone() }),
            }

            let Screen::Viewer(detail) = state.router().screen() else {
                anyhow::bail!("expected the detail screen for {}", name);
            };
            if json {
                let disk = state.router().navigation_store().get(&name);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&disk).context("encode disk")?
                );
                return Ok(());
            }

            println!("{}", detail.title());
            for l in detail.lines() {
                println!("{}", l);
            }
        }
    }

    Ok(())
}
