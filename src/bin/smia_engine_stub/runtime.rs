use super::*;

fn load_disks(path: Option<&PathBuf>) -> Result<Vec<DiskDescriptor>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}

pub(super) fn build_state(args: &Args) -> Result<Arc<StubState>> {
    let users = args
        .users
        .iter()
        .map(|s| parse_user(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(Arc::new(StubState {
        disks: load_disks(args.disks_file.as_ref())?,
        users,
        execute_delay: Duration::from_millis(args.execute_delay_ms),
        fail_execute: args.fail_execute,
        stats: RwLock::new(Stats::default()),
    }))
}

pub(super) fn build_router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/execute", post(execute))
        .route("/disks", get(list_disks))
        .route("/login", post(login))
        .route("/stats", get(stats))
        .with_state(state)
}

fn maybe_write_addr_file(addr_file: Option<&PathBuf>, local_addr: SocketAddr) -> Result<()> {
    if let Some(addr_file) = addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

pub(super) async fn run(args: Args) -> Result<()> {
    let state = build_state(&args)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, "smia-engine-stub listening");
    maybe_write_addr_file(args.addr_file.as_ref(), local_addr)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
