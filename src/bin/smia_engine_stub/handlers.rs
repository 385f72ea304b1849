use super::*;

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// One `"<command>: ok"` line per non-blank script line.
pub(super) fn run_script(script: &str) -> String {
    let mut out = String::new();
    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cmd = line.split_whitespace().next().unwrap_or(line);
        out.push_str(&format!("{}: ok\n", cmd.to_ascii_uppercase()));
    }
    if out.is_empty() {
        return NO_COMMANDS.to_string();
    }
    out
}

pub(super) async fn execute(
    State(state): State<Arc<StubState>>,
    body: axum::body::Bytes,
) -> Response {
    let Ok(req) = serde_json::from_slice::<ExecuteBody>(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"output": INVALID_REQUEST})),
        )
            .into_response();
    };

    {
        let mut stats = state.stats.write().await;
        stats.execute_requests += 1;
        stats.last_user = req.user.clone();
        stats.last_partition_id = req.partition_id.clone();
    }

    if !state.execute_delay.is_zero() {
        tokio::time::sleep(state.execute_delay).await;
    }

    if state.fail_execute {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "execute disabled"})),
        )
            .into_response();
    }

    Json(serde_json::json!({"output": run_script(&req.command)})).into_response()
}

pub(super) async fn list_disks(State(state): State<Arc<StubState>>) -> Json<Vec<DiskDescriptor>> {
    Json(state.disks.clone())
}

pub(super) async fn login(State(state): State<Arc<StubState>>, body: axum::body::Bytes) -> Response {
    let Ok(req) = serde_json::from_slice::<LoginBody>(&body) else {
        return (StatusCode::BAD_REQUEST, "Error al leer datos de login").into_response();
    };

    if !state.partition_mounted(&req.partition_id) {
        return (StatusCode::UNAUTHORIZED, LOGIN_NOT_MOUNTED).into_response();
    }

    let ok = state.users.iter().any(|u| {
        u.name == req.username && u.password == req.password && u.partition_id == req.partition_id
    });
    if ok {
        (StatusCode::OK, LOGIN_OK).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, LOGIN_BAD_CREDENTIALS).into_response()
    }
}

pub(super) async fn stats(State(state): State<Arc<StubState>>) -> Json<Stats> {
    Json(state.stats.read().await.clone())
}

#[cfg(test)]
#[path = "../../tests/bin/smia_engine_stub/handlers_tests.rs"]
mod tests;
