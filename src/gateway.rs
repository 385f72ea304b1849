use std::sync::Arc;

use crate::engine::{EngineApi, ExecuteRequest};
use crate::model::{ExecutionResult, Session};

pub const BACKEND_ERROR_MESSAGE: &str = "Error al comunicarse con el backend.";

/// Sends scripts to the engine and turns whatever comes back into display text.
#[derive(Clone)]
pub struct ExecutionGateway {
    engine: Arc<dyn EngineApi>,
}

impl ExecutionGateway {
    pub fn new(engine: Arc<dyn EngineApi>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<dyn EngineApi> {
        &self.engine
    }

    pub fn execute(&self, script: &str, session: Option<&Session>) -> ExecutionResult {
        let req = build_request(script, session);
        match self.engine.execute(&req) {
            Ok(resp) => ExecutionResult::new(resp.output),
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "execute failed");
                ExecutionResult::failure(BACKEND_ERROR_MESSAGE)
            }
        }
    }
}

pub(crate) fn build_request(script: &str, session: Option<&Session>) -> ExecuteRequest {
    ExecuteRequest {
        command: script.to_string(),
        user: session.map(|s| s.username.clone()),
        partition_id: session.and_then(|s| s.bound_partition_id.clone()),
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
