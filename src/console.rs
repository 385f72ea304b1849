//! Script + output pairing and the submit/clear workflow.
//!
//! Every submit gets a generation number. Only the completion carrying the
//! newest generation is shown; older responses that arrive late are dropped.

use time::OffsetDateTime;

use crate::gateway::ExecutionGateway;
use crate::model::{ExecutionResult, Session};
use crate::script::ScriptBuffer;

pub const NOT_AUTHENTICATED_MESSAGE: &str =
    "Error: no hay una sesión activa. Inicie sesión para ejecutar comandos.";

#[derive(Clone, Debug)]
pub struct ExecutionTicket {
    pub generation: u64,
    pub script: String,
    pub session: Session,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionCompleted {
    pub generation: u64,
    pub result: ExecutionResult,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Rejected,
    Dispatched(ExecutionTicket),
}

pub fn run_ticket(gateway: &ExecutionGateway, ticket: ExecutionTicket) -> ExecutionCompleted {
    let result = gateway.execute(&ticket.script, Some(&ticket.session));
    ExecutionCompleted {
        generation: ticket.generation,
        result,
    }
}

#[derive(Debug, Default)]
pub struct CommandConsole {
    script: ScriptBuffer,
    output: ExecutionResult,
    generation: u64,
    pending: Option<u64>,
    completed_at: Option<OffsetDateTime>,
}

impl CommandConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self) -> &ScriptBuffer {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut ScriptBuffer {
        &mut self.script
    }

    pub fn output(&self) -> &ExecutionResult {
        &self.output
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn completed_at(&self) -> Option<OffsetDateTime> {
        self.completed_at
    }

    pub fn submit(&mut self, session: Option<&Session>) -> SubmitOutcome {
        let Some(session) = session else {
            tracing::info!("submit rejected: no session");
            self.output = ExecutionResult::new(NOT_AUTHENTICATED_MESSAGE);
            return SubmitOutcome::Rejected;
        };

        self.generation += 1;
        self.pending = Some(self.generation);
        tracing::debug!(generation = self.generation, "submit dispatched");
        SubmitOutcome::Dispatched(ExecutionTicket {
            generation: self.generation,
            script: self.script.as_str().to_string(),
            session: session.clone(),
        })
    }

    /// Apply a finished execution. Returns false when a newer submit has
    /// superseded it (or the console was reset since).
    pub fn complete(&mut self, done: ExecutionCompleted) -> bool {
        if self.pending != Some(done.generation) {
            tracing::debug!(
                generation = done.generation,
                latest = self.generation,
                "stale execution result dropped"
            );
            return false;
        }
        self.pending = None;
        self.output = done.result;
        self.completed_at = Some(OffsetDateTime::now_utc());
        true
    }

    /// Submit and wait in place; used by the one-shot CLI.
    pub fn submit_blocking(&mut self, session: Option<&Session>, gateway: &ExecutionGateway) {
        if let SubmitOutcome::Dispatched(ticket) = self.submit(session) {
            let done = run_ticket(gateway, ticket);
            self.complete(done);
        }
    }

    pub fn clear(&mut self) {
        self.script.clear();
        self.output = ExecutionResult::default();
    }

    /// Logout side effect: empty buffers and forget any in-flight submit.
    pub fn reset(&mut self) {
        self.clear();
        self.pending = None;
        self.completed_at = None;
    }

    pub fn output_lines(&self) -> Vec<&str> {
        if self.output.is_empty() {
            return Vec::new();
        }
        self.output.output_text.trim_end_matches('\n').split('\n').collect()
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
