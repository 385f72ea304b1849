use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use crate::console::{ExecutionCompleted, ExecutionTicket, run_ticket};
use crate::engine::{EngineApi, EngineClient};
use crate::gateway::ExecutionGateway;
use crate::model::DiskDescriptor;
use crate::session::{Authenticator, Credentials, LoginError, RemoteAuthenticator};

pub(super) enum WorkerMsg {
    Executed(ExecutionCompleted),
    Catalog(anyhow::Result<Vec<DiskDescriptor>>),
    Login {
        credentials: Credentials,
        verdict: Result<(), LoginError>,
    },
}

pub(super) fn spawn_execution(
    gateway: ExecutionGateway,
    ticket: ExecutionTicket,
    tx: Sender<WorkerMsg>,
) {
    thread::spawn(move || {
        let done = run_ticket(&gateway, ticket);
        // The receiver is gone only when the TUI has exited.
        let _ = tx.send(WorkerMsg::Executed(done));
    });
}

pub(super) fn spawn_catalog_fetch(engine: Arc<dyn EngineApi>, tx: Sender<WorkerMsg>) {
    thread::spawn(move || {
        let res = engine.list_disks();
        let _ = tx.send(WorkerMsg::Catalog(res));
    });
}

pub(super) fn spawn_login(engine: Arc<EngineClient>, credentials: Credentials, tx: Sender<WorkerMsg>) {
    thread::spawn(move || {
        let verdict = RemoteAuthenticator::new(&engine).authenticate(&credentials);
        let _ = tx.send(WorkerMsg::Login {
            credentials,
            verdict,
        });
    });
}
