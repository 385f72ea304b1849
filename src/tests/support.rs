use std::sync::Mutex;

use anyhow::Result;

use crate::engine::{EngineApi, ExecuteRequest, ExecuteResponse};
use crate::model::{DiskDescriptor, Fit};

pub(crate) enum Reply {
    Output(String),
    Fail(&'static str),
}

/// In-memory engine that records every request it sees.
pub(crate) struct FakeEngine {
    pub(crate) reply: Reply,
    pub(crate) disks: Option<Vec<DiskDescriptor>>,
    pub(crate) seen: Mutex<Vec<ExecuteRequest>>,
    pub(crate) disk_calls: Mutex<usize>,
}

impl FakeEngine {
    pub(crate) fn replying(output: &str) -> Self {
        Self {
            reply: Reply::Output(output.to_string()),
            disks: Some(Vec::new()),
            seen: Mutex::new(Vec::new()),
            disk_calls: Mutex::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            reply: Reply::Fail("connection refused"),
            disks: None,
            seen: Mutex::new(Vec::new()),
            disk_calls: Mutex::new(0),
        }
    }

    pub(crate) fn with_disks(mut self, disks: Vec<DiskDescriptor>) -> Self {
        self.disks = Some(disks);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ExecuteRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl EngineApi for FakeEngine {
    fn execute(&self, req: &ExecuteRequest) -> Result<ExecuteResponse> {
        self.seen.lock().unwrap().push(req.clone());
        match &self.reply {
            Reply::Output(s) => Ok(ExecuteResponse { output: s.clone() }),
            Reply::Fail(msg) => Err(anyhow::anyhow!(*msg)),
        }
    }

    fn list_disks(&self) -> Result<Vec<DiskDescriptor>> {
        *self.disk_calls.lock().unwrap() += 1;
        match &self.disks {
            Some(d) => Ok(d.clone()),
            None => Err(anyhow::anyhow!("connection refused")),
        }
    }
}

pub(crate) fn disk1() -> DiskDescriptor {
    DiskDescriptor {
        name: "disk1".to_string(),
        path: None,
        size: 5_000_000,
        fit: Fit::parse("FF"),
        mounted_partitions: vec!["Part1".to_string()],
    }
}
