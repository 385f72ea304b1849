use anyhow::{Context, Result};

use crate::config::ClientConfig;
use crate::model::DiskDescriptor;

mod http_client;

mod types;
pub use self::types::*;

/// The two engine calls the console and the catalog depend on.
pub trait EngineApi: Send + Sync {
    fn execute(&self, req: &ExecuteRequest) -> Result<ExecuteResponse>;
    fn list_disks(&self) -> Result<Vec<DiskDescriptor>>;
}

pub struct EngineClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl EngineClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent("smia");
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build reqwest client")?;
        Ok(Self {
            base_url: config.engine_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check credentials against the engine's `POST /login`.
    pub fn login(&self, req: &LoginRequest) -> Result<LoginReply> {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(req)
            .send()
            .context("login")?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            let reason = resp.text().context("read login rejection")?;
            return Ok(LoginReply::Rejected(reason.trim().to_string()));
        }

        let message = self
            .ensure_ok(resp, "login")?
            .text()
            .context("read login reply")?;
        Ok(LoginReply::Accepted(message.trim().to_string()))
    }
}

impl EngineApi for EngineClient {
    fn execute(&self, req: &ExecuteRequest) -> Result<ExecuteResponse> {
        let resp = self
            .client
            .post(self.url("/execute"))
            .json(req)
            .send()
            .context("execute")?;
        let out: ExecuteResponse = self
            .ensure_ok(resp, "execute")?
            .json()
            .context("parse execute response")?;
        Ok(out)
    }

    fn list_disks(&self) -> Result<Vec<DiskDescriptor>> {
        let resp = self
            .client
            .get(self.url("/disks"))
            .send()
            .context("list disks")?;
        let body: serde_json::Value = self
            .ensure_ok(resp, "list disks")?
            .json()
            .context("parse disks")?;
        crate::model::decode_disks(body)
    }
}
