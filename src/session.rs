//! Session lifecycle: Anonymous until a login succeeds, back to Anonymous on logout.
//!
//! Credential checking is delegated to an [`Authenticator`]. The engine-backed
//! one calls `POST /login`; [`AcceptAnyAuthenticator`] accepts every non-empty
//! pair and is what the client uses unless remote checking is requested.

use crate::engine::{EngineClient, LoginReply, LoginRequest};
use crate::model::Session;

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("invalid credentials: {0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("login rejected: {0}")]
    Rejected(String),

    #[error("login failed: {0}")]
    Transport(String),
}

#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub partition_id: Option<String>,
}

impl Credentials {
    /// Both fields must be non-blank; a blank partition id counts as absent.
    pub fn new(
        username: &str,
        password: &str,
        partition_id: Option<String>,
    ) -> Result<Self, LoginError> {
        if username.trim().is_empty() {
            return Err(LoginError::EmptyField("username"));
        }
        if password.trim().is_empty() {
            return Err(LoginError::EmptyField("password"));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            partition_id: partition_id
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        })
    }
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), LoginError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAnyAuthenticator;

impl Authenticator for AcceptAnyAuthenticator {
    fn authenticate(&self, _credentials: &Credentials) -> Result<(), LoginError> {
        Ok(())
    }
}

/// Replays a verdict reached elsewhere, such as a remote check run on a
/// worker thread.
#[derive(Clone, Debug)]
pub struct PrecheckedAuthenticator {
    verdict: Result<(), LoginError>,
}

impl PrecheckedAuthenticator {
    pub fn new(verdict: Result<(), LoginError>) -> Self {
        Self { verdict }
    }
}

impl Authenticator for PrecheckedAuthenticator {
    fn authenticate(&self, _credentials: &Credentials) -> Result<(), LoginError> {
        self.verdict.clone()
    }
}

pub struct RemoteAuthenticator<'a> {
    engine: &'a EngineClient,
}

impl<'a> RemoteAuthenticator<'a> {
    pub fn new(engine: &'a EngineClient) -> Self {
        Self { engine }
    }
}

impl Authenticator for RemoteAuthenticator<'_> {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), LoginError> {
        let req = LoginRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            partition_id: credentials.partition_id.clone().unwrap_or_default(),
        };
        match self.engine.login(&req) {
            Ok(LoginReply::Accepted(_)) => Ok(()),
            Ok(LoginReply::Rejected(reason)) if reason.is_empty() => {
                Err(LoginError::InvalidCredentials)
            }
            Ok(LoginReply::Rejected(reason)) => Err(LoginError::Rejected(reason)),
            Err(err) => Err(LoginError::Transport(format!("{:#}", err))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        partition_id: Option<String>,
        auth: &dyn Authenticator,
    ) -> Result<&Session, LoginError> {
        let credentials = Credentials::new(username, password, partition_id)?;
        auth.authenticate(&credentials)?;

        tracing::info!(
            user = %credentials.username,
            partition = ?credentials.partition_id,
            "session started"
        );
        let session = Session {
            username: credentials.username,
            bound_partition_id: credentials.partition_id,
        };
        Ok(self.current.insert(session))
    }

    /// Drops the session. Callers own clearing the script and output.
    pub fn logout(&mut self) {
        if let Some(prev) = self.current.take() {
            tracing::info!(user = %prev.username, "session ended");
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
