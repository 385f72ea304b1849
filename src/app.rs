//! The client's whole mutable state, passed by reference into each surface.

use std::path::Path;

use anyhow::Result;

use crate::catalog::DiskCatalog;
use crate::config::ClientConfig;
use crate::console::{CommandConsole, ExecutionCompleted, SubmitOutcome};
use crate::model::{DiskDescriptor, Session};
use crate::router::{Route, Router};
use crate::script::{ScriptLoadError, ScriptLoader};
use crate::session::{Authenticator, LoginError, SessionStore};

pub struct AppState {
    session: SessionStore,
    console: CommandConsole,
    catalog: DiskCatalog,
    router: Router,
    loader: ScriptLoader,
    alert: Option<String>,
}

impl AppState {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            session: SessionStore::new(),
            console: CommandConsole::new(),
            catalog: DiskCatalog::new(),
            router: Router::new(),
            loader: ScriptLoader::new(&config.script_extension)?,
            alert: None,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.current()
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session
    }

    pub fn console(&self) -> &CommandConsole {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut CommandConsole {
        &mut self.console
    }

    pub fn catalog(&self) -> &DiskCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut DiskCatalog {
        &mut self.catalog
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Report a failed login through the alert slot.
    pub fn reject_login(&mut self, err: &LoginError) {
        tracing::info!(error = %err, "login failed");
        self.alert = Some(login_alert(err));
    }

    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        partition_id: Option<String>,
        auth: &dyn Authenticator,
    ) -> Result<(), LoginError> {
        let res = self
            .session
            .login(username, password, partition_id, auth)
            .map(|_| ());
        if let Err(err) = &res {
            self.reject_login(err);
        }
        res
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.console.reset();
        self.router.clear();
    }

    pub fn load_script(&mut self, path: &Path) -> Result<(), ScriptLoadError> {
        let res = self.loader.load_from_file(path, self.console.script_mut());
        if let Err(err) = &res {
            self.alert = Some(err.to_string());
        }
        res
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.console.submit(self.session.current())
    }

    pub fn complete_execution(&mut self, done: ExecutionCompleted) -> bool {
        self.console.complete(done)
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route, None);
    }

    pub fn open_selected_disk(&mut self) -> bool {
        match self.catalog.select_current() {
            Some(disk) => {
                self.open_disk(disk);
                true
            }
            None => false,
        }
    }

    pub fn open_disk(&mut self, disk: DiskDescriptor) {
        self.router.open_disk(disk);
    }
}

fn login_alert(err: &LoginError) -> String {
    match err {
        LoginError::EmptyField(_) => "Por favor, completa ambos campos.".to_string(),
        LoginError::InvalidCredentials => "Usuario o contraseña incorrectos".to_string(),
        LoginError::Rejected(reason) => reason.clone(),
        LoginError::Transport(_) => crate::gateway::BACKEND_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
