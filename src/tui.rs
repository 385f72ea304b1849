use anyhow::Result;

use crate::config::ClientConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: ClientConfig,
    /// Check logins against the engine instead of accepting any non-empty pair.
    pub remote_auth: bool,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
