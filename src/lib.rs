pub mod app;
pub mod catalog;
pub mod config;
pub mod console;
pub mod engine;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod router;
pub mod script;
pub mod session;
pub mod tui;
pub mod viewer;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
