use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use time::OffsetDateTime;
use time::format_description::FormatItem;

use crate::app::AppState;
use crate::console::SubmitOutcome;
use crate::engine::{EngineApi, EngineClient};
use crate::gateway::ExecutionGateway;
use crate::router::Route;
use crate::session::{AcceptAnyAuthenticator, Credentials, LoginError, PrecheckedAuthenticator};
use crate::tui::TuiRunOptions;

mod input;
use input::Input;

mod keys;
mod modal;
mod view;
mod views;

mod worker;
use worker::WorkerMsg;

pub(crate) fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut app = App::new(opts)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoginField {
    Username,
    Password,
    Partition,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Partition,
            LoginField::Partition => LoginField::Username,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LoginField::Username => "Usuario",
            LoginField::Password => "Contraseña",
            LoginField::Partition => "Partición (opcional)",
        }
    }
}

#[derive(Debug)]
enum Modal {
    Alert {
        lines: Vec<String>,
    },
    Login {
        username: Input,
        password: Input,
        partition: Input,
        focus: LoginField,
    },
    LoadPath {
        input: Input,
    },
}

impl Modal {
    fn login() -> Self {
        Modal::Login {
            username: Input::default(),
            password: Input::default(),
            partition: Input::default(),
            focus: LoginField::Username,
        }
    }
}

struct App {
    state: AppState,
    engine: Arc<EngineClient>,
    gateway: ExecutionGateway,
    remote_auth: bool,

    modal: Option<Modal>,
    last_script_path: Option<String>,
    catalog_loading: bool,
    login_pending: bool,
    status: String,
    quit: bool,

    tx: Sender<WorkerMsg>,
    rx: Receiver<WorkerMsg>,
}

impl App {
    fn new(opts: TuiRunOptions) -> Result<Self> {
        let engine = Arc::new(EngineClient::new(&opts.config)?);
        let gateway = ExecutionGateway::new(engine.clone() as Arc<dyn EngineApi>);
        let state = AppState::new(&opts.config)?;
        let (tx, rx) = mpsc::channel();
        let status = format!("engine: {}", server_label(engine.base_url()));
        Ok(Self {
            state,
            engine,
            gateway,
            remote_auth: opts.remote_auth,
            modal: None,
            last_script_path: None,
            catalog_loading: false,
            login_pending: false,
            status,
            quit: false,
            tx,
            rx,
        })
    }

    fn submit(&mut self) {
        match self.state.submit() {
            SubmitOutcome::Rejected => {
                self.status = "ejecución rechazada: sin sesión".to_string();
            }
            SubmitOutcome::Dispatched(ticket) => {
                self.status = format!("ejecutando (#{})...", ticket.generation);
                worker::spawn_execution(self.gateway.clone(), ticket, self.tx.clone());
            }
        }
    }

    fn open_catalog(&mut self) {
        self.state.navigate(Route::Catalog);
        if !self.catalog_loading {
            self.catalog_loading = true;
            worker::spawn_catalog_fetch(self.gateway.engine().clone(), self.tx.clone());
        }
    }

    /// Returns true when the session is open. With remote checking the
    /// verdict arrives later through the worker channel.
    fn login(&mut self, username: &str, password: &str, partition: &str) -> bool {
        let partition = Some(partition.to_string());
        if !self.remote_auth {
            let ok = self
                .state
                .login(username, password, partition, &AcceptAnyAuthenticator)
                .is_ok();
            if ok {
                self.status = "sesión iniciada".to_string();
            }
            return ok;
        }

        if self.login_pending {
            return false;
        }
        match Credentials::new(username, password, partition) {
            Ok(credentials) => {
                self.login_pending = true;
                self.status = "verificando credenciales...".to_string();
                worker::spawn_login(self.engine.clone(), credentials, self.tx.clone());
            }
            Err(err) => self.state.reject_login(&err),
        }
        false
    }

    fn finish_login(&mut self, credentials: Credentials, verdict: Result<(), LoginError>) {
        self.login_pending = false;
        let auth = PrecheckedAuthenticator::new(verdict);
        let res = self.state.login(
            &credentials.username,
            &credentials.password,
            credentials.partition_id,
            &auth,
        );
        if res.is_ok() {
            self.status = "sesión iniciada".to_string();
            if matches!(self.modal, Some(Modal::Login { .. })) {
                self.modal = None;
            }
        } else {
            self.status = "inicio de sesión rechazado".to_string();
        }
    }

    fn logout(&mut self) {
        self.state.logout();
        self.status = "sesión cerrada".to_string();
    }

    fn load_script(&mut self, path: &str) {
        let path = PathBuf::from(path.trim());
        if self.state.load_script(&path).is_ok() {
            self.status = format!("cargado {}", path.display());
            self.last_script_path = Some(path.display().to_string());
        }
    }

    fn drain_worker(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                WorkerMsg::Executed(done) => {
                    let generation = done.generation;
                    if self.state.complete_execution(done) {
                        self.status = format!("ejecución #{} completada", generation);
                    }
                }
                WorkerMsg::Catalog(res) => {
                    self.catalog_loading = false;
                    self.state.catalog_mut().apply(res);
                }
                WorkerMsg::Login {
                    credentials,
                    verdict,
                } => self.finish_login(credentials, verdict),
            }
        }
    }

    fn sync_alert(&mut self) {
        if self.modal.is_some() && !matches!(self.modal, Some(Modal::Login { .. })) {
            return;
        }
        if let Some(msg) = self.state.alert() {
            let lines = msg.lines().map(str::to_string).collect();
            self.state.dismiss_alert();
            self.modal = Some(Modal::Alert { lines });
        }
    }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.drain_worker();
        app.sync_alert();

        terminal.draw(|f| views::draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => keys::handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn server_label(base_url: &str) -> String {
    let s = base_url.trim_end_matches('/');
    let s = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);
    s.to_string()
}

fn ts_ui_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour padding:zero]:[minute padding:zero]:[second padding:zero]Z")
            .unwrap_or_default()
    })
}

fn fmt_ts_ui(ts: OffsetDateTime) -> String {
    ts.format(ts_ui_format())
        .unwrap_or_else(|_| "<time>".to_string())
}

#[cfg(test)]
#[path = "tests/tui_shell_tests.rs"]
mod tests;
