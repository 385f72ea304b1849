use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::router::Screen;
use crate::session::SessionState;

use super::App;

mod console;
mod detail;
mod disks;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    match app.state.router().screen() {
        Screen::Console => console::render(frame, app, parts[0]),
        Screen::Catalog => disks::render(frame, app, parts[0]),
        Screen::Viewer(screen) => detail::render(frame, &screen, parts[0]),
    }

    render_status(frame, app, parts[1]);

    if let Some(modal) = &app.modal {
        super::modal::draw_modal(frame, modal);
    }
}

fn render_status(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let who = match app.state.session_store().state() {
        SessionState::Authenticated => {
            let s = app.state.session();
            let user = s.map(|s| s.username.as_str()).unwrap_or_default();
            match s.and_then(|s| s.bound_partition_id.as_deref()) {
                Some(p) => format!("{}@{}", user, p),
                None => user.to_string(),
            }
        }
        SessionState::Anonymous => "anónimo".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            app.state.router().current().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(who, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(app.status.as_str(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            "F1 consola  F2 discos  ^G login  ^Q salir",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
