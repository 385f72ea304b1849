use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::view::{grow_to_content, render_view_chrome};
use super::super::{App, fmt_ts_ui};

const TITLE: &str = "Sistema de Archivos EXT2 - Proyecto MIA";
const OUTPUT_PLACEHOLDER: &str = "(sin salida)";

pub(super) fn render(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let inner = render_view_chrome(
        frame,
        TITLE,
        "^R ejecutar  ^L limpiar  ^O cargar .smia",
        area,
    );

    let console = app.state.console();
    let out_lines = console.output_lines();

    // Output grows to fit; the editor keeps at least a few rows.
    let max_out = inner.height.saturating_sub(5).max(3);
    let out_height = grow_to_content(out_lines.len(), max_out);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(out_height)])
        .split(inner);

    let script = console.script();
    let mut editor_lines: Vec<Line> = script.lines().map(Line::from).collect();
    let visible = parts[0].height.saturating_sub(2) as usize;
    let scroll = editor_lines.len().saturating_sub(visible.max(1));
    if editor_lines.is_empty() {
        editor_lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(editor_lines)
            .block(Block::default().borders(Borders::ALL).title("Entrada"))
            .scroll((scroll as u16, 0)),
        parts[0],
    );

    if app.modal.is_none() {
        let last = script.lines().last().unwrap_or_default();
        let row = script.lines().count().saturating_sub(1 + scroll) as u16;
        let x = parts[0].x + 1 + last.chars().count() as u16;
        let y = parts[0].y + 1 + row;
        frame.set_cursor_position((x.min(parts[0].right().saturating_sub(2)), y));
    }

    let title = match (console.is_pending(), console.completed_at()) {
        (true, _) => "Salida (ejecutando...)".to_string(),
        (false, Some(ts)) => format!("Salida ({})", fmt_ts_ui(ts)),
        (false, None) => "Salida".to_string(),
    };
    let lines: Vec<Line> = if out_lines.is_empty() {
        vec![Line::styled(
            OUTPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        out_lines.into_iter().map(Line::from).collect()
    };
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false }),
        parts[1],
    );
}
