use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::viewer::{DetailScreen, NOT_FOUND_MESSAGE};

use super::super::view::render_view_chrome;

pub(super) fn render(frame: &mut ratatui::Frame, detail: &DetailScreen, area: Rect) {
    let inner = render_view_chrome(frame, detail.title(), "Esc: volver", area);

    match detail {
        DetailScreen::NotFound { .. } => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    NOT_FOUND_MESSAGE,
                    Style::default().fg(Color::Red),
                )),
                inner,
            );
        }
        DetailScreen::Found {
            attributes, tree, ..
        } => {
            let height = attributes.len() as u16;
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(height), Constraint::Min(3)])
                .split(inner);

            let lines: Vec<Line> = attributes
                .iter()
                .map(|(k, v)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{}: ", k),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(v.as_str()),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), parts[0]);

            let tree_lines: Vec<Line> = tree
                .iter()
                .map(|l| Line::styled(l.as_str(), Style::default().fg(Color::Gray)))
                .collect();
            frame.render_widget(
                Paragraph::new(tree_lines)
                    .block(Block::default().borders(Borders::ALL).title("Estructura"))
                    .wrap(Wrap { trim: false }),
                parts[1],
            );
        }
    }
}
