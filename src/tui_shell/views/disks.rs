use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::catalog::entry_lines;

use super::super::App;
use super::super::view::render_view_chrome;

pub(super) fn render(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let subtitle = if app.catalog_loading {
        "cargando..."
    } else {
        "Seleccione el disco que desea visualizar (Enter)"
    };
    let inner = render_view_chrome(
        frame,
        "Visualizador del Sistema de Archivos",
        subtitle,
        area,
    );

    let catalog = app.state.catalog();
    if catalog.is_empty() {
        let msg = if app.catalog_loading {
            "(cargando discos)"
        } else {
            "(no hay discos)"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(msg, Style::default().fg(Color::DarkGray))),
            inner,
        );
        return;
    }

    let rows: Vec<ListItem> = catalog
        .disks()
        .iter()
        .map(|d| {
            let mut lines = entry_lines(d).into_iter();
            let mut out = Vec::new();
            if let Some(name) = lines.next() {
                out.push(Line::styled(
                    name,
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            out.extend(lines.map(|l| Line::from(format!("  {}", l))));
            ListItem::new(out)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(catalog.selected()));
    let list = List::new(rows)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, inner, &mut state);
}
