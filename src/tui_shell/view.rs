use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

/// Outer frame shared by every screen: bordered, title plus a key hint.
/// Returns the area left for the screen body.
pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    hint: &str,
    area: Rect,
) -> Rect {
    let header = Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(hint, Style::default().fg(Color::Gray)),
    ]);
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// Height for a pane that grows with its content, capped at `max`.
pub(super) fn grow_to_content(lines: usize, max: u16) -> u16 {
    // +2 for the borders.
    let want = u16::try_from(lines.max(1)).unwrap_or(u16::MAX).saturating_add(2);
    want.min(max)
}
