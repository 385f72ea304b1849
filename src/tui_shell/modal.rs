use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Input, LoginField, Modal};

fn modal_area(frame: &ratatui::Frame, max_h: u16) -> Rect {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = area.height.saturating_sub(6).clamp(5, max_h);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

fn modal_title(modal: &Modal) -> &'static str {
    match modal {
        Modal::Alert { .. } => "Aviso",
        Modal::Login { .. } => "Iniciar Sesión",
        Modal::LoadPath { .. } => "Cargar archivo .smia",
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let box_area = match modal {
        Modal::Alert { lines } => modal_area(frame, lines.len() as u16 + 4),
        Modal::Login { .. } => modal_area(frame, 12),
        Modal::LoadPath { .. } => modal_area(frame, 5),
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match modal {
        Modal::Alert { lines } => {
            let mut out: Vec<Line> = lines.iter().map(|s| Line::from(s.as_str())).collect();
            out.push(Line::from(""));
            out.push(Line::styled(
                "Enter/Esc: aceptar",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(Paragraph::new(out).wrap(Wrap { trim: false }), inner);
        }

        Modal::Login {
            username,
            password,
            partition,
            focus,
        } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(inner);

            let fields = [
                (LoginField::Username, username.buf.clone(), username),
                (LoginField::Password, password.masked(), password),
                (LoginField::Partition, partition.buf.clone(), partition),
            ];
            for (i, (field, shown, input)) in fields.into_iter().enumerate() {
                let style = if field == *focus {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                frame.render_widget(
                    Paragraph::new(shown).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(Span::styled(field.label(), style)),
                    ),
                    parts[i],
                );
                if field == *focus {
                    let x = parts[i].x + 1 + input.cursor as u16;
                    frame.set_cursor_position((x, parts[i].y + 1));
                }
            }
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Tab: siguiente campo  Enter: ingresar  Esc: cancelar",
                    Style::default().fg(Color::DarkGray),
                )),
                parts[3],
            );
        }

        Modal::LoadPath { input } => {
            let prompt = "ruta> ";
            let line = Line::from(vec![
                Span::styled(prompt, Style::default().fg(Color::Yellow)),
                Span::raw(input.buf.as_str()),
            ]);
            frame.render_widget(Paragraph::new(line), inner);
            let x = inner.x + prompt.len() as u16 + input.cursor as u16;
            frame.set_cursor_position((x, inner.y));
        }
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        Login {
            username: String,
            password: String,
            partition: String,
        },
        Load(String),
    }

    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };

        match m {
            Modal::Alert { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter => ModalAction::Close,
                _ => ModalAction::None,
            },

            Modal::Login {
                username,
                password,
                partition,
                focus,
            } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Tab | KeyCode::Down => {
                    *focus = focus.next();
                    ModalAction::None
                }
                KeyCode::Enter => ModalAction::Login {
                    username: username.buf.clone(),
                    password: password.buf.clone(),
                    partition: partition.buf.clone(),
                },
                _ => {
                    let input = match focus {
                        LoginField::Username => username,
                        LoginField::Password => password,
                        LoginField::Partition => partition,
                    };
                    input.edit(key);
                    ModalAction::None
                }
            },

            Modal::LoadPath { input } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => ModalAction::Load(input.buf.clone()),
                _ => {
                    input.edit(key);
                    ModalAction::None
                }
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Login {
            username,
            password,
            partition,
        } => {
            if app.login(&username, &password, &partition) {
                app.modal = None;
            }
        }
        ModalAction::Load(path) => {
            app.modal = None;
            app.load_script(&path);
        }
    }
}

/// The prompt starts from the last path that loaded, if any.
pub(super) fn open_load_prompt(app: &mut App) {
    let input = Input::with_text(app.last_script_path.as_deref().unwrap_or_default());
    app.modal = Some(Modal::LoadPath { input });
}
