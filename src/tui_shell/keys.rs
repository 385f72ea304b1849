use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::router::Route;

use super::modal::{handle_modal_key, open_load_prompt};
use super::{App, Modal};

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        handle_modal_key(app, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match (ctrl, key.code) {
        (true, KeyCode::Char('q')) => {
            app.quit = true;
            return;
        }
        (true, KeyCode::Char('g')) => {
            if app.state.session().is_some() {
                app.logout();
            } else {
                app.modal = Some(Modal::login());
            }
            return;
        }
        (_, KeyCode::F(1)) => {
            app.state.navigate(Route::Console);
            return;
        }
        (_, KeyCode::F(2)) => {
            app.open_catalog();
            return;
        }
        _ => {}
    }

    match app.state.router().current() {
        Route::Console => handle_console_key(app, key, ctrl),
        Route::Catalog => handle_catalog_key(app, key),
        Route::Viewer { .. } => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
                app.state.navigate(Route::Catalog);
            }
        }
    }
}

fn handle_console_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    if ctrl {
        match key.code {
            KeyCode::Char('r') => app.submit(),
            KeyCode::Char('l') => app.state.clear_console(),
            KeyCode::Char('o') => open_load_prompt(app),
            _ => {}
        }
        return;
    }

    let script = app.state.console_mut().script_mut();
    match key.code {
        KeyCode::Char(c) => script.insert_char(c),
        KeyCode::Enter => script.insert_newline(),
        KeyCode::Tab => script.insert_char('\t'),
        KeyCode::Backspace => script.backspace(),
        _ => {}
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.state.catalog_mut().move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.state.catalog_mut().move_down(),
        KeyCode::Enter => {
            app.state.open_selected_disk();
        }
        KeyCode::Char('r') => app.open_catalog(),
        KeyCode::Esc => app.state.navigate(Route::Console),
        _ => {}
    }
}
