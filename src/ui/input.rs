use crate::ui::app::App;
use crate::ui::presenter::DialogKind;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.presenter().active_dialog() {
        Some(kind) => handle_dialog_key(app, kind, key),
        None => handle_screen_key(app, key),
    }
}

fn handle_screen_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_row(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_row(true),
        KeyCode::Enter => app.open_focused_row(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, kind: DialogKind, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.dismiss_dialog();
            return;
        }
        KeyCode::Enter => {
            app.activate_button();
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_button_focus();
            return;
        }
        _ => {}
    }

    let presenter = app.presenter_mut();
    match kind {
        DialogKind::Count => match key.code {
            KeyCode::Up => presenter.step_count_choice(false),
            KeyCode::Down => presenter.step_count_choice(true),
            KeyCode::Char(ch) => {
                if let Some(digit) = ch.to_digit(10) {
                    presenter.choose_count(i64::from(digit));
                }
            }
            _ => {}
        },
        DialogKind::Description => match key.code {
            KeyCode::Backspace => presenter.pop_description_char(),
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                presenter.push_description_char(ch);
            }
            _ => {}
        },
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
