mod common;

use common::app_with;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use stateholder::config::AppConfig;
use stateholder::settings::SettingsStore;
use stateholder::ui::app::App;
use stateholder::ui::render::draw;
use std::time::Instant;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn screen_shows_rows_with_current_values() {
    let store = SettingsStore::new();
    let app = app_with(&store, &AppConfig::default());
    let screen = render(&app);
    assert!(screen.contains("Settings"));
    assert!(screen.contains("Count"));
    assert!(screen.contains("Description"));
    assert!(screen.contains("Default Description"));
    assert!(screen.contains("Enter: Edit"));
}

#[test]
fn count_dialog_marks_draft_choice() {
    let store = SettingsStore::new();
    let mut app = app_with(&store, &AppConfig::default());
    app.open_focused_row();
    app.presenter_mut().choose_count(3);

    let screen = render(&app);
    assert!(screen.contains("(•)   3"));
    assert!(screen.contains("( )   1"));
    assert!(screen.contains(" Ok "));
    assert!(screen.contains("Esc: Dismiss"));
}

#[test]
fn cancel_button_rendered_when_configured() {
    let store = SettingsStore::new();
    let mut config = AppConfig::default();
    config.ui.cancel_label = Some("Cancel".to_string());
    let mut app = app_with(&store, &config);
    app.open_focused_row();
    assert!(render(&app).contains(" Cancel "));
}

#[test]
fn snackbar_visible_after_confirm() {
    let store = SettingsStore::new();
    let mut app = app_with(&store, &AppConfig::default());
    app.move_row(true);
    app.open_focused_row();
    app.activate_button();
    app.on_tick(Instant::now());

    assert!(render(&app).contains("Updated Description"));
}
