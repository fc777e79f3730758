use crate::config::AppConfig;
use crate::settings::{Settings, SettingsStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::snackbar::Snackbar;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

/// Run the settings screen until the user quits. Returns the settings the
/// session ended with.
pub fn run(config: &AppConfig, store: SettingsStore) -> io::Result<Settings> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(&store, Snackbar::new(config.ui.snackbar_duration()), config);

    let sender = events.sender();
    let subscription = store.subscribe(move |settings| {
        // The loop may already be gone during shutdown.
        let _ = sender.send(AppEvent::SettingsChanged(settings.clone()));
    });
    tracing::info!(settings = ?store.current(), "Settings screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::SettingsChanged(settings)) => {
                app.on_settings_changed(settings);
                // Show the acknowledgment without waiting for the next tick.
                app.on_tick(Instant::now());
            }
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    subscription.unsubscribe();
    drop(guard);

    let settings = store.current();
    tracing::info!(settings = ?settings, "Settings screen closed");
    Ok(settings)
}
