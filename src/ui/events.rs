use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::settings::Settings;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The store emitted a new value.
    SettingsChanged(Settings),
}

/// Single queue feeding the UI loop: terminal input from a reader thread
/// plus anything sent through [`EventHandler::sender`].
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Spawn the terminal reader, which emits `Tick` whenever no input
    /// arrived within `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let handler = Self::detached();
        let tx = handler.tx.clone();
        let stop = Arc::clone(&handler.stop);

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(tx, stop, tick_rate));
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to spawn terminal input thread");
        }

        handler
    }

    /// Handler without a terminal reader. Events only arrive through
    /// [`EventHandler::sender`].
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            tx,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

fn input_loop(tx: Sender<AppEvent>, stop: Arc<AtomicBool>, tick_rate: Duration) {
    while !stop.load(Ordering::SeqCst) {
        let ready = match event::poll(tick_rate) {
            Ok(ready) => ready,
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                return;
            }
        };

        let app_event = if ready {
            match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    return;
                }
            }
        } else {
            AppEvent::Tick
        };

        if tx.send(app_event).is_err() {
            return;
        }
    }
}
