//! Transient acknowledgment messages ("Updated Count").
//!
//! Posting is fire-and-forget: `show` only queues the text. The event loop
//! promotes queued messages and expires the visible one on each tick.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Posted messages kept for inspection.
const MAX_HISTORY: usize = 32;

struct Visible {
    text: String,
    expires_at: Instant,
}

struct SnackbarInner {
    queue: VecDeque<String>,
    visible: Option<Visible>,
    history: VecDeque<String>,
}

/// Cloneable handle to the shared snackbar queue.
#[derive(Clone)]
pub struct Snackbar {
    inner: Arc<Mutex<SnackbarInner>>,
    duration: Duration,
}

impl Snackbar {
    pub fn new(duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SnackbarInner {
                queue: VecDeque::new(),
                visible: None,
                history: VecDeque::new(),
            })),
            duration,
        }
    }

    /// Queue `text` for display.
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(message = %text, "Snackbar queued");
        let mut inner = self.inner.lock();
        if inner.history.len() == MAX_HISTORY {
            inner.history.pop_front();
        }
        inner.history.push_back(text.clone());
        inner.queue.push_back(text);
    }

    /// Expire the visible message if its time is up, then promote the next
    /// queued one.
    pub fn tick(&self, now: Instant) {
        let mut inner = self.inner.lock();
        if inner
            .visible
            .as_ref()
            .is_some_and(|visible| now >= visible.expires_at)
        {
            inner.visible = None;
        }
        if inner.visible.is_none() {
            if let Some(text) = inner.queue.pop_front() {
                inner.visible = Some(Visible {
                    text,
                    expires_at: now + self.duration,
                });
            }
        }
    }

    /// Text currently on screen, if any.
    pub fn visible(&self) -> Option<String> {
        self.inner
            .lock()
            .visible
            .as_ref()
            .map(|visible| visible.text.clone())
    }

    /// Messages posted but not yet shown.
    pub fn pending(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Everything posted so far (most recent last, bounded).
    pub fn history(&self) -> Vec<String> {
        self.inner.lock().history.iter().cloned().collect()
    }
}
