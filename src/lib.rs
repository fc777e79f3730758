//! Observable settings store with a terminal settings screen on top.
//!
//! [`settings::SettingsStore`] owns the session's [`settings::Settings`]
//! and notifies subscribers on every change. The [`ui`] layer renders it,
//! edits one field at a time in a draft dialog, and commits drafts back
//! through the store's setters.

pub mod config;
pub mod logging;
pub mod settings;
pub mod ui;
