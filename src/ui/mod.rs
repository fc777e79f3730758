//! Terminal presentation of the settings screen.

pub mod app;
pub mod dialog;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod presenter;
pub mod render;
pub mod runtime;
pub mod snackbar;
pub mod terminal_guard;
pub mod theme;
