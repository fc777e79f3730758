//! Unidirectional state primitives for the settings screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └────────── key event ──────────┘
//! ```
//!
//! Reducers stay pure. Side effects such as writing to the
//! [`SettingsStore`](crate::settings::SettingsStore) live in the
//! controllers that drive them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
