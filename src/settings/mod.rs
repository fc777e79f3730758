//! Session settings and the observable store that owns them.

mod store;
mod types;

pub use store::{SettingsStore, Subscription, WeakSettingsStore};
pub use types::{Settings, DEFAULT_COUNT, DEFAULT_DESCRIPTION};
