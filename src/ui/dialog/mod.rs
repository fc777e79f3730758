//! Per-field edit dialogs.
//!
//! A dialog keeps a draft copy of one settings field while the user edits
//! it. The draft is seeded from the store when the dialog opens, thrown
//! away on dismiss, and written back only on confirm.

mod controller;
mod field;
mod intent;
mod reducer;
mod state;

pub use controller::DialogController;
pub use field::{CountField, DescriptionField, SettingField};
pub use intent::DialogIntent;
pub use reducer::DialogReducer;
pub use state::DialogState;
