use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNT: i64 = 1;
pub const DEFAULT_DESCRIPTION: &str = "Default Description";

/// Session settings shown on the settings screen.
///
/// Values are never edited in place: every change produces a new
/// `Settings` with exactly one field replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub count: i64,
    pub description: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl Settings {
    pub fn new(count: i64, description: impl Into<String>) -> Self {
        Self {
            count,
            description: description.into(),
        }
    }

    /// Copy of `self` with `count` replaced.
    pub fn with_count(&self, count: i64) -> Self {
        Self {
            count,
            description: self.description.clone(),
        }
    }

    /// Copy of `self` with `description` replaced.
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            count: self.count,
            description: description.into(),
        }
    }
}
