mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AppConfig, CountChoices, UiConfig, MAX_COUNT_CHOICES};
