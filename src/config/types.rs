use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound on how many radio entries the count dialog renders.
pub const MAX_COUNT_CHOICES: usize = 32;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub count_choices: CountChoices,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long an acknowledgment stays on screen (default: 4000).
    #[serde(default = "default_snackbar_duration_ms")]
    pub snackbar_duration_ms: u64,
    /// Label of the confirming dialog button (default: "Ok").
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,
    /// Label of an extra dismissing button. No button when unset.
    #[serde(default)]
    pub cancel_label: Option<String>,
}

/// Inclusive range of integers offered by the count dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountChoices {
    #[serde(default = "default_count_min")]
    pub min: i64,
    #[serde(default = "default_count_max")]
    pub max: i64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_snackbar_duration_ms() -> u64 {
    4000
}

fn default_confirm_label() -> String {
    "Ok".to_string()
}

fn default_count_min() -> i64 {
    1
}

fn default_count_max() -> i64 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            snackbar_duration_ms: default_snackbar_duration_ms(),
            confirm_label: default_confirm_label(),
            cancel_label: None,
        }
    }
}

impl Default for CountChoices {
    fn default() -> Self {
        Self {
            min: default_count_min(),
            max: default_count_max(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn snackbar_duration(&self) -> Duration {
        Duration::from_millis(self.snackbar_duration_ms)
    }
}

impl CountChoices {
    /// Number of offered values; 0 when `min > max`.
    pub fn len(&self) -> usize {
        if self.min > self.max {
            return 0;
        }
        usize::try_from(self.max.abs_diff(self.min))
            .map(|span| span.saturating_add(1))
            .unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Vec<i64> {
        (self.min..=self.max).collect()
    }
}
