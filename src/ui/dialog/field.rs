use std::fmt::Debug;

use crate::settings::{Settings, SettingsStore};

/// One editable field of [`Settings`].
///
/// Adding a field = a new implementor plus a row on the settings screen.
pub trait SettingField: 'static {
    type Value: Clone + PartialEq + Default + Send + Debug + 'static;

    /// Row and dialog title.
    const TITLE: &'static str;
    /// Snackbar text shown after a confirmed edit.
    const ACKNOWLEDGMENT: &'static str;

    fn read(settings: &Settings) -> Self::Value;

    fn commit(store: &SettingsStore, value: Self::Value);

    fn display(value: &Self::Value) -> String;
}

pub struct CountField;

impl SettingField for CountField {
    type Value = i64;

    const TITLE: &'static str = "Count";
    const ACKNOWLEDGMENT: &'static str = "Updated Count";

    fn read(settings: &Settings) -> i64 {
        settings.count
    }

    fn commit(store: &SettingsStore, value: i64) {
        store.set_count(value);
    }

    fn display(value: &i64) -> String {
        value.to_string()
    }
}

pub struct DescriptionField;

impl SettingField for DescriptionField {
    type Value = String;

    const TITLE: &'static str = "Description";
    const ACKNOWLEDGMENT: &'static str = "Updated Description";

    fn read(settings: &Settings) -> String {
        settings.description.clone()
    }

    fn commit(store: &SettingsStore, value: String) {
        store.set_description(value);
    }

    fn display(value: &String) -> String {
        value.clone()
    }
}
