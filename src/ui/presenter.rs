//! Settings screen presenter.
//!
//! Keeps the last settings value emitted by the store for rendering and
//! owns one [`DialogController`] per field.

use crate::settings::{Settings, SettingsStore};
use crate::ui::dialog::{CountField, DescriptionField, DialogController};
use crate::ui::snackbar::Snackbar;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogKind {
    Count,
    Description,
}

pub struct SettingsPresenter {
    settings: Settings,
    count_dialog: DialogController<CountField>,
    description_dialog: DialogController<DescriptionField>,
    snackbar: Snackbar,
    count_choices: Vec<i64>,
}

impl SettingsPresenter {
    /// `count_choices` is what the count dialog offers. The store accepts
    /// any integer regardless.
    pub fn new(store: &SettingsStore, snackbar: Snackbar, count_choices: Vec<i64>) -> Self {
        Self {
            settings: store.current(),
            count_dialog: DialogController::new(store.clone(), snackbar.clone()),
            description_dialog: DialogController::new(store.clone(), snackbar.clone()),
            snackbar,
            count_choices,
        }
    }

    /// Snapshot the store last reported.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    pub fn count_choices(&self) -> &[i64] {
        &self.count_choices
    }

    pub fn count_dialog(&self) -> &DialogController<CountField> {
        &self.count_dialog
    }

    pub fn count_dialog_mut(&mut self) -> &mut DialogController<CountField> {
        &mut self.count_dialog
    }

    pub fn description_dialog(&self) -> &DialogController<DescriptionField> {
        &self.description_dialog
    }

    pub fn description_dialog_mut(&mut self) -> &mut DialogController<DescriptionField> {
        &mut self.description_dialog
    }

    /// The dialog currently shown, if any. Count wins if both are open.
    pub fn active_dialog(&self) -> Option<DialogKind> {
        if self.count_dialog.is_open() {
            Some(DialogKind::Count)
        } else if self.description_dialog.is_open() {
            Some(DialogKind::Description)
        } else {
            None
        }
    }

    /// Apply a value emitted by the store.
    pub fn on_settings_changed(&mut self, settings: Settings) {
        self.count_dialog.on_settings_changed(&settings);
        self.description_dialog.on_settings_changed(&settings);
        self.settings = settings;
    }

    pub fn show(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::Count => self.count_dialog.show(),
            DialogKind::Description => self.description_dialog.show(),
        }
    }

    /// Dismiss whichever dialog is open.
    pub fn dismiss_active(&mut self) {
        match self.active_dialog() {
            Some(DialogKind::Count) => self.count_dialog.dismiss(),
            Some(DialogKind::Description) => self.description_dialog.dismiss(),
            None => {}
        }
    }

    /// Confirm whichever dialog is open. Returns `false` if none was.
    pub fn confirm_active(&mut self) -> bool {
        match self.active_dialog() {
            Some(DialogKind::Count) => self.count_dialog.confirm(),
            Some(DialogKind::Description) => self.description_dialog.confirm(),
            None => false,
        }
    }

    /// Index into `count_choices` of the current count draft.
    pub fn selected_count_choice(&self) -> Option<usize> {
        let draft = *self.count_dialog.current();
        self.count_choices.iter().position(|&choice| choice == draft)
    }

    /// Move the count draft through the offered choices, wrapping at
    /// both ends. A draft outside the choices jumps to the first (forward)
    /// or last (backward) entry.
    pub fn step_count_choice(&mut self, forward: bool) {
        let len = self.count_choices.len();
        if len == 0 {
            return;
        }
        let next = match (self.selected_count_choice(), forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(index), true) => (index + 1) % len,
            (Some(0), false) => len - 1,
            (Some(index), false) => index - 1,
        };
        let value = self.count_choices[next];
        self.count_dialog.set_current(value);
    }

    /// Set the count draft to `value` if it is one of the offered choices.
    pub fn choose_count(&mut self, value: i64) -> bool {
        if !self.count_choices.contains(&value) {
            return false;
        }
        self.count_dialog.set_current(value);
        true
    }

    pub fn push_description_char(&mut self, ch: char) {
        let mut draft = self.description_dialog.current().clone();
        draft.push(ch);
        self.description_dialog.set_current(draft);
    }

    pub fn pop_description_char(&mut self) {
        let mut draft = self.description_dialog.current().clone();
        if draft.pop().is_some() {
            self.description_dialog.set_current(draft);
        }
    }
}
