use std::time::Instant;

use crate::config::AppConfig;
use crate::settings::{Settings, SettingsStore};
use crate::ui::presenter::{DialogKind, SettingsPresenter};
use crate::ui::snackbar::Snackbar;

/// Rows on the settings screen, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingsRow {
    Count,
    Description,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 2] = [SettingsRow::Count, SettingsRow::Description];

    pub fn dialog(self) -> DialogKind {
        match self {
            SettingsRow::Count => DialogKind::Count,
            SettingsRow::Description => DialogKind::Description,
        }
    }
}

/// Which dialog button Enter activates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ButtonFocus {
    Confirm,
    Cancel,
}

pub struct App {
    should_quit: bool,
    focused_row: SettingsRow,
    button_focus: ButtonFocus,
    confirm_label: String,
    cancel_label: Option<String>,
    presenter: SettingsPresenter,
}

impl App {
    pub fn new(store: &SettingsStore, snackbar: Snackbar, config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            focused_row: SettingsRow::Count,
            button_focus: ButtonFocus::Confirm,
            confirm_label: config.ui.confirm_label.clone(),
            cancel_label: config.ui.cancel_label.clone(),
            presenter: SettingsPresenter::new(store, snackbar, config.count_choices.values()),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn presenter(&self) -> &SettingsPresenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut SettingsPresenter {
        &mut self.presenter
    }

    pub fn focused_row(&self) -> SettingsRow {
        self.focused_row
    }

    pub fn button_focus(&self) -> ButtonFocus {
        self.button_focus
    }

    pub fn confirm_label(&self) -> &str {
        &self.confirm_label
    }

    pub fn cancel_label(&self) -> Option<&str> {
        self.cancel_label.as_deref()
    }

    pub fn dialog_open(&self) -> bool {
        self.presenter.active_dialog().is_some()
    }

    /// Move row focus, wrapping at both ends.
    pub fn move_row(&mut self, forward: bool) {
        let rows = SettingsRow::ALL;
        let index = rows
            .iter()
            .position(|row| *row == self.focused_row)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % rows.len()
        } else {
            (index + rows.len() - 1) % rows.len()
        };
        self.focused_row = rows[next];
    }

    /// Open the dialog for the focused row.
    pub fn open_focused_row(&mut self) {
        self.button_focus = ButtonFocus::Confirm;
        self.presenter.show(self.focused_row.dialog());
    }

    /// Tab between buttons. Only meaningful with a cancel button configured.
    pub fn toggle_button_focus(&mut self) {
        if self.cancel_label.is_none() {
            return;
        }
        self.button_focus = match self.button_focus {
            ButtonFocus::Confirm => ButtonFocus::Cancel,
            ButtonFocus::Cancel => ButtonFocus::Confirm,
        };
    }

    /// Press the focused dialog button.
    pub fn activate_button(&mut self) {
        match self.button_focus {
            ButtonFocus::Confirm => {
                self.presenter.confirm_active();
            }
            ButtonFocus::Cancel => self.presenter.dismiss_active(),
        }
        self.button_focus = ButtonFocus::Confirm;
    }

    pub fn dismiss_dialog(&mut self) {
        self.presenter.dismiss_active();
        self.button_focus = ButtonFocus::Confirm;
    }

    pub fn on_settings_changed(&mut self, settings: Settings) {
        self.presenter.on_settings_changed(settings);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.presenter.snackbar().tick(now);
    }
}
