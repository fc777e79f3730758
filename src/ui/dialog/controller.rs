use crate::settings::{Settings, SettingsStore};
use crate::ui::dialog::field::SettingField;
use crate::ui::dialog::intent::DialogIntent;
use crate::ui::dialog::reducer::DialogReducer;
use crate::ui::dialog::state::DialogState;
use crate::ui::mvi::dispatch;
use crate::ui::snackbar::Snackbar;

/// Drives one field's edit dialog against the store.
///
/// Owns the dialog's [`DialogState`]; the only store access is reading the
/// committed value on `show` and calling the field's setter on `confirm`.
pub struct DialogController<F: SettingField> {
    state: DialogState<F::Value>,
    store: SettingsStore,
    snackbar: Snackbar,
}

impl<F: SettingField> DialogController<F> {
    pub fn new(store: SettingsStore, snackbar: Snackbar) -> Self {
        let draft = F::read(&store.current());
        Self {
            state: DialogState::Closed { draft },
            store,
            snackbar,
        }
    }

    pub fn state(&self) -> &DialogState<F::Value> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Current draft value.
    pub fn current(&self) -> &F::Value {
        self.state.draft()
    }

    pub fn title(&self) -> &'static str {
        F::TITLE
    }

    pub fn show(&mut self) {
        let committed = F::read(&self.store.current());
        tracing::debug!(field = F::TITLE, value = ?committed, "Dialog opened");
        self.dispatch(DialogIntent::Show { committed });
    }

    pub fn set_current(&mut self, value: F::Value) {
        self.dispatch(DialogIntent::SetCurrent(value));
    }

    pub fn dismiss(&mut self) {
        if self.state.is_open() {
            tracing::debug!(field = F::TITLE, "Dialog dismissed");
        }
        self.dispatch(DialogIntent::Dismiss);
    }

    /// Commit the draft to the store and close.
    ///
    /// Returns `false` (and does nothing) when the dialog is not open.
    pub fn confirm(&mut self) -> bool {
        let DialogState::Open { draft, .. } = &self.state else {
            return false;
        };
        let value = draft.clone();
        tracing::debug!(field = F::TITLE, value = ?value, "Dialog confirmed");

        F::commit(&self.store, value);
        self.snackbar.show(F::ACKNOWLEDGMENT);
        self.dispatch(DialogIntent::Confirm);
        true
    }

    /// Feed a value emitted by the store. Re-seeds the draft only while
    /// the dialog is closed.
    pub fn on_settings_changed(&mut self, settings: &Settings) {
        self.dispatch(DialogIntent::Sync {
            committed: F::read(settings),
        });
    }

    fn dispatch(&mut self, intent: DialogIntent<F::Value>) {
        dispatch::<DialogReducer<F::Value>>(&mut self.state, intent);
    }
}
