mod common;

use common::{record, snackbar};
use stateholder::settings::{Settings, SettingsStore};
use stateholder::ui::dialog::{CountField, DescriptionField, DialogController};
use stateholder::ui::presenter::{DialogKind, SettingsPresenter};
use std::time::Instant;

#[test]
fn show_then_dismiss_leaves_store_unchanged() {
    let store = SettingsStore::new();
    let (_sub, seen) = record(&store);
    let mut dialog: DialogController<CountField> = DialogController::new(store.clone(), snackbar());

    dialog.show();
    dialog.set_current(4);
    dialog.dismiss();

    assert_eq!(store.current(), Settings::default());
    assert!(seen.lock().is_empty());
}

#[test]
fn show_set_confirm_commits_only_that_field() {
    let store = SettingsStore::with_initial(Settings::new(2, "untouched"));
    let acks = snackbar();
    let mut dialog: DialogController<CountField> = DialogController::new(store.clone(), acks.clone());

    dialog.show();
    dialog.set_current(4);
    assert!(dialog.confirm());

    assert_eq!(store.current(), Settings::new(4, "untouched"));
    assert!(!dialog.is_open());
    assert_eq!(acks.history(), vec!["Updated Count".to_string()]);
}

#[test]
fn confirm_without_edit_still_writes_and_notifies() {
    let store = SettingsStore::new();
    let (_sub, seen) = record(&store);
    let mut dialog: DialogController<DescriptionField> =
        DialogController::new(store.clone(), snackbar());

    dialog.show();
    dialog.confirm();

    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn reopen_seeds_from_current_store_value_not_stale_draft() {
    let store = SettingsStore::new();
    let mut dialog: DialogController<DescriptionField> =
        DialogController::new(store.clone(), snackbar());

    dialog.show();
    dialog.set_current("abandoned".to_string());
    dialog.dismiss();

    store.set_description("changed elsewhere");
    dialog.show();

    assert_eq!(dialog.current(), "changed elsewhere");
}

#[test]
fn count_then_description_scenario() {
    let store = SettingsStore::new();
    let acks = snackbar();
    let mut presenter = SettingsPresenter::new(&store, acks.clone(), (1..=5).collect());
    let (_sub, seen) = record(&store);

    assert_eq!(store.current(), Settings::new(1, "Default Description"));

    store.set_count(5);
    assert_eq!(store.current(), Settings::new(5, "Default Description"));
    presenter.on_settings_changed(seen.lock().last().cloned().unwrap());

    // Count dialog: edit then dismiss.
    presenter.show(DialogKind::Count);
    assert_eq!(*presenter.count_dialog().current(), 5);
    presenter.count_dialog_mut().set_current(3);
    assert_eq!(*presenter.count_dialog().current(), 3);
    assert_eq!(store.current().count, 5);
    presenter.dismiss_active();
    assert_eq!(store.current(), Settings::new(5, "Default Description"));

    // Description dialog: edit then confirm.
    presenter.show(DialogKind::Description);
    assert_eq!(presenter.description_dialog().current(), "Default Description");
    presenter
        .description_dialog_mut()
        .set_current("New Text".to_string());
    assert!(presenter.confirm_active());
    assert_eq!(store.current(), Settings::new(5, "New Text"));

    let descriptions: Vec<_> = acks
        .history()
        .into_iter()
        .filter(|m| m == "Updated Description")
        .collect();
    assert_eq!(descriptions.len(), 1);

    // Eventually visible.
    acks.tick(Instant::now());
    assert_eq!(acks.visible().as_deref(), Some("Updated Description"));
}

#[test]
fn presenter_snapshot_follows_store_events() {
    let store = SettingsStore::new();
    let mut presenter = SettingsPresenter::new(&store, snackbar(), (1..=5).collect());
    let (_sub, seen) = record(&store);

    store.set_description("from elsewhere");
    for settings in seen.lock().drain(..) {
        presenter.on_settings_changed(settings);
    }

    assert_eq!(presenter.settings().description, "from elsewhere");
    assert_eq!(presenter.description_dialog().current(), "from elsewhere");
}

#[test]
fn store_accepts_counts_outside_offered_choices() {
    let store = SettingsStore::new();
    let mut dialog: DialogController<CountField> = DialogController::new(store.clone(), snackbar());
    dialog.show();
    dialog.set_current(-12);
    dialog.confirm();
    assert_eq!(store.current().count, -12);
}
