use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogIntent<T> {
    /// Open the dialog, seeding the draft from the committed value.
    /// Re-showing an open dialog re-seeds it.
    Show { committed: T },
    /// Replace the draft. Ignored while closed.
    SetCurrent(T),
    /// Close without committing.
    Dismiss,
    /// Close after the draft was committed by the controller.
    Confirm,
    /// The store emitted a new committed value. Only a closed dialog
    /// follows it; an open edit session keeps its draft.
    Sync { committed: T },
}

impl<T: Send + 'static> Intent for DialogIntent<T> {}
