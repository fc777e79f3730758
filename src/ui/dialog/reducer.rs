use std::marker::PhantomData;

use crate::ui::dialog::intent::DialogIntent;
use crate::ui::dialog::state::DialogState;
use crate::ui::mvi::Reducer;

pub struct DialogReducer<T>(PhantomData<fn() -> T>);

impl<T> Reducer for DialogReducer<T>
where
    T: Clone + PartialEq + Default + Send + 'static,
{
    type State = DialogState<T>;
    type Intent = DialogIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::Show { committed } => DialogState::Open {
                draft: committed.clone(),
                source: committed,
            },
            DialogIntent::SetCurrent(value) => match state {
                DialogState::Open { source, .. } => DialogState::Open {
                    draft: value,
                    source,
                },
                closed => closed,
            },
            DialogIntent::Dismiss => match state {
                DialogState::Open { source, .. } => DialogState::Closed { draft: source },
                closed => closed,
            },
            DialogIntent::Confirm => match state {
                DialogState::Open { draft, .. } => DialogState::Closed { draft },
                closed => closed,
            },
            DialogIntent::Sync { committed } => match state {
                DialogState::Closed { .. } => DialogState::Closed { draft: committed },
                open => open,
            },
        }
    }
}
