use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state stored in `slot`, in place.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
