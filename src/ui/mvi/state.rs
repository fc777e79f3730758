/// Marker for transient UI state driven by a reducer.
///
/// `Default` is the resting state (e.g. a closed dialog) so dispatch can
/// `mem::take` the state out of its owner.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
