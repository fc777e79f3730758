/// Marker for values fed into a [`Reducer`](super::Reducer): a user gesture
/// on a dialog, or a new committed value arriving from the store.
pub trait Intent: Send + 'static {}
