/// Marker trait for discrete, tagged descriptions of a state change.
pub trait Intent: Send + 'static {}
