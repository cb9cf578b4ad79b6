/// Marker trait for state owned by a single view.
///
/// `Default` lets owners move the state out while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
