//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are cloned out to observers, compared to detect changes, and
/// start from `Default`. `Sync` lets observers on other tasks read them.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
