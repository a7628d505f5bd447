//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either requests coming from a screen (load, refresh) or
/// results coming back from the repository. Reducers consume them.
pub trait Intent: Send + 'static {}
