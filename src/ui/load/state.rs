//! State for a screen that loads its content.

use crate::domain::Flight;
use crate::ui::mvi::UiState;

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState<T> {
    /// Waiting for the repository.
    #[default]
    Loading,

    /// Content is available.
    Success(T),

    /// Loading failed; the message is shown verbatim.
    Error(String),
}

pub type FlightListState = ScreenState<Vec<Flight>>;
pub type FlightDetailState = ScreenState<Flight>;

impl<T> UiState for ScreenState<T> where T: Clone + PartialEq + Send + Sync + 'static {}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Success or Error.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
