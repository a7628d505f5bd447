//! Intents for a loading screen.

use crate::repository::Outcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadIntent<T> {
    /// A load or refresh began.
    Started,

    /// The repository produced its outcome.
    Finished(Outcome<T>),
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}
