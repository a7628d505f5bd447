//! Reducer for loading screens.

use std::marker::PhantomData;

use crate::repository::Outcome;
use crate::ui::mvi::Reducer;

use super::intent::LoadIntent;
use super::state::ScreenState;

/// State transitions for [`ScreenState`].
///
/// Every variant may follow every other. Failure kinds are not
/// distinguished: all of them become `Error(message)`.
pub struct ScreenReducer<T> {
    _payload: PhantomData<T>,
}

impl<T> Reducer for ScreenReducer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    type State = ScreenState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Started => ScreenState::Loading,
            LoadIntent::Finished(Outcome::Success(data)) => ScreenState::Success(data),
            LoadIntent::Finished(Outcome::Failure(err)) => ScreenState::Error(err.to_string()),
        }
    }
}
