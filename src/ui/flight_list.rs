//! View-model for the flight list screen.

use crate::domain::Flight;
use crate::repository::FlightRepository;
use crate::ui::load::FlightListState;
use crate::ui::scope::ScreenScope;
use crate::ui::view_model::{StateContainer, StateObserver};

/// Owns the list screen's state. Loading starts on construction.
pub struct FlightListViewModel {
    repository: FlightRepository,
    container: StateContainer<Vec<Flight>>,
}

impl FlightListViewModel {
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: FlightRepository) -> Self {
        Self::with_scope(repository, ScreenScope::new())
    }

    pub fn with_scope(repository: FlightRepository, scope: ScreenScope) -> Self {
        let view_model = Self {
            repository,
            container: StateContainer::with_scope(scope),
        };
        view_model.refresh();
        view_model
    }

    /// Re-enter `Loading` and fetch the list again.
    pub fn refresh(&self) {
        self.container.load(self.repository.get_all());
    }

    pub fn state(&self) -> FlightListState {
        self.container.state()
    }

    pub fn subscribe(&self) -> StateObserver<Vec<Flight>> {
        self.container.subscribe()
    }

    pub fn scope(&self) -> &ScreenScope {
        self.container.scope()
    }

    /// Stop applying results (screen destroyed).
    pub fn close(&self) {
        self.container.close();
    }
}
