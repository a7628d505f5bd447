//! View-model for the flight detail screen.

use parking_lot::Mutex;

use crate::domain::Flight;
use crate::repository::FlightRepository;
use crate::ui::load::FlightDetailState;
use crate::ui::scope::ScreenScope;
use crate::ui::view_model::{StateContainer, StateObserver};

/// Owns the detail screen's state. Stays `Loading` until [`load`](Self::load).
pub struct FlightDetailViewModel {
    repository: FlightRepository,
    container: StateContainer<Flight>,
    /// Last requested id, used by `reload`.
    flight_id: Mutex<Option<String>>,
}

impl FlightDetailViewModel {
    pub fn new(repository: FlightRepository) -> Self {
        Self::with_scope(repository, ScreenScope::new())
    }

    pub fn with_scope(repository: FlightRepository, scope: ScreenScope) -> Self {
        Self {
            repository,
            container: StateContainer::with_scope(scope),
            flight_id: Mutex::new(None),
        }
    }

    /// Show flight `id`.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn load(&self, id: &str) {
        // Held across the load so the remembered id matches the winning load.
        let mut flight_id = self.flight_id.lock();
        *flight_id = Some(id.to_string());
        self.container.load(self.repository.get_by_id(id));
    }

    /// Load the last requested flight again. Returns `false` if nothing
    /// was requested yet.
    pub fn reload(&self) -> bool {
        let flight_id = self.flight_id.lock();
        let Some(id) = flight_id.as_deref() else {
            return false;
        };
        self.container.load(self.repository.get_by_id(id));
        true
    }

    pub fn flight_id(&self) -> Option<String> {
        self.flight_id.lock().clone()
    }

    pub fn state(&self) -> FlightDetailState {
        self.container.state()
    }

    pub fn subscribe(&self) -> StateObserver<Flight> {
        self.container.subscribe()
    }

    pub fn scope(&self) -> &ScreenScope {
        self.container.scope()
    }

    pub fn close(&self) {
        self.container.close();
    }
}
