//! Screen entry contracts.
//!
//! A screen pairs a view-model with the callbacks its host supplies for
//! navigation. Dropping a screen is its teardown: the view-model's scope
//! closes and any pending result is discarded.

use crate::ui::flight_detail::FlightDetailViewModel;
use crate::ui::flight_list::FlightListViewModel;

pub type SelectCallback = Box<dyn Fn(&str) + Send + Sync>;
pub type BackCallback = Box<dyn Fn() + Send + Sync>;

pub struct FlightListScreen {
    view_model: FlightListViewModel,
    on_select: SelectCallback,
}

impl FlightListScreen {
    pub fn new<F>(view_model: FlightListViewModel, on_select: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            view_model,
            on_select: Box::new(on_select),
        }
    }

    pub fn view_model(&self) -> &FlightListViewModel {
        &self.view_model
    }

    /// The user picked flight `id`.
    pub fn select(&self, id: &str) {
        tracing::debug!(id = %id, "Flight selected");
        (self.on_select)(id);
    }
}

impl Drop for FlightListScreen {
    fn drop(&mut self) {
        self.view_model.close();
    }
}

pub struct FlightDetailScreen {
    view_model: FlightDetailViewModel,
    on_back: BackCallback,
}

impl FlightDetailScreen {
    /// Open the detail screen for `id`; loading starts immediately.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new<F>(id: &str, view_model: FlightDetailViewModel, on_back: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        view_model.load(id);
        Self {
            view_model,
            on_back: Box::new(on_back),
        }
    }

    pub fn view_model(&self) -> &FlightDetailViewModel {
        &self.view_model
    }

    /// The user asked to go back.
    pub fn back(&self) {
        (self.on_back)();
    }
}

impl Drop for FlightDetailScreen {
    fn drop(&mut self) {
        self.view_model.close();
    }
}
