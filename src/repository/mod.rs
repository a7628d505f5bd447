//! Repository layer.
//!
//! Wraps a [`FlightApi`] and converts its `Result` contract into
//! single-element [`OutcomeStream`]s. Failures become
//! [`Outcome::Failure`] values and never reach the caller as errors.

mod outcome;
mod stream;

use std::sync::Arc;

pub use outcome::Outcome;
pub use stream::OutcomeStream;

use crate::data::FlightApi;
use crate::domain::Flight;

#[derive(Clone)]
pub struct FlightRepository {
    api: Arc<dyn FlightApi>,
}

impl FlightRepository {
    pub fn new(api: Arc<dyn FlightApi>) -> Self {
        Self { api }
    }

    /// Stream with one outcome holding every flight.
    ///
    /// Nothing runs until the stream is first polled.
    pub fn get_all(&self) -> OutcomeStream<Vec<Flight>> {
        let api = Arc::clone(&self.api);
        OutcomeStream::new(async move {
            tracing::debug!(source = api.name(), "Fetching flight list");
            api.list_flights().await
        })
    }

    /// Stream with one outcome holding the flight `id`.
    pub fn get_by_id(&self, id: &str) -> OutcomeStream<Flight> {
        let api = Arc::clone(&self.api);
        let id = id.to_string();
        OutcomeStream::new(async move {
            tracing::debug!(source = api.name(), id = %id, "Fetching flight");
            api.flight(&id).await
        })
    }
}
