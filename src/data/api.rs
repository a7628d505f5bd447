//! Data access interface and its in-memory implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::data::catalog::FlightCatalog;
use crate::data::error::DataError;
use crate::domain::Flight;

/// Read-only source of flights.
///
/// Both calls may suspend. Implementations report failures as
/// [`DataError`] values; the repository turns them into outcomes.
#[async_trait]
pub trait FlightApi: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch every flight, in source order.
    ///
    /// # Errors
    /// [`DataError::Unavailable`] when the source cannot produce data.
    async fn list_flights(&self) -> Result<Vec<Flight>, DataError>;

    /// Fetch a single flight.
    ///
    /// # Errors
    /// [`DataError::NotFound`] when no flight has this id.
    async fn flight(&self, id: &str) -> Result<Flight, DataError>;
}

/// [`FlightApi`] backed by a [`FlightCatalog`].
///
/// An optional latency simulates a remote round-trip; it is the only
/// point where calls suspend.
#[derive(Debug, Clone)]
pub struct MockFlightApi {
    catalog: Arc<FlightCatalog>,
    latency: Duration,
}

impl MockFlightApi {
    pub fn new(catalog: FlightCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockFlightApi {
    fn default() -> Self {
        Self::new(FlightCatalog::reference())
    }
}

#[async_trait]
impl FlightApi for MockFlightApi {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, DataError> {
        self.simulate_latency().await;
        Ok(self.catalog.list_all().to_vec())
    }

    async fn flight(&self, id: &str) -> Result<Flight, DataError> {
        self.simulate_latency().await;
        self.catalog
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DataError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_flights_returns_catalog() {
        let api = MockFlightApi::default();
        let flights = api.list_flights().await.unwrap();
        assert_eq!(flights.len(), 3);
        assert_eq!(flights, api.catalog().list_all());
    }

    #[tokio::test]
    async fn flight_by_id() {
        let api = MockFlightApi::default();
        let flight = api.flight("3").await.unwrap();
        assert_eq!(flight.id, "3");
    }

    #[tokio::test]
    async fn missing_flight_is_not_found() {
        let api = MockFlightApi::default();
        let err = api.flight("999").await.unwrap_err();
        assert_eq!(err, DataError::not_found("999"));
        assert_eq!(err.to_string(), "Flight not found");
    }

    #[tokio::test(start_paused = true)]
    async fn latency_delays_response() {
        let api = MockFlightApi::default().with_latency(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        api.list_flights().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
