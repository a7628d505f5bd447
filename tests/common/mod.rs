//! Shared test fixtures and mock data sources.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flightboard::data::{DataError, FlightApi, FlightCatalog, MockFlightApi};
use flightboard::domain::{Flight, FlightEndpoint, FlightStatus, ServiceClass};
use flightboard::repository::FlightRepository;

pub fn endpoint(code: &str, city: &str, time: &str) -> FlightEndpoint {
    FlightEndpoint {
        code: code.to_string(),
        city: city.to_string(),
        country: "Testland".to_string(),
        terminal: None,
        scheduled_time: time.to_string(),
        estimated_time: None,
    }
}

pub fn flight(id: &str, flight_number: &str) -> Flight {
    Flight {
        id: id.to_string(),
        flight_number: flight_number.to_string(),
        airline: "Test Air".to_string(),
        aircraft: None,
        gate: None,
        origin: endpoint("AAA", "Alpha", "10:00"),
        destination: endpoint("BBB", "Bravo", "12:00"),
        status: FlightStatus::Scheduled,
        service_class: ServiceClass::Economy,
    }
}

/// Catalog with ids "1" and "2".
pub fn two_flight_catalog() -> FlightCatalog {
    FlightCatalog::new(vec![flight("1", "TEST101"), flight("2", "TEST202")])
        .expect("fixture ids are unique")
}

pub fn repository_for(catalog: FlightCatalog) -> FlightRepository {
    FlightRepository::new(Arc::new(MockFlightApi::new(catalog)))
}

pub fn slow_repository_for(catalog: FlightCatalog, latency: Duration) -> FlightRepository {
    FlightRepository::new(Arc::new(MockFlightApi::new(catalog).with_latency(latency)))
}

/// Source that can never produce data.
pub struct UnavailableApi;

#[async_trait]
impl FlightApi for UnavailableApi {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, DataError> {
        Err(DataError::unavailable("source offline"))
    }

    async fn flight(&self, _id: &str) -> Result<Flight, DataError> {
        Err(DataError::unavailable("source offline"))
    }
}

/// Wraps another source and counts calls.
pub struct CountingApi<A> {
    inner: A,
    calls: Arc<AtomicUsize>,
}

impl<A> CountingApi<A> {
    pub fn new(inner: A) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl<A: FlightApi> FlightApi for CountingApi<A> {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_flights().await
    }

    async fn flight(&self, id: &str) -> Result<Flight, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.flight(id).await
    }
}
