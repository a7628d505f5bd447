use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::data::error::CatalogError;
use crate::domain::{Flight, FlightEndpoint, FlightStatus, ServiceClass};

/// Immutable, in-memory set of flights.
///
/// Built once (from the reference data or a JSON file) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    /// Create a catalog, keeping insertion order.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] if two flights share an id.
    pub fn new(flights: Vec<Flight>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(flights.len());
        for flight in &flights {
            if !seen.insert(flight.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: flight.id.clone(),
                });
            }
        }
        Ok(Self { flights })
    }

    /// Load a catalog from a JSON array of flights.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let flights: Vec<Flight> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let catalog = Self::new(flights)?;
        tracing::debug!(
            path = %path.display(),
            flights = catalog.len(),
            "Loaded flight catalog"
        );
        Ok(catalog)
    }

    /// Built-in demo data.
    pub fn reference() -> Self {
        Self {
            flights: reference_flights(),
        }
    }

    pub fn list_all(&self) -> &[Flight] {
        &self.flights
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

fn endpoint(
    code: &str,
    city: &str,
    country: &str,
    terminal: Option<&str>,
    scheduled_time: &str,
    estimated_time: Option<&str>,
) -> FlightEndpoint {
    FlightEndpoint {
        code: code.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        terminal: terminal.map(str::to_string),
        scheduled_time: scheduled_time.to_string(),
        estimated_time: estimated_time.map(str::to_string),
    }
}

fn reference_flights() -> Vec<Flight> {
    vec![
        Flight {
            id: "1".to_string(),
            flight_number: "FB101".to_string(),
            airline: "Flightboard Air".to_string(),
            aircraft: Some("Airbus A320".to_string()),
            gate: Some("B12".to_string()),
            origin: endpoint("JFK", "New York", "USA", Some("4"), "08:30", None),
            destination: endpoint("LAX", "Los Angeles", "USA", Some("6"), "11:45", None),
            status: FlightStatus::Scheduled,
            service_class: ServiceClass::Economy,
        },
        Flight {
            id: "2".to_string(),
            flight_number: "FB202".to_string(),
            airline: "Flightboard Air".to_string(),
            aircraft: Some("Boeing 787-9".to_string()),
            gate: Some("A3".to_string()),
            origin: endpoint("LHR", "London", "United Kingdom", Some("5"), "13:15", Some("13:50")),
            destination: endpoint("CDG", "Paris", "France", Some("2E"), "15:30", Some("16:05")),
            status: FlightStatus::Delayed,
            service_class: ServiceClass::Business,
        },
        Flight {
            id: "3".to_string(),
            flight_number: "FB303".to_string(),
            airline: "Pacific Connect".to_string(),
            aircraft: None,
            gate: None,
            origin: endpoint("NRT", "Tokyo", "Japan", None, "22:00", None),
            destination: endpoint("SYD", "Sydney", "Australia", Some("1"), "09:40", Some("09:25")),
            status: FlightStatus::Departed,
            service_class: ServiceClass::First,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_has_three_unique_flights() {
        let catalog = FlightCatalog::reference();
        assert_eq!(catalog.len(), 3);
        // Round-trip through the validating constructor.
        assert!(FlightCatalog::new(catalog.list_all().to_vec()).is_ok());
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let catalog = FlightCatalog::reference();
        let ids: Vec<&str> = catalog.list_all().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(catalog.list_all(), FlightCatalog::reference().list_all());
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let catalog = FlightCatalog::reference();
        assert_eq!(catalog.find_by_id("2").unwrap().flight_number, "FB202");
        assert!(catalog.find_by_id("999").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut flights = reference_flights();
        flights[2].id = "1".to_string();
        match FlightCatalog::new(flights) {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "1"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = FlightCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find_by_id("1").is_none());
    }
}
