use std::fmt;

use serde::{Deserialize, Serialize};

/// A single flight as shown on the list and detail screens.
///
/// Flights are immutable values: an "update" replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Unique identifier within a catalog.
    pub id: String,
    /// Marketing flight number (e.g., "FB101").
    pub flight_number: String,
    /// Operating airline display name.
    pub airline: String,
    /// Aircraft type, if assigned.
    #[serde(default)]
    pub aircraft: Option<String>,
    /// Departure gate, if assigned.
    #[serde(default)]
    pub gate: Option<String>,
    pub origin: FlightEndpoint,
    pub destination: FlightEndpoint,
    pub status: FlightStatus,
    pub service_class: ServiceClass,
}

/// One end of a flight (departure or arrival).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    /// IATA airport code (e.g., "JFK").
    pub code: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub terminal: Option<String>,
    /// Scheduled local time, `HH:MM`.
    pub scheduled_time: String,
    /// Estimated local time when it differs from the schedule.
    #[serde(default)]
    pub estimated_time: Option<String>,
}

impl FlightEndpoint {
    /// Best known time: the estimate if present, otherwise the schedule.
    pub fn expected_time(&self) -> &str {
        self.estimated_time
            .as_deref()
            .unwrap_or(&self.scheduled_time)
    }
}

/// Progress of a flight. No transition order is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    Delayed,
    Landed,
}

impl FlightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Landed => "Landed",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cabin / service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceClass {
    Economy,
    Business,
    First,
}

impl ServiceClass {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceClass::Economy => "Economy",
            ServiceClass::Business => "Business",
            ServiceClass::First => "First",
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
