//! Flight domain types.

mod flight;

pub use flight::{Flight, FlightEndpoint, FlightStatus, ServiceClass};
