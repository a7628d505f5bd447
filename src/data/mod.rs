//! Flight data sources.
//!
//! [`FlightApi`] is the boundary between the state layer and whatever
//! produces flights. [`MockFlightApi`] serves an in-memory [`FlightCatalog`];
//! a networked source would be another implementation of the same trait.

mod api;
mod catalog;
mod error;

pub use api::{FlightApi, MockFlightApi};
pub use catalog::FlightCatalog;
pub use error::{CatalogError, DataError};
