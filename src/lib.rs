//! Flight information data layer.
//!
//! Data flows one way: [`data::FlightApi`] → [`repository::FlightRepository`]
//! → [`ui::StateContainer`] → screen. Each screen observes a
//! [`ui::ScreenState`] that is `Loading`, `Success` or `Error`.

pub mod config;
pub mod data;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod ui;
