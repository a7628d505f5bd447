//! Screen-side state management: MVI primitives, the per-screen state
//! container, the list/detail view-models and their entry contracts.

pub mod flight_detail;
pub mod flight_list;
pub mod load;
pub mod mvi;
pub mod scope;
pub mod screens;
pub mod view_model;

pub use flight_detail::FlightDetailViewModel;
pub use flight_list::FlightListViewModel;
pub use load::{FlightDetailState, FlightListState, ScreenState};
pub use scope::ScreenScope;
pub use screens::{FlightDetailScreen, FlightListScreen};
pub use view_model::{StateContainer, StateObserver};
