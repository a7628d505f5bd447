mod intent;
mod reducer;
mod state;

pub use intent::LoadIntent;
pub use reducer::ScreenReducer;
pub use state::{FlightDetailState, FlightListState, ScreenState};
