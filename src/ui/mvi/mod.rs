//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Repository ──→ Intent ──→ Reducer ──→ State ──→ Screen
//!                   ↑                               │
//!                   └────────── load / refresh ─────┘
//! ```
//!
//! - **State**: immutable snapshot a screen renders from
//! - **Intent**: load requests and repository outcomes
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
