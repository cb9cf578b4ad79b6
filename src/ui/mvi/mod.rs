//! Model-View-Intent primitives shared by stateful UI pieces.
//!
//! ```text
//! event ──→ Intent ──→ Reducer ──→ State ──→ View
//!   ↑                                          │
//!   └──────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
