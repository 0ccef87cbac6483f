//! Session state machine for the vault tour.
//!
//! ```text
//! front end ──Action──▶ SessionController ──reduce()──▶ Transition { state, effects }
//!                              │                                        │
//!                              ◀──────────── commit state ──────────────┘
//!                              └──── execute effects ──▶ KeyValueStore (best-effort)
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: `SessionState`, `Action`, `Effect`, `Transition`
//! - [`reducer`]: the pure transition function
//! - [`controller`]: owns one session, hydrates it, executes effects

mod controller;
mod reducer;
mod types;

pub use controller::{has_visited_before, hydrate, SessionController};
pub use reducer::reduce;
pub use types::{Action, Effect, SessionState, Transition};
