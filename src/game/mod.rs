//! Core rules engine: grid state, symbol bookkeeping, win conditions,
//! and the turn-taking model.

mod error;
mod field;
mod model;
mod symbol;
mod variant;
pub mod win_conditions;

pub use error::ConfigError;
pub use field::{Cell, Field};
pub use model::{Feedback, GridGameModel};
pub use symbol::{PlayerId, Symbol, SymbolTable};
pub use variant::Variant;
pub use win_conditions::WinConditions;
