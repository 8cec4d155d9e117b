//! Grid Games library - turn-based grid-game logic for the
//! tic-tac-toe family of variants.
//!
//! # Architecture
//!
//! - **Field**: sparse grid storage and coordinate validity
//! - **SymbolTable**: the player↔symbol bijection, both directions stored
//! - **WinConditions**: one stateless strategy per variant (classic,
//!   notakto, wild, pick15) for win detection and symbol eligibility
//! - **GridGameModel**: the turn-taking state machine; `place_symbol`
//!   is the only mutating entry point
//! - **View / Controller**: a minimal text read/print loop over the
//!   model's read-only surface
//!
//! # Example
//!
//! ```
//! use grid_games::{Cell, Feedback, GridGameModel, Symbol, Variant};
//!
//! let mut model = GridGameModel::new(
//!     3,
//!     vec![Symbol::token("X"), Symbol::token("O")],
//!     2,
//!     Variant::Tictactoe,
//! )?;
//! assert_eq!(
//!     model.place_symbol(Symbol::token("X"), Cell::new(1, 1)),
//!     Feedback::Valid,
//! );
//! assert_eq!(model.current_player(), 2);
//! # Ok::<(), grid_games::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod controller;
mod game;
mod view;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - session loop
pub use controller::Controller;
pub use view::View;

// Crate-level exports - rules engine
pub use game::win_conditions::{Notakto, Pick15, TicTacToe, Wild};
pub use game::{
    Cell, ConfigError, Feedback, Field, GridGameModel, PlayerId, Symbol, SymbolTable, Variant,
    WinConditions,
};
