//! Game variant selection.

use crate::game::win_conditions::{Notakto, Pick15, TicTacToe, WinConditions, Wild};
use serde::{Deserialize, Serialize};

/// The four supported rule sets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Classic: each player owns one symbol, first full line wins.
    Tictactoe,
    /// One shared symbol for all players; completing a line ends the game.
    Notakto,
    /// Any player may place any player's symbol; the line's owner wins.
    Wild,
    /// Numeric symbols 1..N²; a full line wins when it sums to N·(N²+1)/2.
    Pick15,
}

impl Variant {
    /// Selects the win-condition strategy for this variant.
    ///
    /// Called once at session construction; per-turn logic goes through
    /// the returned strategy and never branches on the variant name.
    pub fn win_conditions(self) -> Box<dyn WinConditions> {
        match self {
            Variant::Tictactoe => Box::new(TicTacToe),
            Variant::Notakto => Box::new(Notakto),
            Variant::Wild => Box::new(Wild),
            Variant::Pick15 => Box::new(Pick15),
        }
    }
}
