//! Command-line interface for grid_games.

use crate::game::Variant;
use clap::Parser;

/// Grid Games - tic-tac-toe family variants on an N×N grid
#[derive(Parser, Debug)]
#[command(name = "grid_games")]
#[command(about = "Turn-based grid games for two or more players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid size N
    #[arg(short = 'n', long = "size", default_value_t = 3)]
    pub size: i32,

    /// Number of players
    #[arg(short = 'p', long = "players", default_value_t = 2)]
    pub player_count: u32,

    /// Rule set to play
    #[arg(long, value_enum)]
    pub variant: Variant,

    /// Player symbols, comma-separated: one per player for tictactoe
    /// and wild, exactly one for notakto, none for pick15
    #[arg(short = 's', long, value_delimiter = ',')]
    pub symbols: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["grid_games", "--variant", "tictactoe", "-s", "X,O"]);
        assert_eq!(cli.size, 3);
        assert_eq!(cli.player_count, 2);
        assert_eq!(cli.variant, Variant::Tictactoe);
        assert_eq!(cli.symbols, vec!["X".to_string(), "O".to_string()]);
    }

    #[test]
    fn test_pick15_takes_no_symbols() {
        let cli = Cli::parse_from(["grid_games", "--variant", "pick15", "-n", "4", "-p", "3"]);
        assert_eq!(cli.size, 4);
        assert_eq!(cli.player_count, 3);
        assert!(cli.symbols.is_empty());
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Cli::try_parse_from(["grid_games", "--variant", "chess"]).is_err());
    }
}
