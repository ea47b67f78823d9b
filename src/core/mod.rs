//! Core game types: players, dice, board, RNG, configuration, state.
//!
//! Nothing in here knows about phases or timing. The `turn` module drives
//! these types through a roll-and-move cycle.

pub mod player;
pub mod dice;
pub mod board;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use dice::DicePair;
pub use board::{Board, BoardError};
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig};
pub use state::GameState;
