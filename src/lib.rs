//! # dice-race
//!
//! Turn and movement controller for a dice-driven race board game
//! (Ludo/Parcheesi style).
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No scene graph, widgets or frame loop. The host
//!    sends commands (`reset`, `roll`), drives a clock (`tick`), and renders
//!    the `RenderEvent`s the controller emits.
//!
//! 2. **Explicit Phases**: A single-owner state machine
//!    (`Idle | Rolling | Moving`) replaces timed coroutines and a busy flag.
//!    Only one roll-or-move cycle can be in flight.
//!
//! 3. **Deterministic**: Dice come from a seeded ChaCha8 stream, and phase
//!    timing depends only on total elapsed clock time.
//!
//! ## Modules
//!
//! - `core`: Players, dice, board, RNG, configuration, game state
//! - `turn`: Roll sequence, movement engine, events, the turn controller

pub mod core;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, ConfigError, DicePair, GameConfig, GameRng, GameState, Player, PlayerId,
    PlayerMap,
};

pub use crate::turn::{
    CommandOutcome, LogPresenter, MoveSequence, Phase, PhaseKind, PlayerSnapshot, Presenter,
    RenderEvent, RollSequence, SetupError, Snapshot, Status, TurnController,
};

pub use glam::Vec3;
