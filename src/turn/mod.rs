//! Turn cycle: roll, move, pass the turn.
//!
//! `TurnController` owns the game and advances it through explicit phases:
//!
//! ```text
//! Idle --roll()--> Rolling --(last die pair)--> Moving --(arrival)--> Idle
//! ```
//!
//! Time only passes through `TurnController::tick`. Commands issued while a
//! cycle is in flight are ignored, and `reset()` never cancels a cycle.

pub mod phase;
pub mod roll;
pub mod movement;
pub mod events;
pub mod snapshot;
pub mod controller;

pub use phase::{CommandOutcome, Phase, PhaseKind, Status};
pub use roll::{RollSequence, RollStep};
pub use movement::{MoveSequence, MoveStep};
pub use events::{LogPresenter, Presenter, RenderEvent};
pub use snapshot::{PlayerSnapshot, Snapshot};
pub use controller::{SetupError, TurnController};
