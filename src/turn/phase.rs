//! Phase tag, status text, and command outcomes.

use serde::{Deserialize, Serialize};

use super::movement::MoveSequence;
use super::roll::RollSequence;

/// What the controller is doing right now.
///
/// Anything other than `Idle` means a cycle is in flight and commands are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Rolling(RollSequence),
    Moving(MoveSequence),
}

impl Phase {
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Rolling(_) => PhaseKind::Rolling,
            Phase::Moving(_) => PhaseKind::Moving,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}

/// `Phase` without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Idle,
    Rolling,
    Moving,
}

/// Status line shown at each phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    ResetStarted,
    ResetFinished,
    RollStarted,
    RollFinished,
    MoveStarted,
    MoveFinished,
}

impl Status {
    /// Display text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Status::ResetStarted => "Start Reset Game",
            Status::ResetFinished => "Finish Reset Game",
            Status::RollStarted => "Start Roll Dice",
            Status::RollFinished => "Finish Roll Dice",
            Status::MoveStarted => "Start Move Character",
            Status::MoveFinished => "Finish Move Character",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Result of a `reset()`, `roll()` or `move_character()` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran (or started a cycle).
    Accepted,
    /// A cycle was already in flight; nothing changed.
    Ignored,
}

impl CommandOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == CommandOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::ResetStarted.to_string(), "Start Reset Game");
        assert_eq!(Status::ResetFinished.to_string(), "Finish Reset Game");
        assert_eq!(Status::RollStarted.to_string(), "Start Roll Dice");
        assert_eq!(Status::RollFinished.to_string(), "Finish Roll Dice");
        assert_eq!(Status::MoveStarted.to_string(), "Start Move Character");
        assert_eq!(Status::MoveFinished.to_string(), "Finish Move Character");
    }

    #[test]
    fn test_default_phase_is_idle() {
        let phase = Phase::default();
        assert!(phase.is_idle());
        assert_eq!(phase.kind(), PhaseKind::Idle);
    }
}
