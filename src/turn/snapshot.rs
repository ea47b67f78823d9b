//! Read-only view of the game for hosts that redraw from state.
//!
//! Not a save format: there is no way to build a controller from one.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{DicePair, Player, PlayerId};

use super::phase::{PhaseKind, Status};

/// Whole-game view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: PhaseKind,
    pub active_player: PlayerId,
    /// 1-based number on the turn display.
    pub turn_number: u16,
    pub status: Option<Status>,
    pub players: Vec<PlayerSnapshot>,
}

/// One player's part of a `Snapshot`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub waypoint_index: usize,
    pub dice: DicePair,
    pub dice_visible: bool,
    pub position: Vec3,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            waypoint_index: player.waypoint_index,
            dice: player.dice,
            dice_visible: player.dice_visible,
            position: player.position,
        }
    }
}
