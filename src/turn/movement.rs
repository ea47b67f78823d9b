//! Movement engine: walk the active token along the path one hop at a time.
//!
//! ## Index semantics
//!
//! A player's `waypoint_index` names the next waypoint its token will hop
//! to. Each completed hop snaps the token onto that waypoint and increments
//! the index; the move arrives when the index equals the target.
//!
//! ## Wrap policy
//!
//! A target at or past the end of the path is pinned to 0 rather than
//! wrapped modulo the path length. The token then walks off the end of the
//! path, the index drops back to 0 with the target forced to 1, and the
//! token finishes on the first waypoint (index 1).

use glam::Vec3;
use log::{debug, warn};

use crate::core::{Board, Player};

/// Target index for a move of `sum` from `index`.
///
/// ```
/// use dice_race::turn::movement::plan_target;
///
/// assert_eq!(plan_target(3, 5, 10), 8);
/// assert_eq!(plan_target(8, 5, 10), 0);
/// assert_eq!(plan_target(5, 5, 10), 0);
/// assert_eq!(plan_target(3, usize::MAX, 10), 0);
/// ```
#[must_use]
pub fn plan_target(index: usize, sum: usize, path_len: usize) -> usize {
    let target = index.saturating_add(sum);
    if target >= path_len {
        0
    } else {
        target
    }
}

/// Seconds to cover `from -> to` at `speed`.
#[must_use]
pub fn hop_duration(from: Vec3, to: Vec3, speed: f32) -> f32 {
    from.distance(to) / speed
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + offset / distance * max_delta
    }
}

/// In-flight move of the active player.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveSequence {
    /// Index at which the move arrives.
    target: usize,
    /// Seconds left on the current hop.
    remaining: f32,
}

/// What a call to `MoveSequence::advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStep {
    /// Token moved part of the way; the time budget ran out mid-hop.
    Travelling,
    /// A hop finished and the next one started.
    Hopped,
    /// The final hop finished.
    Arrived,
}

impl MoveSequence {
    /// Plan a move of `sum` for `player` and start the first hop.
    pub fn begin(player: &mut Player, sum: usize, board: &Board, speed: f32) -> Self {
        let target = plan_target(player.waypoint_index, sum, board.path_len());
        debug!(
            "{} moves {} from index {} to target {}",
            player.id, sum, player.waypoint_index, target
        );
        let mut seq = Self { target, remaining: 0.0 };
        seq.start_hop(player, board, speed);
        seq
    }

    /// Spend up to `budget` seconds, finishing at most one hop.
    ///
    /// Unspent time is left in `budget` for the caller to carry forward,
    /// including a budget too small to shorten the current hop.
    pub fn advance(&mut self, player: &mut Player, board: &Board, speed: f32, budget: &mut f32) -> MoveStep {
        let Some(waypoint) = board.waypoint(player.waypoint_index) else {
            // start_hop keeps the index on the path
            self.start_hop(player, board, speed);
            return MoveStep::Hopped;
        };

        if *budget < self.remaining {
            let left = self.remaining - *budget;
            // Below the resolution of `remaining`: leave the time in `budget`.
            if left < self.remaining {
                player.position = move_towards(player.position, waypoint, speed * *budget);
                self.remaining = left;
                *budget = 0.0;
            }
            return MoveStep::Travelling;
        }
        *budget -= self.remaining;
        self.remaining = 0.0;

        player.position = waypoint;
        player.waypoint_index += 1;
        if player.waypoint_index == self.target {
            return MoveStep::Arrived;
        }
        self.start_hop(player, board, speed);
        MoveStep::Hopped
    }

    fn start_hop(&mut self, player: &mut Player, board: &Board, speed: f32) {
        if player.waypoint_index >= board.path_len() {
            if player.waypoint_index > board.path_len() {
                warn!(
                    "{} index {} is past the path end {}; restarting the lap",
                    player.id,
                    player.waypoint_index,
                    board.path_len()
                );
            }
            player.waypoint_index = 0;
            self.target = 1;
        }

        let waypoint = board.waypoint(player.waypoint_index).unwrap_or(player.position);
        self.remaining = hop_duration(player.position, waypoint, speed);
        debug!(
            "{} hop to waypoint {}: distance {:.3}, duration {:.3}s",
            player.id,
            player.waypoint_index,
            player.position.distance(waypoint),
            self.remaining
        );
    }

    /// Index at which the move arrives.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Seconds left on the current hop.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
