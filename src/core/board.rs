//! Board layout: the shared waypoint path and per-player start points.
//!
//! The path is cyclic; every player walks the same waypoints in order.
//! Start points are where tokens wait after a reset, before their first hop.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Board construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("board needs at least one player start point")]
    NoPlayers,
    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),
    #[error("board needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),
    #[error("{what} {index} has a non-finite coordinate")]
    NonFinite { what: &'static str, index: usize },
}

/// Waypoint path plus one start point per player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    waypoints: Vec<Vec3>,
    starts: Vec<Vec3>,
}

impl Board {
    /// Build a board. The number of start points fixes the player count.
    pub fn new(waypoints: Vec<Vec3>, starts: Vec<Vec3>) -> Result<Self, BoardError> {
        if starts.is_empty() {
            return Err(BoardError::NoPlayers);
        }
        if starts.len() > 255 {
            return Err(BoardError::TooManyPlayers(starts.len()));
        }
        // A one-waypoint loop would leave the token on index 1 after a lap.
        if waypoints.len() < 2 {
            return Err(BoardError::TooFewWaypoints(waypoints.len()));
        }
        if let Some(index) = waypoints.iter().position(|w| !w.is_finite()) {
            return Err(BoardError::NonFinite { what: "waypoint", index });
        }
        if let Some(index) = starts.iter().position(|s| !s.is_finite()) {
            return Err(BoardError::NonFinite { what: "start point", index });
        }
        Ok(Self { waypoints, starts })
    }

    /// A circular track on the XZ plane.
    ///
    /// Waypoints sit evenly on a circle of `radius`, starting on +X and
    /// running counter-clockwise; start points sit on a circle half again as
    /// wide, spread evenly between players.
    pub fn ring(waypoint_count: usize, radius: f32, player_count: usize) -> Result<Self, BoardError> {
        let on_circle = |i: usize, n: usize, r: f32| {
            let angle = std::f32::consts::TAU * i as f32 / n as f32;
            Vec3::new(r * angle.cos(), 0.0, r * angle.sin())
        };
        let waypoints = (0..waypoint_count)
            .map(|i| on_circle(i, waypoint_count, radius))
            .collect();
        let starts = (0..player_count)
            .map(|i| on_circle(i, player_count, radius * 1.5))
            .collect();
        Self::new(waypoints, starts)
    }

    /// Path length `L`.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of players the board seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.starts.len()
    }

    /// Position of waypoint `index`; `None` past the end of the path.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Start point of `player`.
    #[must_use]
    pub fn start(&self, player: PlayerId) -> Vec3 {
        self.starts[player.index()]
    }
}
