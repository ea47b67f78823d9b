//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! Everything the game tracks about one player: waypoint index, dice,
//! dice visibility and token position. Rendering is keyed by `PlayerId`,
//! never by parallel array position.
//!
//! ## PlayerMap
//!
//! Ordered per-player storage backed by `Vec` for O(1) access.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::dice::DicePair;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based number shown on the turn display.
    #[must_use]
    pub const fn turn_number(self) -> u16 {
        self.0 as u16 + 1
    }

    /// The player after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use dice_race::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        let next = (self.index() + 1) % player_count.max(1);
        Self(next as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use dice_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.turn_number())
    }
}

/// One player's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Who this is.
    pub id: PlayerId,

    /// Index of the next waypoint to visit; always `< path length`
    /// between controller calls.
    pub waypoint_index: usize,

    /// Faces currently on this player's dice display.
    pub dice: DicePair,

    /// Whether this player's dice display is shown.
    pub dice_visible: bool,

    /// Visual token position, interpolated while moving.
    pub position: Vec3,

    /// Where the token sits after a reset.
    pub start: Vec3,
}

impl Player {
    /// Create a player standing on its start point.
    #[must_use]
    pub fn new(id: PlayerId, start: Vec3) -> Self {
        Self {
            id,
            waypoint_index: 0,
            dice: DicePair::BLANK,
            dice_visible: false,
            position: start,
            start,
        }
    }

    /// Put the player back on its start point with blank dice.
    pub fn reset(&mut self) {
        self.waypoint_index = 0;
        self.dice = DicePair::BLANK;
        self.position = self.start;
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player, built from a factory.
///
/// ## Example
///
/// ```
/// use dice_race::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// laps[PlayerId::new(1)] = 2;
/// assert_eq!(laps[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
