//! Game state: players, whose turn it is, and the dice stream.
//!
//! `GameState` holds only data. Phase handling and timing live in
//! `turn::TurnController`, which is the only mutator.

use super::board::Board;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;

/// Complete game state outside the current phase.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Player records, in turn order.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Dice RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state with every player on its start point.
    #[must_use]
    pub fn new(board: &Board, seed: u64) -> Self {
        let mut state = Self {
            players: PlayerMap::new(board.player_count(), |id| Player::new(id, board.start(id))),
            active_player: PlayerId::new(0),
            rng: GameRng::new(seed),
        };
        state.reset();
        state
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    /// Mutable access to the player whose turn it is.
    pub fn active_mut(&mut self) -> &mut Player {
        let id = self.active_player;
        &mut self.players[id]
    }

    /// Everyone back to the start; player 0 to move, only their dice shown.
    pub fn reset(&mut self) {
        self.active_player = PlayerId::new(0);
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.show_active_dice();
    }

    /// Pass the turn to the next player and switch the dice display over.
    ///
    /// Returns the new active player.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.active_player = self.active_player.next(self.player_count());
        self.show_active_dice();
        self.active_player
    }

    fn show_active_dice(&mut self) {
        let active = self.active_player;
        for (id, player) in self.players.iter_mut() {
            player.dice_visible = id == active;
        }
    }
}
