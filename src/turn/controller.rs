//! The turn controller: commands in, clock ticks, render events out.

use log::{debug, info};
use thiserror::Error;

use crate::core::{Board, BoardError, ConfigError, DicePair, GameConfig, GameState, Player, PlayerId, PlayerMap};

use super::events::{Presenter, RenderEvent};
use super::movement::{MoveSequence, MoveStep};
use super::phase::{CommandOutcome, Phase, Status};
use super::roll::{RollSequence, RollStep};
use super::snapshot::{PlayerSnapshot, Snapshot};

/// Errors building a `TurnController`.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Single owner of a game.
///
/// ## Usage
///
/// ```
/// use dice_race::{Board, GameConfig, TurnController, PlayerId};
///
/// let board = Board::ring(12, 10.0, 2).unwrap();
/// let mut game = TurnController::new(GameConfig::default(), board).unwrap();
///
/// assert!(game.roll().is_accepted());
/// assert!(!game.reset().is_accepted()); // busy
///
/// game.run_until_idle(1.0 / 60.0, 100_000).unwrap();
/// assert_eq!(game.active_player(), PlayerId::new(1));
/// ```
#[derive(Clone, Debug)]
pub struct TurnController {
    config: GameConfig,
    board: Board,
    state: GameState,
    phase: Phase,
    status: Option<Status>,
    events: Vec<RenderEvent>,
    /// Tick time too small to shorten the current step yet.
    carry: f32,
}

impl TurnController {
    /// Validate the setup and start a fresh game.
    ///
    /// The initial reset's events are buffered like any other.
    pub fn new(config: GameConfig, board: Board) -> Result<Self, SetupError> {
        config.validate()?;
        let state = GameState::new(&board, config.seed);
        let mut controller = Self {
            config,
            board,
            state,
            phase: Phase::Idle,
            status: None,
            events: Vec::new(),
            carry: 0.0,
        };
        controller.reset();
        Ok(controller)
    }

    // === Commands ===

    /// Put every token back on its start point and give player 1 the turn.
    ///
    /// Ignored while a roll or move is in flight.
    pub fn reset(&mut self) -> CommandOutcome {
        if self.is_busy() {
            debug!("reset ignored: {:?} in progress", self.phase.kind());
            return CommandOutcome::Ignored;
        }
        self.set_status(Status::ResetStarted);

        self.state.reset();
        self.emit_turn();
        for id in PlayerId::all(self.player_count()) {
            self.emit_dice(id);
        }
        self.emit_dice_visibility();
        for id in PlayerId::all(self.player_count()) {
            self.emit_token(id);
        }

        self.set_status(Status::ResetFinished);
        info!("game reset: {} players, path length {}", self.player_count(), self.board.path_len());
        CommandOutcome::Accepted
    }

    /// Roll the dice for the active player.
    ///
    /// The first pair shows immediately; the rest of the roll and the
    /// following move play out through `tick`. Ignored while busy.
    pub fn roll(&mut self) -> CommandOutcome {
        if self.is_busy() {
            debug!("roll ignored: {:?} in progress", self.phase.kind());
            return CommandOutcome::Ignored;
        }
        self.set_status(Status::RollStarted);

        let seq = RollSequence::start(&mut self.state.rng, &self.config);
        self.show_dice(seq.faces());
        self.phase = Phase::Rolling(seq);
        CommandOutcome::Accepted
    }

    /// Move the active player by `sum` without rolling.
    ///
    /// Same movement and turn hand-off as the end of a roll. Ignored while busy.
    pub fn move_character(&mut self, sum: usize) -> CommandOutcome {
        if self.is_busy() {
            debug!("move ignored: {:?} in progress", self.phase.kind());
            return CommandOutcome::Ignored;
        }
        self.begin_move(sum);
        CommandOutcome::Accepted
    }

    // === Clock ===

    /// Advance the in-flight cycle by `dt` seconds.
    ///
    /// Time left over at a step boundary carries into the next step, so
    /// results depend on total elapsed time rather than frame size. A `dt`
    /// below the resolution of the current wait is held over and added to
    /// the next tick until the sum registers.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let mut budget = self.carry + dt;
        let active = self.state.active_player;

        loop {
            match std::mem::take(&mut self.phase) {
                Phase::Idle => break,
                Phase::Rolling(mut seq) => {
                    match seq.advance(&mut budget, &mut self.state.rng, &self.config) {
                        RollStep::Waiting => {
                            self.phase = Phase::Rolling(seq);
                            break;
                        }
                        RollStep::Rolled(dice) => {
                            self.show_dice(dice);
                            self.phase = Phase::Rolling(seq);
                        }
                        RollStep::Finished(dice) => self.finish_roll(dice),
                    }
                }
                Phase::Moving(mut seq) => {
                    let before = self.state.players[active].position;
                    let step = seq.advance(
                        &mut self.state.players[active],
                        &self.board,
                        self.config.move_speed,
                        &mut budget,
                    );
                    if self.state.players[active].position != before {
                        self.emit_token(active);
                    }
                    match step {
                        MoveStep::Travelling => {
                            self.phase = Phase::Moving(seq);
                            break;
                        }
                        MoveStep::Hopped => self.phase = Phase::Moving(seq),
                        MoveStep::Arrived => self.finish_move(),
                    }
                }
            }
        }
        self.carry = if self.is_busy() { budget } else { 0.0 };
    }

    /// Tick with a fixed `dt` until the cycle completes.
    ///
    /// Returns the number of ticks used, or `None` if still busy after
    /// `max_ticks`.
    pub fn run_until_idle(&mut self, dt: f32, max_ticks: usize) -> Option<usize> {
        for ticks in 0..=max_ticks {
            if !self.is_busy() {
                return Some(ticks);
            }
            if ticks < max_ticks {
                self.tick(dt);
            }
        }
        None
    }

    // === Events ===

    /// Take every buffered render event, oldest first.
    pub fn drain_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand every buffered render event to `presenter`, oldest first.
    pub fn flush_to<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for event in self.events.drain(..) {
            presenter.present(&event);
        }
    }

    // === Queries ===

    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.phase.is_idle()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.active_player
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.state.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.state.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase.kind(),
            active_player: self.state.active_player,
            turn_number: self.state.active_player.turn_number(),
            status: self.status,
            players: self.state.players.values().map(PlayerSnapshot::from).collect(),
        }
    }

    // === Transitions ===

    fn finish_roll(&mut self, dice: DicePair) {
        self.set_status(Status::RollFinished);
        info!("{} rolled {} (total {})", self.state.active_player, dice, dice.sum());
        self.begin_move(dice.sum());
    }

    fn begin_move(&mut self, sum: usize) {
        self.set_status(Status::MoveStarted);
        let seq = MoveSequence::begin(self.state.active_mut(), sum, &self.board, self.config.move_speed);
        self.phase = Phase::Moving(seq);
    }

    fn finish_move(&mut self) {
        self.set_status(Status::MoveFinished);
        let arrived = self.state.active();
        info!("{} arrived at index {}", arrived.id, arrived.waypoint_index);

        self.state.advance_turn();
        self.emit_dice_visibility();
        self.emit_turn();
        self.phase = Phase::Idle;
    }

    fn show_dice(&mut self, dice: DicePair) {
        let active = self.state.active_player;
        self.state.players[active].dice = dice;
        self.emit_dice(active);
    }

    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
        self.events.push(RenderEvent::StatusChanged(status));
    }

    fn emit_turn(&mut self) {
        let number = self.state.active_player.turn_number();
        self.events.push(RenderEvent::TurnChanged { number });
    }

    fn emit_dice(&mut self, player: PlayerId) {
        let dice = self.state.players[player].dice;
        self.events.push(RenderEvent::DiceChanged { player, dice });
    }

    fn emit_dice_visibility(&mut self) {
        for (player, p) in self.state.players.iter() {
            self.events.push(RenderEvent::DiceVisibility {
                player,
                visible: p.dice_visible,
            });
        }
    }

    fn emit_token(&mut self, player: PlayerId) {
        let position = self.state.players[player].position;
        self.events.push(RenderEvent::TokenMoved { player, position });
    }
}
