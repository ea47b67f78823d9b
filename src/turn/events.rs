//! Render events: what the host's presentation layer needs to redraw.
//!
//! The controller buffers events in the order things happen. Hosts either
//! drain them (`TurnController::drain_events`) or hand a `Presenter` to
//! `TurnController::flush_to`.

use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{DicePair, PlayerId};

use super::phase::Status;

/// One presentation update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// A player's dice display shows new faces.
    DiceChanged { player: PlayerId, dice: DicePair },
    /// A player's dice display was shown or hidden.
    DiceVisibility { player: PlayerId, visible: bool },
    /// Active player number (1-based).
    TurnChanged { number: u16 },
    /// Status line text.
    StatusChanged(Status),
    /// A token's visual position.
    TokenMoved { player: PlayerId, position: Vec3 },
}

/// Presentation layer driven by render events.
///
/// Implement the per-event methods; `present` dispatches.
pub trait Presenter {
    fn dice_changed(&mut self, player: PlayerId, dice: DicePair);

    fn dice_visibility(&mut self, player: PlayerId, visible: bool);

    fn turn_changed(&mut self, number: u16);

    fn status_changed(&mut self, status: Status);

    fn token_moved(&mut self, player: PlayerId, position: Vec3);

    fn present(&mut self, event: &RenderEvent) {
        match *event {
            RenderEvent::DiceChanged { player, dice } => self.dice_changed(player, dice),
            RenderEvent::DiceVisibility { player, visible } => self.dice_visibility(player, visible),
            RenderEvent::TurnChanged { number } => self.turn_changed(number),
            RenderEvent::StatusChanged(status) => self.status_changed(status),
            RenderEvent::TokenMoved { player, position } => self.token_moved(player, position),
        }
    }
}

/// Headless presenter that writes every event to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn dice_changed(&mut self, player: PlayerId, dice: DicePair) {
        debug!("{player} dice: {dice}");
    }

    fn dice_visibility(&mut self, player: PlayerId, visible: bool) {
        debug!("{player} dice {}", if visible { "shown" } else { "hidden" });
    }

    fn turn_changed(&mut self, number: u16) {
        info!("turn: player {number}");
    }

    fn status_changed(&mut self, status: Status) {
        info!("status: {status}");
    }

    fn token_moved(&mut self, player: PlayerId, position: Vec3) {
        debug!("{player} token at ({:.2}, {:.2}, {:.2})", position.x, position.y, position.z);
    }
}
