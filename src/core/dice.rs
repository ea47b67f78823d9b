//! A pair of six-sided dice.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Two die faces as shown on a player's dice display.
///
/// A freshly reset display shows `0 0`; after a roll both faces lie in the
/// configured face range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePair {
    pub first: u8,
    pub second: u8,
}

impl DicePair {
    /// The idle display.
    pub const BLANK: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Roll both dice, each face uniform in `min..=max`.
    pub fn roll(rng: &mut GameRng, min: u8, max: u8) -> Self {
        Self::new(rng.roll_face(min, max), rng.roll_face(min, max))
    }

    /// Total movement value.
    #[must_use]
    pub const fn sum(self) -> usize {
        self.first as usize + self.second as usize
    }

    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.first == 0 && self.second == 0
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
