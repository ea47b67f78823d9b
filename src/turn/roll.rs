//! The dice roll sequence.
//!
//! A roll shows `roll_count` random die pairs, one every `roll_delay`
//! seconds, for effect. Only the last pair counts. The first pair appears
//! the moment the roll starts; the roll finishes one delay after the last.

use log::trace;

use crate::core::{DicePair, GameConfig, GameRng};

/// In-flight roll.
#[derive(Clone, Debug, PartialEq)]
pub struct RollSequence {
    /// Pairs shown so far, including the current one.
    shown: u32,
    /// Seconds left before the next pair (or the finish).
    wait: f32,
    /// Pair currently on display.
    faces: DicePair,
}

/// What a call to `RollSequence::advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollStep {
    /// The time budget ran out before the next pair.
    Waiting,
    /// A new pair is on display.
    Rolled(DicePair),
    /// The last wait elapsed; this is the pair that counts.
    Finished(DicePair),
}

impl RollSequence {
    /// Start a roll, showing the first pair immediately.
    pub fn start(rng: &mut GameRng, config: &GameConfig) -> Self {
        let faces = DicePair::roll(rng, config.min_face, config.max_face);
        trace!("roll 1/{}: {}", config.roll_count, faces);
        Self {
            shown: 1,
            wait: config.roll_delay,
            faces,
        }
    }

    /// Spend up to `budget` seconds, crossing at most one step boundary.
    ///
    /// Unspent time is left in `budget` for the caller to carry forward,
    /// including a budget too small to shorten the current wait.
    pub fn advance(&mut self, budget: &mut f32, rng: &mut GameRng, config: &GameConfig) -> RollStep {
        if *budget < self.wait {
            let left = self.wait - *budget;
            // Below the resolution of `wait`: leave the time in `budget`.
            if left < self.wait {
                self.wait = left;
                *budget = 0.0;
            }
            return RollStep::Waiting;
        }
        *budget -= self.wait;

        if self.shown >= config.roll_count {
            return RollStep::Finished(self.faces);
        }

        self.shown += 1;
        self.faces = DicePair::roll(rng, config.min_face, config.max_face);
        self.wait = config.roll_delay;
        trace!("roll {}/{}: {}", self.shown, config.roll_count, self.faces);
        RollStep::Rolled(self.faces)
    }

    /// Pair currently on display.
    #[must_use]
    pub fn faces(&self) -> DicePair {
        self.faces
    }

    /// Pairs shown so far.
    #[must_use]
    pub fn shown(&self) -> u32 {
        self.shown
    }

    /// Seconds left before the next pair (or the finish).
    #[must_use]
    pub fn wait(&self) -> f32 {
        self.wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_finish(config: &GameConfig, dt: f32) -> (Vec<DicePair>, DicePair) {
        let mut rng = GameRng::new(config.seed);
        let mut seq = RollSequence::start(&mut rng, config);
        let mut shown = vec![seq.faces()];

        for _ in 0..10_000 {
            let mut budget = dt;
            loop {
                match seq.advance(&mut budget, &mut rng, config) {
                    RollStep::Waiting => break,
                    RollStep::Rolled(pair) => shown.push(pair),
                    RollStep::Finished(pair) => return (shown, pair),
                }
            }
        }
        panic!("roll never finished");
    }

    #[test]
    fn test_shows_roll_count_pairs() {
        let config = GameConfig::default();
        let (shown, last) = run_to_finish(&config, 0.075);

        assert_eq!(shown.len(), 20);
        assert_eq!(*shown.last().unwrap(), last);
        for pair in &shown {
            assert!((1..=6).contains(&pair.first));
            assert!((1..=6).contains(&pair.second));
        }
    }

    #[test]
    fn test_single_big_tick_finishes() {
        let config = GameConfig::default().with_roll_count(4).with_roll_delay(0.25);
        let (shown, _) = run_to_finish(&config, 10.0);
        assert_eq!(shown.len(), 4);
    }

    #[test]
    fn test_waits_full_delay_after_last_pair() {
        let config = GameConfig::default().with_roll_count(1).with_roll_delay(0.5);
        let mut rng = GameRng::new(1);
        let mut seq = RollSequence::start(&mut rng, &config);

        let mut budget = 0.4;
        assert_eq!(seq.advance(&mut budget, &mut rng, &config), RollStep::Waiting);
        assert_eq!(budget, 0.0);

        let mut budget = 0.3;
        assert_eq!(seq.advance(&mut budget, &mut rng, &config), RollStep::Finished(seq.faces()));
        assert!((budget - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_tiny_budget_is_kept() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(1);
        let mut seq = RollSequence::start(&mut rng, &config);

        let mut budget = 1e-9;
        assert_eq!(seq.advance(&mut budget, &mut rng, &config), RollStep::Waiting);
        assert_eq!(budget, 1e-9);
        assert_eq!(seq.wait(), config.roll_delay);
    }

    #[test]
    fn test_frame_rate_independent() {
        let config = GameConfig::default().with_seed(5);
        let (coarse, a) = run_to_finish(&config, 0.3);
        let (fine, b) = run_to_finish(&config, 0.01);
        assert_eq!(coarse, fine);
        assert_eq!(a, b);
    }
}
