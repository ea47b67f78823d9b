//! Property tests over random seeds, board sizes and frame rates.

use proptest::prelude::*;

use dice_race::turn::movement::plan_target;
use dice_race::{Board, GameConfig, PlayerId, TurnController};

fn frame() -> impl Strategy<Value = f32> {
    prop_oneof![Just(1.0f32 / 60.0), Just(1.0f32 / 30.0), Just(0.1f32), Just(0.75f32)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Indices stay on the path and the turn advances once per cycle.
    #[test]
    fn prop_cycle_invariants(
        seed in any::<u64>(),
        players in 1usize..6,
        path_len in 2usize..30,
        dt in frame(),
        cycles in 1usize..8,
    ) {
        let config = GameConfig::default().with_seed(seed).with_roll_count(4);
        let board = Board::ring(path_len, 10.0, players).unwrap();
        let mut game = TurnController::new(config, board).unwrap();

        for cycle in 0..cycles {
            let mover = game.active_player();
            prop_assert_eq!(mover, PlayerId::new((cycle % players) as u8));
            prop_assert!(game.roll().is_accepted());

            let mut ticks = 0;
            while game.is_busy() {
                game.tick(dt);
                ticks += 1;
                prop_assert!(ticks < 1_000_000);
                prop_assert_eq!(game.active_player(), mover);
                for player in game.players().values() {
                    prop_assert!(player.waypoint_index < path_len);
                }
            }

            prop_assert_eq!(game.active_player(), mover.next(players));
            let dice = game.player(mover).dice;
            prop_assert!((1..=6).contains(&dice.first));
            prop_assert!((1..=6).contains(&dice.second));
        }
    }

    /// Reset always returns to the initial layout.
    #[test]
    fn prop_reset_after_play(seed in any::<u64>(), players in 1usize..5, cycles in 0usize..5) {
        let board = Board::ring(12, 6.0, players).unwrap();
        let mut game = TurnController::new(GameConfig::default().with_seed(seed), board).unwrap();

        for _ in 0..cycles {
            let _ = game.roll();
            game.run_until_idle(0.1, 1_000_000).unwrap();
        }
        prop_assert!(game.reset().is_accepted());

        prop_assert_eq!(game.active_player(), PlayerId::new(0));
        for (id, player) in game.players().iter() {
            prop_assert_eq!(player.waypoint_index, 0);
            prop_assert!(player.dice.is_blank());
            prop_assert_eq!(player.dice_visible, id == PlayerId::new(0));
            prop_assert_eq!(player.position, game.board().start(id));
        }
    }

    /// Targets are either the plain sum or pinned to zero, and always on the path.
    #[test]
    fn prop_plan_target(index in 0usize..50, sum in any::<usize>(), path_len in 2usize..50) {
        let target = plan_target(index, sum, path_len);
        prop_assert!(target < path_len);
        match index.checked_add(sum) {
            Some(raw) if raw < path_len => prop_assert_eq!(target, raw),
            _ => prop_assert_eq!(target, 0),
        }
    }
}
