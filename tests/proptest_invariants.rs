//! Property-based invariant tests for the rules engine.
//!
//! Uses proptest to generate random seeds and rosters, plays full matches
//! with random legal choices, and verifies core invariants at every step.

use proptest::prelude::*;

use domino_engine::core::{AttachSide, DominoSettings, GameAction, GameRng, Tile};
use domino_engine::rules::{GameEngine, GameResult};

const MAX_STEPS: u32 = 1_000;

/// Play one turn by hand with random choices, checking the protocol along
/// the way.
fn step(engine: &mut GameEngine, rng: &mut GameRng) {
    let legal = engine.legal_tiles().len();
    let side = if legal > 0 {
        engine.play_tile(rng.gen_range_usize(0..legal)).unwrap()
    } else if !engine.boneyard().is_empty() {
        engine.draw_tile().unwrap()
    } else {
        engine.pass_turn().unwrap();
        AttachSide::None
    };

    if side == AttachSide::Both {
        assert!(engine.pending_tile().is_some());
        assert!(engine.advance_turn().is_err());
        let placed = if rng.gen_bool(0.5) {
            engine.play_left().unwrap()
        } else {
            engine.play_right().unwrap()
        };
        assert!(placed);
    }
    assert!(engine.pending_tile().is_none());
}

fn check_invariants(engine: &GameEngine) {
    assert!(engine.verify_conservation(), "tile conservation");
    assert!(engine.board().is_chain_valid(), "board chain");
    let trailing_passes = engine
        .history()
        .iter()
        .rev()
        .take_while(|r| !r.action.is_play())
        .count();
    assert_eq!(engine.pass_count(), trailing_passes, "pass counter");

    if let (Some(ends), Some(first)) = (engine.ends(), engine.board().tiles().next()) {
        assert_eq!(ends.left, first.left());
        let last = engine.board().tiles().last().map(Tile::right);
        assert_eq!(Some(ends.right), last);
    }

    match engine.last_action() {
        Some(action) if action.is_play() => {
            let played = engine.last_played_tile().map(Tile::id);
            assert_eq!(played, engine.board().last_placed().map(Tile::id));
        }
        Some(GameAction::Pass) => {
            assert!(engine.last_played_tile().is_none());
            assert!(engine.last_drawn_tile().is_none());
        }
        Some(GameAction::DrawAndPass) => {
            assert!(engine.last_played_tile().is_none());
            assert!(engine.last_drawn_tile().is_some());
        }
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_matches_preserve_invariants(
        seed in any::<u64>(),
        players in 2usize..=4,
        max_pips in 4u8..=9,
    ) {
        let settings = DominoSettings::new()
            .with_players(players)
            .with_pip_range(0, max_pips);
        let mut engine = GameEngine::with_seed(settings, seed);
        engine.start_match().unwrap();
        check_invariants(&engine);

        let mut rng = GameRng::new(seed.wrapping_add(1));
        let mut steps = 0;
        while !engine.is_over() {
            step(&mut engine, &mut rng);
            check_invariants(&engine);
            engine.advance_turn().unwrap();
            steps += 1;
            prop_assert!(steps < MAX_STEPS, "match did not finish");
        }

        match engine.result() {
            Some(GameResult::Domino(winner)) => {
                prop_assert_eq!(engine.player(winner).map(|p| p.tile_count()), Some(0));
            }
            Some(GameResult::Blocked { winner, hand_sum }) => {
                prop_assert!(engine.boneyard().is_empty());
                for (id, player) in engine.players() {
                    prop_assert!(player.hand_sum() >= hand_sum);
                    if player.hand_sum() == hand_sum {
                        prop_assert!(id >= winner);
                    }
                }
            }
            None => prop_assert!(false, "finished match has no result"),
        }
    }

    #[test]
    fn prop_same_seed_same_deal(seed in any::<u64>(), players in 2usize..=4) {
        let deal = |seed| {
            let mut engine =
                GameEngine::with_seed(DominoSettings::new().with_players(players), seed);
            let starter = engine.start_match().unwrap();
            let hands: Vec<Vec<(u8, u8)>> = engine
                .players()
                .map(|(_, p)| p.tiles().iter().map(Tile::pips).collect())
                .collect();
            (starter, hands)
        };
        prop_assert_eq!(deal(seed), deal(seed));
    }
}
