use proptest::prelude::*;

use ramen_catch::sim::{Outcome, RoundConfig, RoundEvent, TickInput, init_round, tick};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(move_left, move_right)| TickInput {
        move_left,
        move_right,
    })
}

fn frame_seq() -> impl Strategy<Value = Vec<(f32, TickInput)>> {
    prop::collection::vec((0.0f32..120.0, input_strategy()), 1..400)
}

proptest! {
    #[test]
    fn idle_player_never_moves(seed in any::<u64>(), steps in prop::collection::vec(0.0f32..120.0, 1..400)) {
        let mut state = init_round(RoundConfig::default(), seed).unwrap();
        let start = state.player.pos;
        for elapsed in steps {
            tick(&mut state, elapsed, &TickInput::default());
            prop_assert_eq!(state.player.pos, start);
        }
    }

    #[test]
    fn player_stays_on_board(seed in any::<u64>(), frames in frame_seq()) {
        let mut state = init_round(RoundConfig::default(), seed).unwrap();
        let max_x = state.board.width - state.player.size.x;
        for (elapsed, input) in frames {
            tick(&mut state, elapsed, &input);
            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= max_x);
        }
    }

    #[test]
    fn target_falls_or_resets(seed in any::<u64>(), frames in frame_seq()) {
        let mut state = init_round(RoundConfig::default(), seed).unwrap();
        for (elapsed, input) in frames {
            let before = state.target.pos.y;
            tick(&mut state, elapsed, &input);
            let after = state.target.pos.y;
            prop_assert!(after >= before || after == 0.0, "y went {} -> {}", before, after);
            prop_assert!(after >= 0.0 && after <= state.board.height);
            prop_assert!(state.target.pos.x >= 0.0);
            prop_assert!(state.target.pos.x < state.board.width - state.target.size.x);
        }
    }

    #[test]
    fn score_tracks_catches(seed in any::<u64>(), frames in frame_seq()) {
        let mut state = init_round(RoundConfig::default(), seed).unwrap();
        let mut catches = 0;
        for (elapsed, input) in frames {
            let before = state.score;
            let events = tick(&mut state, elapsed, &input);
            let caught = events
                .iter()
                .filter(|e| matches!(e, RoundEvent::TargetCaught { .. }))
                .count() as u32;
            prop_assert_eq!(state.score, before + caught);
            catches += caught;
        }
        prop_assert_eq!(state.score, catches);
    }

    #[test]
    fn round_ends_exactly_once(
        seed in any::<u64>(),
        duration_ms in 1.0f32..3000.0,
        frames in prop::collection::vec((1.0f32..120.0, input_strategy()), 1..200),
    ) {
        let config = RoundConfig { duration_ms, ..Default::default() };
        let mut state = init_round(config, seed).unwrap();
        let mut ended = 0;

        // Enough frames to run the clock out
        let padding = std::iter::repeat((100.0, TickInput::default())).take(40);
        for (elapsed, input) in frames.into_iter().chain(padding) {
            let was_running = !state.is_over();
            let events = tick(&mut state, elapsed, &input);
            for (i, event) in events.iter().enumerate() {
                if let RoundEvent::RoundEnded { score, outcome } = event {
                    ended += 1;
                    prop_assert!(was_running);
                    prop_assert_eq!(i, events.len() - 1);
                    prop_assert_eq!(state.remaining_ms, 0.0);
                    prop_assert_eq!(*score, state.score);
                    let expected = if state.score >= 10 { Outcome::Won } else { Outcome::Lost };
                    prop_assert_eq!(*outcome, expected);
                }
            }
        }

        prop_assert_eq!(ended, 1);
        prop_assert!(state.is_over());
    }
}

#[test]
fn default_round_ends_after_thirty_seconds() {
    let mut state = init_round(RoundConfig::default(), 5).unwrap();
    let mut frames = 0;
    loop {
        frames += 1;
        let events = tick(&mut state, 16.0, &TickInput::default());
        if events
            .iter()
            .any(|e| matches!(e, RoundEvent::RoundEnded { .. }))
        {
            break;
        }
    }
    // 30000 / 16 = 1875
    assert_eq!(frames, 1875);
    assert_eq!(state.outcome, Outcome::Lost);
}
