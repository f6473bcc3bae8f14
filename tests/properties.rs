use coffeehouse::{ChessClockEngine, ClockSettings, Player, RunState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Tick(u64),
    Swap,
    Pause,
    Resume,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1u64..120_000).prop_map(Op::Tick),
        3 => Just(Op::Swap),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
    ]
}

fn engine(base_ms: i64, increment_ms: i64, first: Player) -> ChessClockEngine {
    let mut engine = ChessClockEngine::new(ClockSettings::new(base_ms, increment_ms).unwrap());
    engine.start(first).unwrap();
    engine
}

fn apply(engine: &mut ChessClockEngine, op: &Op) {
    match op {
        Op::Tick(ms) => {
            engine.tick(*ms);
        }
        Op::Swap => {
            engine.swap();
        }
        Op::Pause => {
            let _ = engine.pause();
        }
        Op::Resume => {
            let _ = engine.resume();
        }
    }
}

fn first_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Player1), Just(Player::Player2)]
}

proptest! {
    #[test]
    fn remaining_time_never_goes_negative(
        base in 1i64..600_000,
        increment in 0i64..10_000,
        first in first_player(),
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let mut engine = engine(base, increment, first);
        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(engine.remaining_ms(Player::Player1) >= 0);
            prop_assert!(engine.remaining_ms(Player::Player2) >= 0);
            prop_assert!(engine.snapshot().validate().is_ok());
        }
    }

    #[test]
    fn swap_credits_exactly_the_increment(
        increment in 0i64..10_000,
        first in first_player(),
        elapsed in 1u64..500_000,
    ) {
        let mut engine = engine(600_000, increment, first);
        engine.tick(elapsed);
        let before = engine.snapshot();
        let mover = engine.active_player().unwrap();

        prop_assert!(engine.swap());
        prop_assert_eq!(engine.remaining_ms(mover), before.remaining_ms(mover) + increment);
        prop_assert_eq!(engine.remaining_ms(mover.other()), before.remaining_ms(mover.other()));
        prop_assert_eq!(engine.active_player(), Some(mover.other()));
        prop_assert_eq!(engine.state().total_remaining_ms(), before.total_remaining_ms() + increment);
    }

    #[test]
    fn pause_resume_is_transparent(
        first in first_player(),
        ops in prop::collection::vec(op(), 0..16),
    ) {
        let mut engine = engine(600_000, 5_000, first);
        for op in &ops {
            apply(&mut engine, op);
        }
        prop_assume!(engine.run_state() == RunState::Running);

        let before = engine.snapshot();
        engine.pause().unwrap();
        engine.resume().unwrap();
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn restored_engine_behaves_identically(
        first in first_player(),
        history in prop::collection::vec(op(), 0..32),
        future in prop::collection::vec(op(), 0..32),
    ) {
        let mut source = engine(300_000, 2_000, first);
        for op in &history {
            apply(&mut source, op);
        }

        let mut restored = ChessClockEngine::default();
        restored.restore(source.snapshot()).unwrap();

        for op in &future {
            apply(&mut source, op);
            apply(&mut restored, op);
            prop_assert_eq!(restored.snapshot(), source.snapshot());
        }
    }
}
