use smartbase_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_without_timers_is_clean() {
    let state = AppState::new();
    let (mut next, effects) = update(state, Msg::Tick { now_ms: 16 });

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next.now_ms(), 16);
}
