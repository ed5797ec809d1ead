//! Selection flow integration tests
//!
//! Drive the selection state machine through whole user journeys, the way
//! input systems do at runtime, and check the carousel math that hangs off
//! the selected index.

use std::time::Duration;

use voidlink::select3d::{
    approach, slot_angle, target_yaw, SelectionState, ViewMode, CONFIRM_DELAY_SECS,
};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_browse_confirm_play_abort_cycle() {
    let mut state = SelectionState::new(3);

    // Browse to the third character.
    state.next();
    state.next();
    assert_eq!(state.index(), 2);
    assert_eq!(state.mode(), ViewMode::Selecting);

    // Confirm and wait out the countdown in uneven frames.
    state.confirm();
    assert_eq!(state.mode(), ViewMode::Confirming);
    state.tick(ms(700));
    state.tick(ms(700));
    assert_eq!(state.mode(), ViewMode::Confirming);
    state.tick(ms(700));
    assert_eq!(state.mode(), ViewMode::Game);

    // Abort back to browsing; the selection survives the round trip.
    assert!(state.back());
    assert_eq!(state.mode(), ViewMode::Selecting);
    assert_eq!(state.index(), 2);
}

#[test]
fn test_inputs_ignored_during_countdown() {
    let mut state = SelectionState::new(4);
    state.select_at(1);
    state.confirm();

    // Mashing every control mid-countdown changes nothing.
    assert!(!state.next());
    assert!(!state.prev());
    assert!(!state.select_at(3));
    assert!(!state.confirm());
    assert!(!state.back());
    assert_eq!(state.index(), 1);
    assert_eq!(state.mode(), ViewMode::Confirming);

    state.tick(Duration::from_secs_f32(CONFIRM_DELAY_SECS));
    assert_eq!(state.mode(), ViewMode::Game);
    assert_eq!(state.index(), 1);
}

#[test]
fn test_abort_drops_pending_countdown() {
    let mut state = SelectionState::new(3);
    state.confirm();
    state.tick(ms(1999));
    state.tick(ms(1));
    state.back();

    // Time passing after the abort must never re-enter the game.
    state.tick(ms(10_000));
    assert_eq!(state.mode(), ViewMode::Selecting);
}

#[test]
fn test_single_character_roster_navigation() {
    let mut state = SelectionState::new(1);
    state.next();
    state.prev();
    assert_eq!(state.index(), 0);
    assert!(state.confirm());
    state.tick(ms(2000));
    assert_eq!(state.mode(), ViewMode::Game);
}

#[test]
fn test_carousel_yaw_counters_slot_angle() {
    // The group yaw target must rotate each selected slot to the front.
    for len in [1, 3, 5, 8] {
        for index in 0..len {
            let combined = target_yaw(index, len) + slot_angle(index, len);
            assert!(
                combined.rem_euclid(std::f32::consts::TAU).abs() < 1e-4
                    || (combined.rem_euclid(std::f32::consts::TAU)
                        - std::f32::consts::TAU)
                        .abs()
                        < 1e-4,
                "slot {} of {} does not face front",
                index,
                len
            );
        }
    }
}

#[test]
fn test_approach_converges_on_target() {
    let mut value = 0.0_f32;
    for _ in 0..120 {
        value = approach(value, 1.0, 5.0, 1.0 / 60.0);
    }
    assert!((value - 1.0).abs() < 1e-3, "value stuck at {}", value);
}
