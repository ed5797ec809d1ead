//! Selection state machine
//!
//! The screen controller: owns the selected index and the coarse view mode,
//! and guards every transition. All input paths (keyboard, overlay buttons,
//! avatar clicks) route through the methods here.

use bevy::prelude::*;
use std::time::Duration;

/// Seconds between confirming a character and entering the game splash.
pub const CONFIRM_DELAY_SECS: f32 = 2.0;

/// Coarse screen mode. Gates which UI is visible and which inputs are live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Selecting,
    Confirming,
    Game,
}

/// Resource owning the selection index and view mode.
///
/// Navigation wraps cyclically. The confirm countdown is held here so that
/// leaving the confirming mode by any route drops the pending transition;
/// nothing outside this struct can fire it.
#[derive(Resource, Debug)]
pub struct SelectionState {
    index: usize,
    len: usize,
    mode: ViewMode,
    confirm_timer: Option<Timer>,
}

impl SelectionState {
    /// `len` is the roster length and must be non-zero (the roster is
    /// validated before this is constructed).
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "selection state requires a non-empty roster");
        Self {
            index: 0,
            len,
            mode: ViewMode::Selecting,
            confirm_timer: None,
        }
    }

    pub fn with_start(len: usize, start: usize) -> Self {
        let mut state = Self::new(len);
        state.index = start.min(len - 1);
        state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Advance to the next character, wrapping. No-op outside `Selecting`.
    pub fn next(&mut self) -> bool {
        if self.mode != ViewMode::Selecting {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Step back to the previous character, wrapping. No-op outside
    /// `Selecting`.
    pub fn prev(&mut self) -> bool {
        if self.mode != ViewMode::Selecting {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }

    /// Jump directly to `index`. Out-of-range indices are rejected, not
    /// clamped; the current selection is left untouched.
    pub fn select_at(&mut self, index: usize) -> bool {
        if self.mode != ViewMode::Selecting || index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Lock in the current character and start the one-shot countdown to
    /// the game splash. Ignored while already confirming or in game.
    pub fn confirm(&mut self) -> bool {
        if self.mode != ViewMode::Selecting {
            return false;
        }
        self.mode = ViewMode::Confirming;
        self.confirm_timer = Some(Timer::from_seconds(CONFIRM_DELAY_SECS, TimerMode::Once));
        true
    }

    /// Leave the game splash and return to browsing. Valid only from
    /// `Game`; any other mode is a no-op.
    pub fn back(&mut self) -> bool {
        if self.mode != ViewMode::Game {
            return false;
        }
        self.mode = ViewMode::Selecting;
        self.confirm_timer = None;
        true
    }

    /// Advance the confirm countdown. Flips `Confirming` to `Game` exactly
    /// once, when the timer finishes.
    pub fn tick(&mut self, delta: Duration) {
        if self.mode != ViewMode::Confirming {
            // A stale timer must never fire outside the confirming mode.
            self.confirm_timer = None;
            return;
        }
        if let Some(timer) = self.confirm_timer.as_mut() {
            timer.tick(delta);
            if timer.is_finished() {
                self.mode = ViewMode::Game;
                self.confirm_timer = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_next_wraps_at_boundary() {
        let mut state = SelectionState::new(3);
        assert_eq!(state.index(), 0);
        state.next();
        state.next();
        assert_eq!(state.index(), 2);
        state.next();
        assert_eq!(state.index(), 0, "index 2 -> next() -> index 0");
    }

    #[test]
    fn test_prev_wraps_from_zero() {
        let mut state = SelectionState::new(3);
        state.prev();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_n_next_calls_advance_mod_len() {
        let mut state = SelectionState::new(5);
        for _ in 0..13 {
            state.next();
        }
        assert_eq!(state.index(), 13 % 5);
    }

    #[test]
    fn test_select_at_in_range() {
        let mut state = SelectionState::new(4);
        assert!(state.select_at(3));
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_select_at_out_of_range_rejected() {
        let mut state = SelectionState::new(4);
        state.select_at(1);
        assert!(!state.select_at(4));
        assert!(!state.select_at(usize::MAX));
        assert_eq!(state.index(), 1, "rejected select must not move the index");
    }

    #[test]
    fn test_navigation_blocked_outside_selecting() {
        let mut state = SelectionState::new(3);
        state.select_at(1);
        state.confirm();
        assert!(!state.next());
        assert!(!state.prev());
        assert!(!state.select_at(2));
        assert_eq!(state.index(), 1);

        state.tick(ms(2000));
        assert_eq!(state.mode(), ViewMode::Game);
        assert!(!state.next());
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_confirm_transitions_after_delay() {
        let mut state = SelectionState::new(3);
        assert!(state.confirm());
        assert_eq!(state.mode(), ViewMode::Confirming);

        state.tick(ms(1999));
        assert_eq!(state.mode(), ViewMode::Confirming);
        state.tick(ms(1));
        assert_eq!(state.mode(), ViewMode::Game);
    }

    #[test]
    fn test_confirm_is_not_reentrant() {
        let mut state = SelectionState::new(3);
        state.confirm();
        state.tick(ms(1500));
        // A second confirm must not restart the countdown.
        assert!(!state.confirm());
        state.tick(ms(500));
        assert_eq!(state.mode(), ViewMode::Game);
    }

    #[test]
    fn test_back_only_from_game() {
        let mut state = SelectionState::new(3);
        assert!(!state.back());
        state.confirm();
        assert!(!state.back());
        state.tick(ms(2000));
        assert!(state.back());
        assert_eq!(state.mode(), ViewMode::Selecting);
    }

    #[test]
    fn test_full_cycle_reselect_after_back() {
        let mut state = SelectionState::new(3);
        state.next();
        state.confirm();
        state.tick(ms(2500));
        state.back();
        assert!(state.next());
        assert_eq!(state.index(), 2);
        assert!(state.confirm());
        assert_eq!(state.mode(), ViewMode::Confirming);
    }

    #[test]
    fn test_ticking_in_selecting_never_transitions() {
        let mut state = SelectionState::new(3);
        state.tick(ms(10_000));
        assert_eq!(state.mode(), ViewMode::Selecting);
    }

    #[test]
    fn test_with_start_clamps_into_range() {
        let state = SelectionState::with_start(3, 99);
        assert_eq!(state.index(), 2);
        let state = SelectionState::with_start(3, 1);
        assert_eq!(state.index(), 1);
    }
}
