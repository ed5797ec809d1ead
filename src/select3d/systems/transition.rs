//! View transition timing
//!
//! Ticks the confirm countdown owned by the selection state. The mutable
//! borrow is taken only while confirming so change detection stays quiet
//! during normal browsing.

use bevy::prelude::*;

use crate::select3d::types::{SelectionState, ViewMode};

pub fn tick_view_transition(time: Res<Time>, mut selection: ResMut<SelectionState>) {
    if selection.mode() == ViewMode::Confirming {
        selection.tick(time.delta());
    }
}
