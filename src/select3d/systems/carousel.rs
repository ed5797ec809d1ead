//! Carousel rotation system
//!
//! The group yaw chases the slot of the selected avatar with an exponential
//! approach. The rate drops during the confirm close-up for a slower,
//! dizzier settle; the rotation never snaps.

use bevy::prelude::*;

use crate::select3d::types::*;

pub fn rotate_carousel(
    time: Res<Time>,
    selection: Res<SelectionState>,
    mut group_query: Query<(&mut CarouselGroup, &mut Transform)>,
) {
    let rate = match selection.mode() {
        ViewMode::Confirming => CAROUSEL_RATE_CONFIRMING,
        _ => CAROUSEL_RATE_SELECTING,
    };
    let target = target_yaw(selection.index(), selection.len());

    for (mut group, mut transform) in group_query.iter_mut() {
        group.yaw = approach(group.yaw, target, rate, time.delta_secs());
        transform.rotation = Quat::from_rotation_y(group.yaw);
    }
}
