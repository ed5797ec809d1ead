//! Camera and lighting systems
//!
//! The camera exponentially approaches the pose for the current view mode,
//! with a small random jitter while confirming. There is no completion
//! signal; the confirm countdown advances the mode regardless of whether
//! the camera has visually arrived.

use bevy::prelude::*;
use rand::Rng;

use crate::select3d::types::*;

pub fn drive_camera(
    time: Res<Time>,
    selection: Res<SelectionState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let dt = time.delta_secs();
    let target = camera_target(selection.mode());
    let factor = (CAMERA_RATE * dt).min(1.0);

    for mut transform in camera_query.iter_mut() {
        let mut position = transform.translation.lerp(target, factor);

        if selection.mode() == ViewMode::Confirming {
            let mut rng = rand::thread_rng();
            position.x += rng.gen_range(-SHAKE_AMPLITUDE..SHAKE_AMPLITUDE);
            position.y += rng.gen_range(-SHAKE_AMPLITUDE..SHAKE_AMPLITUDE);
        }

        transform.translation = position;
        *transform = transform.looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y);
    }
}

/// Tint the key light to the active character and boost it while confirming.
pub fn update_key_light(
    time: Res<Time>,
    selection: Res<SelectionState>,
    roster: Res<Roster>,
    mut light_query: Query<&mut SpotLight, With<KeyLight>>,
) {
    let dt = time.delta_secs();
    let target = key_light_target(selection.mode());
    let tint = roster.get(selection.index()).tint();

    for mut light in light_query.iter_mut() {
        light.intensity = approach(light.intensity, target, 4.0, dt);
        light.color = tint;
    }
}

/// Hide the floor disc during the confirm close-up.
pub fn update_stage_visibility(
    selection: Res<SelectionState>,
    mut floor_query: Query<&mut Visibility, With<StageFloor>>,
) {
    for mut visibility in floor_query.iter_mut() {
        *visibility = if selection.mode() == ViewMode::Confirming {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}
