//! Camera and lighting types
//!
//! Named poses for the browse and confirm framings, plus the markers for the
//! camera and the lights that react to the view mode.

use bevy::prelude::*;

use super::selection::ViewMode;

/// Marker component for the main 3D camera.
#[derive(Component)]
pub struct MainCamera;

/// Marker for the key spotlight that tints to the active character.
#[derive(Component)]
pub struct KeyLight;

/// Marker for the floor disc that fades out during the confirm close-up.
#[derive(Component)]
pub struct StageFloor;

/// Wide browsing framing.
pub const BROWSE_POSE: Vec3 = Vec3::new(0.0, 0.8, 7.5);
/// Close-up on the confirmed avatar's face and upper chest.
pub const CONFIRM_POSE: Vec3 = Vec3::new(0.0, 1.2, 4.2);
/// Exponential approach rate between poses.
pub const CAMERA_RATE: f32 = 2.0;
/// Half-amplitude of the per-frame shake while confirming.
pub const SHAKE_AMPLITUDE: f32 = 0.01;

/// Key light intensity in lumens while browsing.
pub const KEY_LIGHT_INTENSITY: f32 = 2_000_000.0;
/// Boost factor applied to the key light during the confirm close-up.
pub const KEY_LIGHT_CONFIRM_BOOST: f32 = 5.0;

/// Target camera position for the current view mode. The game splash keeps
/// the confirm framing underneath the overlay.
pub fn camera_target(mode: ViewMode) -> Vec3 {
    match mode {
        ViewMode::Selecting => BROWSE_POSE,
        ViewMode::Confirming | ViewMode::Game => CONFIRM_POSE,
    }
}

/// Target key light intensity for the current view mode.
pub fn key_light_target(mode: ViewMode) -> f32 {
    match mode {
        ViewMode::Confirming => KEY_LIGHT_INTENSITY * KEY_LIGHT_CONFIRM_BOOST,
        _ => KEY_LIGHT_INTENSITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_targets_per_mode() {
        assert_eq!(camera_target(ViewMode::Selecting), BROWSE_POSE);
        assert_eq!(camera_target(ViewMode::Confirming), CONFIRM_POSE);
        assert_eq!(camera_target(ViewMode::Game), CONFIRM_POSE);
    }

    #[test]
    fn test_key_light_boosted_only_while_confirming() {
        assert_eq!(key_light_target(ViewMode::Selecting), KEY_LIGHT_INTENSITY);
        assert_eq!(key_light_target(ViewMode::Game), KEY_LIGHT_INTENSITY);
        assert!(key_light_target(ViewMode::Confirming) > KEY_LIGHT_INTENSITY);
    }
}
