//! Avatar components and animation math
//!
//! Per-avatar transient visual state lives here: hover and flash scalars,
//! interpolated bob/spin/scale values, and the selection-ring progress. All
//! of it is recomputed every frame from elapsed time plus the selection
//! state; nothing persists across a respawn.

use bevy::prelude::*;

/// Radius of the carousel circle.
pub const CAROUSEL_RADIUS: f32 = 3.5;

/// Carousel yaw approach rate while browsing.
pub const CAROUSEL_RATE_SELECTING: f32 = 5.0;
/// Slower, dizzier approach rate during the confirm close-up.
pub const CAROUSEL_RATE_CONFIRMING: f32 = 2.0;

/// Seconds for the activation flash to decay from 1.0 back to 0.0.
pub const FLASH_DECAY_SECS: f32 = 0.33;

/// The selection ring expands from 0 toward this scale.
pub const RING_TARGET_SCALE: f32 = 2.0;
/// Exponential closing rate of the ring expansion.
pub const RING_RATE: f32 = 4.0;
/// The ring stops updating once it reaches this fraction of the target.
pub const RING_SETTLE_FRACTION: f32 = 0.95;

/// Scale of the actively selected avatar relative to idle neighbors.
pub const ACTIVE_SCALE: f32 = 1.3;
/// Extra scale while the confirm animation runs.
pub const CONFIRMED_SCALE: f32 = 1.5;
/// Height the confirmed avatar ascends to.
pub const CONFIRMED_ASCEND: f32 = 0.8;
/// Spin speed of the confirmed avatar, radians per second.
pub const CONFIRMED_SPIN_SPEED: f32 = 7.0;

/// Marker for the carousel parent entity. `yaw` is the interpolated group
/// rotation, kept here rather than re-derived from the transform.
#[derive(Component, Default)]
pub struct CarouselGroup {
    pub yaw: f32,
}

/// One avatar slot on the carousel.
#[derive(Component)]
pub struct Avatar {
    pub index: usize,
    /// Fixed slot angle; the avatar faces the carousel center.
    pub slot_angle: f32,
}

/// Transient interpolation state for one avatar. Reset on respawn.
#[derive(Component, Default)]
pub struct AvatarMotion {
    pub hovered: bool,
    /// Decaying activation pulse in [0, 1].
    pub flash: f32,
    /// Interpolated vertical offset.
    pub bob: f32,
    /// Interpolated uniform scale.
    pub scale: f32,
    /// Accumulated confirm spin, radians.
    pub spin: f32,
    /// Interpolated confirm ascend offset.
    pub ascend: f32,
    /// Previous frame's active status, for edge detection.
    pub was_active: bool,
}

/// Handles to the per-avatar materials that react to selection state.
#[derive(Component)]
pub struct AvatarPalette {
    pub accent: Handle<StandardMaterial>,
    pub visor: Handle<StandardMaterial>,
}

/// Expanding flat ring spawned under the active avatar.
#[derive(Component)]
pub struct SelectionRing {
    pub avatar_index: usize,
    pub scale: f32,
    pub settled: bool,
}

/// One orbiting halo mote on an arcane build.
#[derive(Component)]
pub struct HaloMote {
    pub avatar_index: usize,
    pub phase: f32,
}

/// Floating role sigil above an avatar's head.
#[derive(Component)]
pub struct RoleSigil {
    pub avatar_index: usize,
}

/// Angular slot of avatar `index` on a carousel of `len` entries.
pub fn slot_angle(index: usize, len: usize) -> f32 {
    index as f32 * std::f32::consts::TAU / len.max(1) as f32
}

/// World-space slot position on the carousel circle.
pub fn slot_position(index: usize, len: usize, radius: f32) -> Vec3 {
    let angle = slot_angle(index, len);
    Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius)
}

/// Group yaw that brings avatar `index` to face the camera.
pub fn target_yaw(index: usize, len: usize) -> f32 {
    -slot_angle(index, len)
}

/// Frame-rate independent exponential approach toward `target`.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (rate * dt).min(1.0)
}

/// Decay the activation flash. Monotonic, clamped at zero.
pub fn flash_decay(flash: f32, dt: f32) -> f32 {
    (flash - dt / FLASH_DECAY_SECS).max(0.0)
}

/// Advance the ring expansion by one frame.
pub fn ring_advance(scale: f32, dt: f32) -> f32 {
    approach(scale, RING_TARGET_SCALE, RING_RATE, dt)
}

/// Ring opacity falls linearly as the ring expands.
pub fn ring_opacity(scale: f32) -> f32 {
    (1.0 - scale / RING_TARGET_SCALE).clamp(0.0, 1.0)
}

/// Whether the ring has effectively reached its target and should stop.
pub fn ring_settled(scale: f32) -> bool {
    scale >= RING_TARGET_SCALE * RING_SETTLE_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_slot_angles_are_even() {
        let n = 5;
        for i in 0..n {
            assert_relative_eq!(
                slot_angle(i, n),
                i as f32 * std::f32::consts::TAU / n as f32
            );
        }
    }

    #[test]
    fn test_slot_positions_sit_on_the_circle() {
        for i in 0..7 {
            let p = slot_position(i, 7, CAROUSEL_RADIUS);
            assert_relative_eq!(p.length(), CAROUSEL_RADIUS, epsilon = 1e-4);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_target_yaw_opposes_slot_angle() {
        assert_relative_eq!(target_yaw(2, 4), -slot_angle(2, 4));
    }

    #[test]
    fn test_flash_decays_monotonically_to_zero() {
        let mut flash: f32 = 1.0;
        let dt = 1.0 / 60.0;
        let mut previous = flash;
        for _ in 0..60 {
            flash = flash_decay(flash, dt);
            assert!(flash <= previous, "flash must never rebound");
            assert!(flash >= 0.0, "flash must never go negative");
            previous = flash;
        }
        assert_eq!(flash, 0.0, "flash should fully decay within a second");
    }

    #[test]
    fn test_ring_opacity_bounds() {
        let mut scale = 0.0;
        let dt = 1.0 / 60.0;
        for _ in 0..600 {
            scale = ring_advance(scale, dt);
            let opacity = ring_opacity(scale);
            assert!((0.0..=1.0).contains(&opacity));
        }
        // Exponential approach never overshoots the target.
        assert!(scale <= RING_TARGET_SCALE);
        assert_eq!(ring_opacity(RING_TARGET_SCALE), 0.0);
        assert_eq!(ring_opacity(RING_TARGET_SCALE + 1.0), 0.0);
    }

    #[test]
    fn test_ring_settles_before_target() {
        assert!(!ring_settled(0.0));
        assert!(!ring_settled(RING_TARGET_SCALE * 0.9));
        assert!(ring_settled(RING_TARGET_SCALE * 0.95));
        assert!(ring_settled(RING_TARGET_SCALE));
    }

    #[test]
    fn test_approach_converges_without_overshoot() {
        let mut value = 0.0;
        let dt = 1.0 / 60.0;
        for _ in 0..600 {
            let next = approach(value, 1.0, 5.0, dt);
            assert!(next >= value && next <= 1.0);
            value = next;
        }
        assert_relative_eq!(value, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_approach_is_stable_under_large_dt() {
        // A huge frame spike must clamp to the target, not overshoot it.
        let value = approach(0.0, 1.0, 5.0, 10.0);
        assert_eq!(value, 1.0);
    }
}
