//! Avatar animation systems
//!
//! Everything that moves or glows on an avatar: idle bob and sway, the
//! activation flash, the confirm spin/ascend/scale-up, the expanding
//! selection ring, halo motes, and the floating role sigils. All values are
//! recomputed each frame from elapsed time and the selection state.

use bevy::prelude::*;

use crate::select3d::types::*;

/// Neutral tint of accent surfaces on inactive avatars.
const INACTIVE_GRAY: Color = Color::srgb(0.33, 0.33, 0.33);

/// Drive per-avatar motion and material state.
pub fn animate_avatars(
    time: Res<Time>,
    selection: Res<SelectionState>,
    roster: Res<Roster>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut avatars: Query<(&Avatar, &AvatarPalette, &mut AvatarMotion, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    let dt = time.delta_secs();

    for (avatar, palette, mut motion, mut transform) in avatars.iter_mut() {
        let active = avatar.index == selection.index();
        let confirmed = active && selection.mode() == ViewMode::Confirming;

        // Activation edge starts the flash pulse.
        if active && !motion.was_active {
            motion.flash = 1.0;
        }
        motion.was_active = active;
        motion.flash = flash_decay(motion.flash, dt);

        // Idle bob, faster and lifted while active.
        let breathe_speed = if active { 2.0 } else { 1.0 };
        let lift = if active { 0.5 } else { 0.0 };
        let bob_target = lift + (t * breathe_speed).sin() * 0.05;
        motion.bob = approach(motion.bob, bob_target, 6.0, dt);

        // Confirm animation: ascend, rapid spin, scale-up.
        let ascend_target = if confirmed { CONFIRMED_ASCEND } else { 0.0 };
        motion.ascend = approach(motion.ascend, ascend_target, 3.0, dt);
        if confirmed {
            motion.spin += CONFIRMED_SPIN_SPEED * dt;
        } else {
            motion.spin = 0.0;
        }

        let scale_target = if confirmed {
            CONFIRMED_SCALE
        } else if active {
            ACTIVE_SCALE
        } else {
            1.0
        };
        motion.scale = approach(motion.scale, scale_target, 6.0, dt);

        // Small yaw sway while browsing the active avatar.
        let sway = if active && !confirmed {
            (t * 0.5).sin() * 0.1
        } else {
            0.0
        };
        let yaw = avatar.slot_angle + sway + motion.spin;

        let slot = slot_position(avatar.index, selection.len(), CAROUSEL_RADIUS);
        transform.translation = slot + Vec3::Y * (motion.bob + motion.ascend);
        transform.rotation = Quat::from_rotation_y(yaw);
        transform.scale = Vec3::splat(motion.scale);

        let tint = roster.get(avatar.index).tint();

        if let Some(material) = materials.get_mut(&palette.accent) {
            material.base_color = if active { tint } else { INACTIVE_GRAY };

            let mut glow = if active { 0.5 } else { 0.0 };
            if motion.hovered && !active {
                glow += 0.25;
            }
            if confirmed {
                glow += 2.5;
            }
            // Flash whitens on top of the colored glow.
            material.emissive =
                tint.to_linear() * glow + LinearRgba::WHITE * (motion.flash * 2.0);
        }

        if let Some(material) = materials.get_mut(&palette.visor) {
            if active {
                material.base_color = Color::WHITE;
                material.emissive = tint.to_linear() * 2.0;
            } else {
                material.base_color = Color::srgb(0.07, 0.07, 0.07);
                material.emissive = LinearRgba::BLACK;
            }
        }
    }
}

/// Expand the selection ring under the active avatar.
///
/// Exponential approach toward twice the base size while opacity falls
/// linearly; stops updating once nearly settled and resets invisible the
/// moment its avatar loses active status.
pub fn animate_selection_rings(
    time: Res<Time>,
    selection: Res<SelectionState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rings: Query<(
        &mut SelectionRing,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let dt = time.delta_secs();

    for (mut ring, mut transform, mut visibility, material_handle) in rings.iter_mut() {
        let active = ring.avatar_index == selection.index();

        if !active {
            if ring.scale != 0.0 || ring.settled {
                ring.scale = 0.0;
                ring.settled = false;
                *visibility = Visibility::Hidden;
            }
            continue;
        }

        if ring.settled {
            continue;
        }

        ring.scale = ring_advance(ring.scale, dt);
        if ring_settled(ring.scale) {
            ring.settled = true;
            *visibility = Visibility::Hidden;
            continue;
        }

        *visibility = Visibility::Visible;
        transform.scale = Vec3::splat(ring.scale.max(0.01));
        if let Some(material) = materials.get_mut(&material_handle.0) {
            let alpha = ring_opacity(ring.scale);
            material.base_color = material.base_color.with_alpha(alpha);
        }
    }
}

/// Orbit the halo motes around an active arcane avatar.
pub fn animate_halo_motes(
    time: Res<Time>,
    selection: Res<SelectionState>,
    mut motes: Query<(&HaloMote, &mut Transform, &mut Visibility)>,
) {
    let t = time.elapsed_secs();

    for (mote, mut transform, mut visibility) in motes.iter_mut() {
        let active = mote.avatar_index == selection.index();
        *visibility = if active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if !active {
            continue;
        }

        let angle = t * 1.2 + mote.phase;
        transform.translation = Vec3::new(
            angle.cos() * 0.9,
            1.0 + (t * 2.0 + mote.phase).sin() * 0.35,
            angle.sin() * 0.9,
        );
    }
}

/// Slow spin and gentle float on the role sigils.
pub fn animate_role_sigils(
    time: Res<Time>,
    mut sigils: Query<&mut Transform, With<RoleSigil>>,
) {
    let t = time.elapsed_secs();
    for mut transform in sigils.iter_mut() {
        transform.rotation = Quat::from_rotation_y(t * 1.5);
        transform.translation.y = 2.45 + (t * 1.3).sin() * 0.06;
    }
}
