//! Procedural humanoid body
//!
//! Composes an avatar body from Bevy primitives: head, neck, torso, chest
//! accent, hips, two arms with shoulder orbs, two legs, and a visor. All
//! proportions come from the role's `BuildProfile`; the accent and visor
//! materials are owned by the avatar so selection systems can retint them.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::select3d::types::BuildProfile;

/// Spawn the body hierarchy under an avatar root.
///
/// The whole body hangs off one inner group so the build's height offset and
/// forward lean apply to every part at once.
pub fn spawn_humanoid(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    build: &BuildProfile,
    accent: Handle<StandardMaterial>,
    visor: Handle<StandardMaterial>,
) {
    let skin = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(255, 219, 172),
        metallic: 0.1,
        perceptual_roughness: 0.8,
        ..default()
    });
    let suit = materials.add(StandardMaterial {
        base_color: Color::srgb(0.13, 0.13, 0.13),
        metallic: 0.6,
        perceptual_roughness: 0.4,
        ..default()
    });
    let under_suit = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.1, 0.1),
        ..default()
    });
    let limb = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.2),
        ..default()
    });

    parent
        .spawn((
            Transform::from_xyz(0.0, build.height_offset, 0.0)
                .with_rotation(Quat::from_rotation_x(build.lean)),
            Visibility::default(),
        ))
        .with_children(|body| {
            // Head
            body.spawn((
                Mesh3d(meshes.add(Sphere::new(0.22 * build.head_scale))),
                MeshMaterial3d(skin.clone()),
                Transform::from_xyz(0.0, 1.7, 0.0),
            ));

            // Neck
            body.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.09, 0.15))),
                MeshMaterial3d(skin),
                Transform::from_xyz(0.0, 1.5, 0.0),
            ));

            // Torso (suit)
            body.spawn((
                Mesh3d(meshes.add(Cuboid::new(build.torso.x, build.torso.y, build.torso.z))),
                MeshMaterial3d(suit),
                Transform::from_xyz(0.0, 1.15, 0.0),
            ));

            // Chest plate, the main accent surface
            body.spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    build.torso.x * 0.8,
                    build.torso.y * 0.4,
                    build.torso.z + 0.02,
                ))),
                MeshMaterial3d(accent.clone()),
                Transform::from_xyz(0.0, 1.3, 0.0),
            ));

            // Hips
            body.spawn((
                Mesh3d(meshes.add(Cuboid::new(build.torso.x, 0.2, 0.3))),
                MeshMaterial3d(under_suit),
                Transform::from_xyz(0.0, 0.75, 0.0),
            ));

            // Arms with accent shoulder orbs
            let arm_mesh = meshes.add(Cylinder::new(build.arm_thickness, 0.7));
            let shoulder_mesh = meshes.add(Sphere::new(build.arm_thickness));
            for side in [-1.0f32, 1.0] {
                let shoulder_x = side * build.shoulders / 1.8;
                body.spawn((
                    Mesh3d(arm_mesh.clone()),
                    MeshMaterial3d(limb.clone()),
                    Transform::from_xyz(shoulder_x, 1.0, 0.0),
                ));
                body.spawn((
                    Mesh3d(shoulder_mesh.clone()),
                    MeshMaterial3d(accent.clone()),
                    Transform::from_xyz(shoulder_x, 1.35, 0.0),
                ));
            }

            // Legs
            let leg_mesh = meshes.add(Cylinder::new(build.leg_thickness, 0.75));
            for side in [-1.0f32, 1.0] {
                body.spawn((
                    Mesh3d(leg_mesh.clone()),
                    MeshMaterial3d(limb.clone()),
                    Transform::from_xyz(side * build.torso.x / 3.0, 0.275, 0.0),
                ));
            }

            // Visor across the face
            body.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.25 * build.head_scale, 0.08, 0.1))),
                MeshMaterial3d(visor),
                Transform::from_xyz(0.0, 1.72, 0.18 * build.head_scale),
            ));
        });
}
