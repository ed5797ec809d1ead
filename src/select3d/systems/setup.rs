//! Scene setup system
//!
//! Builds the whole 3D stage on startup: camera, lights, starfield, floor,
//! and the carousel with one procedural avatar per roster entry.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use rand::Rng;

use crate::select3d::meshes::{create_ring_mesh, create_sigil_mesh, spawn_humanoid};
use crate::select3d::types::*;

/// Number of orbiting motes on an arcane build.
const HALO_MOTE_COUNT: usize = 12;
/// Number of background stars.
const STAR_COUNT: usize = 150;

/// Main setup system, initializes the entire 3D scene.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    roster: Res<Roster>,
) {
    // Camera, starting at the browse pose
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(BROWSE_POSE).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
        MainCamera,
    ));

    // Key light, tinted to the active character every frame
    commands.spawn((
        SpotLight {
            intensity: KEY_LIGHT_INTENSITY,
            color: Color::WHITE,
            outer_angle: 0.5,
            inner_angle: 0.25,
            range: 40.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
    ));

    // Rim lights
    for (pos, color) in [
        (Vec3::new(-5.0, 5.0, -5.0), Color::srgb(0.0, 0.9, 1.0)),
        (Vec3::new(5.0, 5.0, -5.0), Color::srgb(0.6, 0.2, 0.9)),
    ] {
        commands.spawn((
            SpotLight {
                intensity: 600_000.0,
                color,
                outer_angle: 0.5,
                range: 40.0,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(pos).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.02)));

    spawn_starfield(&mut commands, &mut meshes, &mut materials);

    // Floor disc, hidden during the confirm close-up
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(25.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.06, 0.06, 0.07),
            metallic: 0.5,
            perceptual_roughness: 0.35,
            ..default()
        })),
        Transform::from_xyz(0.0, -1.15, 0.0)
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        StageFloor,
    ));

    // Carousel with one avatar per roster entry
    let len = roster.len();
    info!("spawning carousel with {} avatars", len);
    commands
        .spawn((
            CarouselGroup::default(),
            Transform::from_xyz(0.0, -1.1, 0.0),
            Visibility::default(),
        ))
        .with_children(|group| {
            for (index, record) in roster.characters.iter().enumerate() {
                spawn_avatar(group, &mut meshes, &mut materials, index, len, record);
            }
        });
}

/// Spawn one avatar slot: body, shadow blob, selection ring, role sigil,
/// and halo motes for arcane builds.
fn spawn_avatar(
    group: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    index: usize,
    len: usize,
    record: &CharacterRecord,
) {
    let slot = slot_position(index, len, CAROUSEL_RADIUS);
    let angle = slot_angle(index, len);
    let build = record.role.build();
    let tint = record.tint();

    // Accent surfaces start in the inactive gray; the animation system
    // retints them from selection state.
    let accent = materials.add(StandardMaterial {
        base_color: Color::srgb(0.33, 0.33, 0.33),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });
    let visor = materials.add(StandardMaterial {
        base_color: Color::srgb(0.07, 0.07, 0.07),
        ..default()
    });

    group
        .spawn((
            Avatar {
                index,
                slot_angle: angle,
            },
            AvatarMotion {
                scale: 1.0,
                ..default()
            },
            AvatarPalette {
                accent: accent.clone(),
                visor: visor.clone(),
            },
            // Face the carousel center
            Transform::from_translation(slot).with_rotation(Quat::from_rotation_y(angle)),
            Visibility::default(),
        ))
        .with_children(|avatar| {
            spawn_humanoid(avatar, meshes, materials, &build, accent.clone(), visor);

            // Floating role sigil
            avatar.spawn((
                Mesh3d(meshes.add(create_sigil_mesh(record.geometry))),
                MeshMaterial3d(accent),
                Transform::from_xyz(0.0, 2.45, 0.0),
                RoleSigil {
                    avatar_index: index,
                },
            ));

            // Orbiting halo motes, arcane builds only
            if record.role.has_halo() {
                let mote_mesh = meshes.add(Sphere::new(0.035));
                let mote_material = materials.add(StandardMaterial {
                    base_color: tint,
                    emissive: tint.to_linear() * 4.0,
                    unlit: true,
                    ..default()
                });
                for i in 0..HALO_MOTE_COUNT {
                    let phase = i as f32 / HALO_MOTE_COUNT as f32 * std::f32::consts::TAU;
                    avatar.spawn((
                        Mesh3d(mote_mesh.clone()),
                        MeshMaterial3d(mote_material.clone()),
                        Transform::from_xyz(phase.cos() * 0.9, 1.0, phase.sin() * 0.9),
                        Visibility::Hidden,
                        HaloMote {
                            avatar_index: index,
                            phase,
                        },
                    ));
                }
            }
        });

    // Shadow blob, fixed to the floor so it does not bob with the body
    group.spawn((
        Mesh3d(meshes.add(Circle::new(0.6))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.0, 0.0, 0.4),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(slot + Vec3::Y * 0.01)
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));

    // Selection ring, starts invisible until this avatar becomes active
    group.spawn((
        Mesh3d(meshes.add(create_ring_mesh(0.55, 0.75, 48))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: tint.with_alpha(0.0),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::from_translation(slot + Vec3::Y * 0.02).with_scale(Vec3::splat(0.01)),
        Visibility::Hidden,
        SelectionRing {
            avatar_index: index,
            scale: 0.0,
            settled: false,
        },
    ));
}

/// Scatter small unlit spheres on a far shell around the stage.
fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let star_mesh = meshes.add(Sphere::new(0.05));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.88, 0.95),
        unlit: true,
        ..default()
    });

    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        // Uniform-ish direction; rejection sampling keeps it simple.
        let dir = loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-0.2..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length_squared() > 0.01 {
                break v.normalize();
            }
        };
        let distance = rng.gen_range(30.0..60.0);
        let scale = rng.gen_range(0.6..1.6);
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(dir * distance).with_scale(Vec3::splat(scale)),
        ));
    }
}
