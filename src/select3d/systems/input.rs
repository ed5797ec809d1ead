//! Input handling systems
//!
//! Keyboard navigation plus cursor picking of carousel avatars. Picking is
//! a plain ray-sphere test against each avatar's body volume; every input
//! path funnels into the guarded `SelectionState` methods, so nothing here
//! needs to re-check the view mode for correctness.

use bevy::prelude::*;

use crate::select3d::types::*;

/// Approximate body radius used for cursor hit testing.
const PICK_RADIUS: f32 = 0.9;
/// Height of the hit sphere center above an avatar's feet.
const PICK_CENTER_HEIGHT: f32 = 1.0;

/// Keyboard navigation: arrows browse, Enter confirms, Escape backs out of
/// the game splash.
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<SelectionState>,
) {
    if keyboard.just_pressed(KeyCode::ArrowLeft) || keyboard.just_pressed(KeyCode::KeyA) {
        selection.prev();
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) || keyboard.just_pressed(KeyCode::KeyD) {
        selection.next();
    }
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Space) {
        selection.confirm();
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        selection.back();
    }
}

/// Cursor hover and click on carousel avatars.
///
/// Hover sets the per-avatar flag that drives the emissive boost; a left
/// click selects the avatar under the cursor. Both are live only while
/// browsing.
pub fn handle_avatar_picking(
    windows: Query<&Window>,
    mouse: Res<ButtonInput<MouseButton>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut selection: ResMut<SelectionState>,
    mut avatars: Query<(&Avatar, &GlobalTransform, &mut AvatarMotion)>,
) {
    let selecting = selection.mode() == ViewMode::Selecting;

    let cursor_ray = if selecting {
        windows
            .iter()
            .next()
            .and_then(|window| window.cursor_position())
            .and_then(|cursor| {
                let (camera, camera_transform) = camera_query.iter().next()?;
                camera.viewport_to_world(camera_transform, cursor).ok()
            })
    } else {
        None
    };

    // Nearest avatar under the cursor, if any.
    let mut hit: Option<(usize, f32)> = None;
    if let Some(ray) = cursor_ray {
        for (avatar, global, _) in avatars.iter() {
            let center = global.translation() + Vec3::Y * PICK_CENTER_HEIGHT;
            if let Some(distance) =
                ray_sphere_distance(ray.origin, *ray.direction, center, PICK_RADIUS)
            {
                if hit.map_or(true, |(_, best)| distance < best) {
                    hit = Some((avatar.index, distance));
                }
            }
        }
    }

    for (avatar, _, mut motion) in avatars.iter_mut() {
        let hovered = hit.map_or(false, |(index, _)| index == avatar.index);
        if motion.hovered != hovered {
            motion.hovered = hovered;
        }
    }

    if mouse.just_pressed(MouseButton::Left) {
        if let Some((index, _)) = hit {
            selection.select_at(index);
        }
    }
}

/// Distance along the ray to the nearest intersection with a sphere, if
/// any. `direction` must be normalized.
fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let projection = to_center.dot(direction);
    if projection < 0.0 {
        return None;
    }
    let closest_sq = to_center.length_squared() - projection * projection;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = projection - half_chord;
    Some(if near >= 0.0 { near } else { projection + half_chord })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_sphere_head_on() {
        let distance =
            ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
        assert_relative_eq!(distance, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let result = ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(3.0, 0.0, 5.0), 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_ignored() {
        let result = ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_ray_starting_inside_sphere_hits_forward() {
        let distance = ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 0.5), 1.0)
            .expect("ray from inside should exit forward");
        assert!(distance > 0.0);
    }

    #[test]
    fn test_grazing_ray_hits_edge() {
        let distance =
            ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(0.999, 0.0, 5.0), 1.0);
        assert!(distance.is_some());
    }
}
