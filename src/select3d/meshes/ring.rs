//! Selection ring mesh
//!
//! A flat annulus, built by hand so the ring can be unlit and double sided
//! without touching the standard primitive pipeline. Lies in the XZ plane
//! with normals pointing up.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

/// Build a flat ring with the given radii. `segments` controls roundness.
pub fn create_ring_mesh(inner_radius: f32, outer_radius: f32, segments: usize) -> Mesh {
    let segments = segments.max(3);
    let mut positions = Vec::with_capacity(segments * 2 + 2);
    let mut normals = Vec::with_capacity(segments * 2 + 2);
    let mut uvs = Vec::with_capacity(segments * 2 + 2);
    let mut indices = Vec::with_capacity(segments * 6);

    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();

        positions.push([cos * inner_radius, 0.0, sin * inner_radius]);
        positions.push([cos * outer_radius, 0.0, sin * outer_radius]);
        normals.push([0.0, 1.0, 0.0]);
        normals.push([0.0, 1.0, 0.0]);
        let t = i as f32 / segments as f32;
        uvs.push([t, 0.0]);
        uvs.push([t, 1.0]);
    }

    for i in 0..segments as u32 {
        let inner = i * 2;
        let outer = inner + 1;
        let next_inner = inner + 2;
        let next_outer = inner + 3;
        indices.extend_from_slice(&[inner, next_inner, outer]);
        indices.extend_from_slice(&[outer, next_inner, next_outer]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_vertex_and_index_counts() {
        let segments = 32;
        let mesh = create_ring_mesh(0.5, 0.7, segments);
        assert_eq!(mesh.count_vertices(), (segments + 1) * 2);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("ring mesh should have u32 indices");
        };
        assert_eq!(indices.len(), segments * 6);
    }

    #[test]
    fn test_ring_is_flat() {
        let mesh = create_ring_mesh(0.5, 0.7, 16);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
            .expect("position attribute");
        for p in positions {
            assert_eq!(p[1], 0.0, "ring vertices must lie in the XZ plane");
        }
    }

    #[test]
    fn test_degenerate_segment_count_is_bumped() {
        let mesh = create_ring_mesh(0.5, 0.7, 0);
        assert!(mesh.count_vertices() >= 8);
    }
}
