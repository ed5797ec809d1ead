pub mod humanoid;
pub mod ring;

use bevy::prelude::*;

use crate::select3d::types::GeometrySymbol;

pub use humanoid::spawn_humanoid;
pub use ring::create_ring_mesh;

/// Mesh for the role sigil floated above an avatar's head.
pub fn create_sigil_mesh(symbol: GeometrySymbol) -> Mesh {
    match symbol {
        GeometrySymbol::Box => Cuboid::new(0.22, 0.22, 0.22).into(),
        GeometrySymbol::Sphere => Sphere::new(0.14).into(),
        GeometrySymbol::Torus => Torus::new(0.06, 0.16).into(),
    }
}
