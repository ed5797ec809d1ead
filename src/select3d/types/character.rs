//! Character catalog types
//!
//! This module contains the character record, the role/build tables, and the
//! roster resource that holds the active catalog.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Combat role of a character. Each role maps to a body build variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Role {
    Tank,
    Speed,
    Magic,
    /// Fallback for roster entries that predate the role split.
    #[default]
    Unaligned,
}

// Unknown role names deserialize to `Unaligned` instead of failing the
// whole roster load. Serde's `other` attribute only covers tagged enums,
// so this is spelled out by hand.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RoleVisitor;

        impl<'de> serde::de::Visitor<'de> for RoleVisitor {
            type Value = Role;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a role variant name")
            }

            fn visit_enum<A>(self, data: A) -> Result<Role, A::Error>
            where
                A: serde::de::EnumAccess<'de>,
            {
                use serde::de::VariantAccess;
                let (name, variant): (String, A::Variant) = data.variant()?;
                variant.unit_variant()?;
                Ok(Role::from_name(&name))
            }

            fn visit_str<E>(self, value: &str) -> Result<Role, E>
            where
                E: serde::de::Error,
            {
                Ok(Role::from_name(value))
            }
        }

        deserializer.deserialize_enum(
            "Role",
            &["Tank", "Speed", "Magic", "Unaligned"],
            RoleVisitor,
        )
    }
}

impl Role {
    fn from_name(name: &str) -> Self {
        match name {
            "Tank" => Role::Tank,
            "Speed" => Role::Speed,
            "Magic" => Role::Magic,
            _ => Role::Unaligned,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Tank => "Heavy Defender",
            Role::Speed => "Swift Scout",
            Role::Magic => "Arcane Weaver",
            Role::Unaligned => "Operative",
        }
    }

    /// Body proportions for this role's build variant.
    pub fn build(&self) -> BuildProfile {
        match self {
            Role::Tank => BuildProfile {
                torso: Vec3::new(0.6, 0.7, 0.4),
                shoulders: 0.8,
                arm_thickness: 0.18,
                leg_thickness: 0.2,
                head_scale: 1.1,
                height_offset: 0.0,
                lean: 0.0,
            },
            Role::Speed => BuildProfile {
                torso: Vec3::new(0.35, 0.6, 0.25),
                shoulders: 0.5,
                arm_thickness: 0.1,
                leg_thickness: 0.12,
                head_scale: 0.95,
                height_offset: 0.1,
                lean: 0.2,
            },
            Role::Magic | Role::Unaligned => BuildProfile {
                torso: Vec3::new(0.45, 0.65, 0.3),
                shoulders: 0.6,
                arm_thickness: 0.14,
                leg_thickness: 0.16,
                head_scale: 1.0,
                height_offset: 0.05,
                lean: 0.0,
            },
        }
    }

    /// Only arcane builds carry the orbiting halo motes.
    pub fn has_halo(&self) -> bool {
        matches!(self, Role::Magic)
    }
}

/// Proportion table for a humanoid build.
///
/// `torso` holds full extents (width, height, depth); the remaining fields
/// scale limbs, head, and stance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildProfile {
    pub torso: Vec3,
    pub shoulders: f32,
    pub arm_thickness: f32,
    pub leg_thickness: f32,
    pub head_scale: f32,
    pub height_offset: f32,
    /// Forward tilt in radians (scouts lean into their sprint stance).
    pub lean: f32,
}

/// Signature primitive floated above each avatar as a role sigil and shown
/// as a label on the splash screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometrySymbol {
    Box,
    Sphere,
    Torus,
}

impl GeometrySymbol {
    pub fn name(&self) -> &'static str {
        match self {
            GeometrySymbol::Box => "box",
            GeometrySymbol::Sphere => "sphere",
            GeometrySymbol::Torus => "torus",
        }
    }
}

/// Stat block, each value in 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub power: u8,
    pub speed: u8,
    pub defense: u8,
    pub utility: u8,
}

/// One selectable character. Immutable once the roster is loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub description: String,
    /// CSS hex string, e.g. "#ff00ff".
    pub color: String,
    pub stats: CharacterStats,
    pub geometry: GeometrySymbol,
}

impl CharacterRecord {
    /// Parse the record's CSS color string. Unparseable colors fall back to
    /// neutral white rather than failing mid-frame.
    pub fn tint(&self) -> Color {
        match csscolorparser::parse(&self.color) {
            Ok(c) => {
                let [r, g, b, a] = c.to_array();
                Color::srgba(r, g, b, a)
            }
            Err(_) => Color::WHITE,
        }
    }
}

/// Resource holding the active character catalog.
///
/// Consumers index it by position; ids exist only for roster validation and
/// stable serialization.
#[derive(Resource, Clone, Debug)]
pub struct Roster {
    pub characters: Vec<CharacterRecord>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            characters: builtin_catalog(),
        }
    }
}

impl Roster {
    /// Parse and validate a RON roster. Rejects empty rosters, duplicate
    /// ids, and out-of-range stats.
    pub fn from_ron(source: &str) -> Result<Self, String> {
        let characters: Vec<CharacterRecord> =
            ron::from_str(source).map_err(|e| format!("roster parse error: {}", e))?;
        let roster = Self { characters };
        roster.validate()?;
        Ok(roster)
    }

    /// Load a roster file, or fall back to the built-in catalog.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read roster '{}': {}", path, e))?;
        Self::from_ron(&source)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.characters.is_empty() {
            return Err("roster is empty".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        for record in &self.characters {
            if record.id.trim().is_empty() {
                return Err(format!("character '{}' has an empty id", record.name));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(format!("duplicate character id '{}'", record.id));
            }
            for (label, value) in [
                ("power", record.stats.power),
                ("speed", record.stats.speed),
                ("defense", record.stats.defense),
                ("utility", record.stats.utility),
            ] {
                if value > 100 {
                    return Err(format!(
                        "character '{}': {} stat {} exceeds 100",
                        record.id, label, value
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> &CharacterRecord {
        &self.characters[index % self.characters.len()]
    }
}

/// The embedded default catalog.
pub fn builtin_catalog() -> Vec<CharacterRecord> {
    vec![
        CharacterRecord {
            id: "char_1".to_string(),
            name: "IRONCLAD".to_string(),
            role: Role::Tank,
            description: "A heavily armored supersoldier. The bulwark against the darkness."
                .to_string(),
            color: "#ff00ff".to_string(),
            stats: CharacterStats {
                power: 90,
                speed: 20,
                defense: 100,
                utility: 30,
            },
            geometry: GeometrySymbol::Box,
        },
        CharacterRecord {
            id: "char_2".to_string(),
            name: "VIPER".to_string(),
            role: Role::Speed,
            description:
                "An elite infiltrator with cybernetic reflex enhancers. Too fast to track."
                    .to_string(),
            color: "#00f3ff".to_string(),
            stats: CharacterStats {
                power: 50,
                speed: 100,
                defense: 30,
                utility: 70,
            },
            geometry: GeometrySymbol::Sphere,
        },
        CharacterRecord {
            id: "char_3".to_string(),
            name: "MYSTIC".to_string(),
            role: Role::Magic,
            description: "A psionic operative capable of manipulating local energy fields."
                .to_string(),
            color: "#eaff00".to_string(),
            stats: CharacterStats {
                power: 95,
                speed: 45,
                defense: 40,
                utility: 90,
            },
            geometry: GeometrySymbol::Torus,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        let roster = Roster::default();
        assert!(roster.validate().is_ok());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let roster = Roster { characters: vec![] };
        assert!(roster.validate().is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut characters = builtin_catalog();
        characters[2].id = characters[0].id.clone();
        let roster = Roster { characters };
        let err = roster.validate().unwrap_err();
        assert!(err.contains("duplicate"), "unexpected error: {}", err);
    }

    #[test]
    fn test_stat_over_100_rejected() {
        let mut characters = builtin_catalog();
        characters[0].stats.utility = 101;
        let roster = Roster { characters };
        assert!(roster.validate().is_err());
    }

    #[test]
    fn test_ron_round_trip() {
        let source = r##"[
            (
                id: "solo",
                name: "SOLO",
                role: Tank,
                description: "Alone.",
                color: "#ffffff",
                stats: (power: 10, speed: 20, defense: 30, utility: 40),
                geometry: box,
            ),
        ]"##;
        let roster = Roster::from_ron(source).expect("parse roster");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).name, "SOLO");
        assert_eq!(roster.get(0).geometry, GeometrySymbol::Box);
        assert_eq!(roster.get(0).stats.defense, 30);
    }

    #[test]
    fn test_tint_parses_hex() {
        let record = &builtin_catalog()[0];
        let tint = record.tint().to_srgba();
        assert!(tint.red > 0.99);
        assert!(tint.green < 0.01);
        assert!(tint.blue > 0.99);
    }

    #[test]
    fn test_tint_fallback_on_garbage() {
        let mut record = builtin_catalog()[0].clone();
        record.color = "not-a-color".to_string();
        assert_eq!(record.tint(), Color::WHITE);
    }

    #[test]
    fn test_build_table_proportions() {
        let tank = Role::Tank.build();
        let speed = Role::Speed.build();
        let standard = Role::Magic.build();

        assert!(tank.torso.x > standard.torso.x);
        assert!(standard.torso.x > speed.torso.x);
        assert!(tank.arm_thickness > speed.arm_thickness);
        assert!(tank.head_scale > standard.head_scale);
        assert!(speed.head_scale < standard.head_scale);

        // Only the scout leans, only the weaver gets a halo.
        assert!(speed.lean > 0.0);
        assert_eq!(tank.lean, 0.0);
        assert!(Role::Magic.has_halo());
        assert!(!Role::Tank.has_halo());
        assert!(!Role::Speed.has_halo());
    }

    #[test]
    fn test_unknown_role_falls_back_to_standard_build() {
        assert_eq!(Role::Unaligned.build(), Role::Magic.build());
        assert!(!Role::Unaligned.has_halo());
    }
}
