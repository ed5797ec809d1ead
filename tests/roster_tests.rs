//! Roster loading integration tests
//!
//! Parse real RON roster files from disk and exercise validation and the
//! role/build mapping end to end.

use std::io::Write;

use voidlink::select3d::{GeometrySymbol, Role, Roster, StatKind};

fn write_temp_roster(contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "voidlink_roster_{}_{}.ron",
        std::process::id(),
        contents.len()
    ));
    let mut file = std::fs::File::create(&path).expect("create temp roster");
    file.write_all(contents.as_bytes()).expect("write roster");
    path
}

#[test]
fn test_load_roster_file_from_disk() {
    let path = write_temp_roster(
        r##"[
        (
            id: "echo",
            name: "ECHO",
            role: Speed,
            description: "Forked from a corrupted scout template.",
            color: "#33ddaa",
            stats: (power: 40, speed: 95, defense: 25, utility: 60),
            geometry: sphere,
        ),
        (
            id: "basalt",
            name: "BASALT",
            role: Tank,
            description: "Walking siege platform.",
            color: "#aa4400",
            stats: (power: 85, speed: 15, defense: 98, utility: 20),
            geometry: box,
        ),
    ]"##,
    );

    let roster = Roster::load_from_file(&path.to_string_lossy()).expect("load roster");
    std::fs::remove_file(&path).ok();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(0).name, "ECHO");
    assert_eq!(roster.get(0).role, Role::Speed);
    assert_eq!(roster.get(1).geometry, GeometrySymbol::Box);
    assert_eq!(StatKind::Defense.value(roster.get(1)), 98);
}

#[test]
fn test_missing_file_is_an_error() {
    let result = Roster::load_from_file("/nonexistent/voidlink/roster.ron");
    assert!(result.is_err());
}

#[test]
fn test_invalid_roster_file_rejected() {
    let path = write_temp_roster(
        r##"[
        (
            id: "dup",
            name: "A",
            role: Tank,
            description: "",
            color: "#ffffff",
            stats: (power: 1, speed: 1, defense: 1, utility: 1),
            geometry: box,
        ),
        (
            id: "dup",
            name: "B",
            role: Speed,
            description: "",
            color: "#ffffff",
            stats: (power: 1, speed: 1, defense: 1, utility: 1),
            geometry: sphere,
        ),
    ]"##,
    );

    let err = Roster::load_from_file(&path.to_string_lossy()).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(err.contains("duplicate"), "unexpected error: {}", err);
}

#[test]
fn test_unknown_role_deserializes_as_unaligned() {
    let roster = Roster::from_ron(
        r##"[
        (
            id: "mystery",
            name: "MYSTERY",
            role: Trickster,
            description: "Role minted after this build shipped.",
            color: "#808080",
            stats: (power: 50, speed: 50, defense: 50, utility: 50),
            geometry: torus,
        ),
    ]"##,
    )
    .expect("unknown roles must not fail the load");

    let record = roster.get(0);
    assert_eq!(record.role, Role::Unaligned);
    // Unaligned falls back to the standard build without a halo.
    assert_eq!(record.role.build(), Role::Magic.build());
    assert!(!record.role.has_halo());
}

#[test]
fn test_builtin_catalog_covers_every_role() {
    let roster = Roster::default();
    let roles: Vec<Role> = roster.characters.iter().map(|c| c.role).collect();
    assert!(roles.contains(&Role::Tank));
    assert!(roles.contains(&Role::Speed));
    assert!(roles.contains(&Role::Magic));
}
