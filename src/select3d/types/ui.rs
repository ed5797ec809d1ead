//! UI components for the overlay and splash screens
//!
//! Marker components for every node the refresh systems need to find, plus
//! the stat bar math.

use bevy::prelude::*;

use super::character::CharacterRecord;

// ============================================================================
// Overlay (selecting mode)
// ============================================================================

/// Root node of the selection overlay, shown only while selecting.
#[derive(Component)]
pub struct OverlayRoot;

/// Previous-character arrow button.
#[derive(Component)]
pub struct PrevButton;

/// Next-character arrow button.
#[derive(Component)]
pub struct NextButton;

/// Confirm-selection button.
#[derive(Component)]
pub struct ConfirmButton;

/// Character name heading on the info card.
#[derive(Component)]
pub struct NameText;

/// Role chip on the info card.
#[derive(Component)]
pub struct RoleText;

/// Description paragraph on the info card.
#[derive(Component)]
pub struct DescriptionText;

/// Which stat a bar or value label displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Power,
    Speed,
    Defense,
}

impl StatKind {
    pub const BARS: [StatKind; 3] = [StatKind::Power, StatKind::Speed, StatKind::Defense];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Power => "PWR",
            StatKind::Speed => "SPD",
            StatKind::Defense => "DEF",
        }
    }

    pub fn value(&self, record: &CharacterRecord) -> u8 {
        match self {
            StatKind::Power => record.stats.power,
            StatKind::Speed => record.stats.speed,
            StatKind::Defense => record.stats.defense,
        }
    }
}

/// Colored fill node inside a stat bar track.
#[derive(Component)]
pub struct StatBarFill {
    pub stat: StatKind,
}

/// Numeric value label beside a stat bar.
#[derive(Component)]
pub struct StatValueText {
    pub stat: StatKind,
}

// ============================================================================
// Splash (game mode)
// ============================================================================

/// Root node of the game splash, shown only in game mode.
#[derive(Component)]
pub struct SplashRoot;

/// Confirmed character name on the splash.
#[derive(Component)]
pub struct SplashNameText;

/// Role chip on the splash.
#[derive(Component)]
pub struct SplashRoleText;

/// Geometry chip on the splash.
#[derive(Component)]
pub struct SplashGeometryText;

/// Abort-mission button, routed to `SelectionState::back`.
#[derive(Component)]
pub struct BackButton;

/// Fill width of a stat bar, as a percentage of the track.
///
/// Stats are validated to 0..=100 at roster load; the clamp here only
/// protects the render path.
pub fn stat_percent(value: u8) -> f32 {
    value.min(100) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select3d::types::character::builtin_catalog;

    #[test]
    fn test_stat_percent_endpoints() {
        assert_eq!(stat_percent(0), 0.0);
        assert_eq!(stat_percent(100), 100.0);
        assert_eq!(stat_percent(255), 100.0);
    }

    #[test]
    fn test_stat_percent_is_monotonic_and_proportional() {
        let mut previous = -1.0;
        for value in 0..=100u8 {
            let percent = stat_percent(value);
            assert!(percent > previous);
            assert_eq!(percent, value as f32);
            previous = percent;
        }
    }

    #[test]
    fn test_stat_kind_reads_the_right_field() {
        let record = &builtin_catalog()[0];
        assert_eq!(StatKind::Power.value(record), record.stats.power);
        assert_eq!(StatKind::Speed.value(record), record.stats.speed);
        assert_eq!(StatKind::Defense.value(record), record.stats.defense);
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(StatKind::Power.label(), "PWR");
        assert_eq!(StatKind::Speed.label(), "SPD");
        assert_eq!(StatKind::Defense.label(), "DEF");
    }
}
