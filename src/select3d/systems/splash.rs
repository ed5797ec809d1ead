//! Confirmation splash screen
//!
//! Full-screen panel shown once the confirm countdown finishes. Presents
//! the chosen character and an abort button that returns to the carousel.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::select3d::types::*;

const SPLASH_BACKGROUND: Color = Color::srgba(0.02, 0.02, 0.02, 0.96);
const KICKER_CYAN: Color = Color::srgb(0.0, 0.95, 1.0);
const CHIP_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.2);
const MUTED_TEXT: Color = Color::srgb(0.55, 0.55, 0.6);

const BACK_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.06);
const BACK_HOVERED: Color = Color::srgba(1.0, 0.2, 0.2, 0.25);

/// Build the splash screen, hidden until a selection is confirmed.
pub fn setup_splash(mut commands: Commands, roster: Res<Roster>) {
    let first = roster.get(0);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(SPLASH_BACKGROUND),
            ZIndex(50),
            Visibility::Hidden,
            SplashRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("SIMULATION INITIALIZED"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(KICKER_CYAN),
            ));

            root.spawn((
                Text::new(first.name.clone()),
                TextFont {
                    font_size: 96.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                SplashNameText,
            ));

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|chips| {
                spawn_chip(chips, first.role.title(), SplashRoleText);
                spawn_chip(chips, geometry_label(first.geometry), SplashGeometryText);
            });

            root.spawn((
                Text::new(
                    "System synchronization complete. Your avatar has been \
                     compiled into the void. Stand by for deployment.",
                ),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
                Node {
                    max_width: Val::Px(420.0),
                    margin: UiRect::vertical(Val::Px(12.0)),
                    ..default()
                },
            ));

            root.spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(40.0), Val::Px(14.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    margin: UiRect::top(Val::Px(16.0)),
                    ..default()
                },
                BackgroundColor(BACK_IDLE),
                BorderColor::all(CHIP_BORDER),
                BorderRadius::all(Val::Px(4.0)),
                BackButton,
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new("ABORT MISSION"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            // Corner readouts
            root.spawn((
                Text::new("SYS.VER.2.0.4"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(24.0),
                    bottom: Val::Px(24.0),
                    ..default()
                },
            ));
            root.spawn((
                Text::new("CONNECTED"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(KICKER_CYAN),
                Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(24.0),
                    bottom: Val::Px(24.0),
                    ..default()
                },
            ));
        });
}

fn spawn_chip(parent: &mut ChildSpawnerCommands, label: &str, marker: impl Component) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor::all(CHIP_BORDER),
            BorderRadius::all(Val::Px(4.0)),
        ))
        .with_children(|chip| {
            chip.spawn((
                Text::new(label.to_string()),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                marker,
            ));
        });
}

fn geometry_label(symbol: GeometrySymbol) -> &'static str {
    match symbol {
        GeometrySymbol::Box => "GEOMETRY: BOX",
        GeometrySymbol::Sphere => "GEOMETRY: SPHERE",
        GeometrySymbol::Torus => "GEOMETRY: TORUS",
    }
}

/// Toggle splash visibility and refresh its text when a run begins.
#[allow(clippy::type_complexity)]
pub fn refresh_splash_screen(
    selection: Res<SelectionState>,
    roster: Res<Roster>,
    mut root_query: Query<&mut Visibility, With<SplashRoot>>,
    mut name_query: Query<(&mut Text, &mut TextColor), With<SplashNameText>>,
    mut role_query: Query<&mut Text, (With<SplashRoleText>, Without<SplashNameText>)>,
    mut geometry_query: Query<
        &mut Text,
        (
            With<SplashGeometryText>,
            Without<SplashNameText>,
            Without<SplashRoleText>,
        ),
    >,
) {
    if !selection.is_changed() {
        return;
    }

    let in_game = selection.mode() == ViewMode::Game;

    for mut visibility in root_query.iter_mut() {
        *visibility = if in_game {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    if !in_game {
        return;
    }

    let record = roster.get(selection.index());
    for (mut text, mut color) in name_query.iter_mut() {
        text.0 = record.name.clone();
        color.0 = record.tint();
    }
    for mut text in role_query.iter_mut() {
        text.0 = record.role.title().to_string();
    }
    for mut text in geometry_query.iter_mut() {
        text.0 = geometry_label(record.geometry).to_string();
    }
}

/// Abort button returns to the carousel.
#[allow(clippy::type_complexity)]
pub fn handle_back_button(
    mut selection: ResMut<SelectionState>,
    mut back_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<BackButton>),
    >,
) {
    for (interaction, mut background) in back_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                selection.back();
            }
            Interaction::Hovered => background.0 = BACK_HOVERED,
            Interaction::None => background.0 = BACK_IDLE,
        }
    }
}
