//! Selection overlay UI
//!
//! Header, prev/next arrows, the character info card with stat bars, and
//! the confirm button. The root is visible only while selecting; contents
//! refresh whenever the selection changes.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::select3d::types::*;

const CARD_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.4);
const CARD_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);
const TRACK_BACKGROUND: Color = Color::srgb(0.12, 0.12, 0.14);
const MUTED_TEXT: Color = Color::srgb(0.6, 0.6, 0.65);

const ARROW_IDLE: Color = Color::srgba(0.0, 0.0, 0.0, 0.2);
const ARROW_HOVERED: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);
const CONFIRM_IDLE: Color = Color::srgb(0.95, 0.95, 0.95);
const CONFIRM_HOVERED: Color = Color::srgb(0.0, 0.95, 1.0);

/// Build the overlay once on startup.
pub fn setup_overlay(mut commands: Commands, roster: Res<Roster>) {
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
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(32.0)),
                ..default()
            },
            ZIndex(10),
            OverlayRoot,
        ))
        .with_children(|root| {
            spawn_header(root);
            spawn_nav_arrows(root);
            spawn_footer(root, first);
        });
}

fn spawn_header(root: &mut ChildSpawnerCommands) {
    root.spawn(Node {
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(8.0),
        ..default()
    })
    .with_children(|header| {
        header.spawn((
            Text::new("MAKE IT SIMPLE"),
            TextFont {
                font_size: 52.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
        header.spawn((
            Text::new("Choose your avatar. Break the simulation."),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(MUTED_TEXT),
        ));
    });
}

fn spawn_nav_arrows(root: &mut ChildSpawnerCommands) {
    root.spawn(Node {
        position_type: PositionType::Absolute,
        left: Val::Px(0.0),
        right: Val::Px(0.0),
        top: Val::Px(0.0),
        bottom: Val::Px(0.0),
        flex_direction: FlexDirection::Row,
        justify_content: JustifyContent::SpaceBetween,
        align_items: AlignItems::Center,
        padding: UiRect::axes(Val::Px(32.0), Val::Px(0.0)),
        ..default()
    })
    .with_children(|row| {
        for (label, marker) in [("<", true), (">", false)] {
            let mut button = row.spawn((
                Button,
                Node {
                    width: Val::Px(56.0),
                    height: Val::Px(56.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(ARROW_IDLE),
                BorderColor::all(CARD_BORDER),
                BorderRadius::all(Val::Px(28.0)),
            ));
            if marker {
                button.insert(PrevButton);
            } else {
                button.insert(NextButton);
            }
            button.with_children(|b| {
                b.spawn((
                    Text::new(label),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        }
    });
}

fn spawn_footer(root: &mut ChildSpawnerCommands, first: &CharacterRecord) {
    root.spawn(Node {
        flex_direction: FlexDirection::Row,
        justify_content: JustifyContent::SpaceBetween,
        align_items: AlignItems::FlexEnd,
        column_gap: Val::Px(32.0),
        ..default()
    })
    .with_children(|footer| {
        // Info card
        footer
            .spawn((
                Node {
                    width: Val::Px(384.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(24.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                BackgroundColor(CARD_BACKGROUND),
                BorderColor::all(CARD_BORDER),
                BorderRadius::all(Val::Px(16.0)),
            ))
            .with_children(|card| {
                card.spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Baseline,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new(first.name.clone()),
                        TextFont {
                            font_size: 30.0,
                            ..default()
                        },
                        TextColor(first.tint()),
                        NameText,
                    ));
                    row.spawn((
                        Text::new(first.role.title()),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.8, 0.8, 0.8)),
                        RoleText,
                    ));
                });

                card.spawn((
                    Text::new(first.description.clone()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(MUTED_TEXT),
                    Node {
                        margin: UiRect::bottom(Val::Px(12.0)),
                        ..default()
                    },
                    DescriptionText,
                ));

                for stat in StatKind::BARS {
                    spawn_stat_bar(card, stat, first);
                }
            });

        // Confirm button
        footer
            .spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(48.0), Val::Px(16.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(CONFIRM_IDLE),
                ConfirmButton,
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new("CONFIRM SELECT"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::BLACK),
                ));
            });
    });
}

fn spawn_stat_bar(card: &mut ChildSpawnerCommands, stat: StatKind, record: &CharacterRecord) {
    let value = stat.value(record);

    card.spawn(Node {
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(12.0),
        ..default()
    })
    .with_children(|row| {
        row.spawn((
            Text::new(stat.label()),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(MUTED_TEXT),
            Node {
                width: Val::Px(48.0),
                ..default()
            },
        ));

        row.spawn((
            Node {
                flex_grow: 1.0,
                height: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(TRACK_BACKGROUND),
            BorderRadius::all(Val::Px(4.0)),
        ))
        .with_children(|track| {
            track.spawn((
                Node {
                    width: Val::Percent(stat_percent(value)),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(record.tint()),
                BorderRadius::all(Val::Px(4.0)),
                StatBarFill { stat },
            ));
        });

        row.spawn((
            Text::new(format!("{}", value)),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                width: Val::Px(28.0),
                ..default()
            },
            StatValueText { stat },
        ));
    });
}

/// Show the overlay only while selecting.
pub fn sync_overlay_visibility(
    selection: Res<SelectionState>,
    mut overlay_query: Query<&mut Visibility, With<OverlayRoot>>,
) {
    for mut visibility in overlay_query.iter_mut() {
        *visibility = if selection.mode() == ViewMode::Selecting {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Refresh the info card whenever the selection changes.
#[allow(clippy::type_complexity)]
pub fn refresh_overlay_panel(
    selection: Res<SelectionState>,
    roster: Res<Roster>,
    mut name_query: Query<(&mut Text, &mut TextColor), With<NameText>>,
    mut role_query: Query<&mut Text, (With<RoleText>, Without<NameText>)>,
    mut description_query: Query<
        &mut Text,
        (With<DescriptionText>, Without<NameText>, Without<RoleText>),
    >,
    mut fill_query: Query<(&StatBarFill, &mut Node, &mut BackgroundColor)>,
    mut value_query: Query<
        (&StatValueText, &mut Text),
        (Without<NameText>, Without<RoleText>, Without<DescriptionText>),
    >,
) {
    if !selection.is_changed() {
        return;
    }

    let record = roster.get(selection.index());
    let tint = record.tint();

    for (mut text, mut color) in name_query.iter_mut() {
        text.0 = record.name.clone();
        color.0 = tint;
    }
    for mut text in role_query.iter_mut() {
        text.0 = record.role.title().to_string();
    }
    for mut text in description_query.iter_mut() {
        text.0 = record.description.clone();
    }
    for (fill, mut node, mut background) in fill_query.iter_mut() {
        node.width = Val::Percent(stat_percent(fill.stat.value(record)));
        background.0 = tint;
    }
    for (value, mut text) in value_query.iter_mut() {
        text.0 = format!("{}", value.stat.value(record));
    }
}

/// Prev/next/confirm button handling, with hover feedback.
#[allow(clippy::type_complexity)]
pub fn handle_nav_buttons(
    mut selection: ResMut<SelectionState>,
    mut prev_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<PrevButton>),
    >,
    mut next_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<NextButton>, Without<PrevButton>),
    >,
    mut confirm_query: Query<
        (&Interaction, &mut BackgroundColor),
        (
            Changed<Interaction>,
            With<ConfirmButton>,
            Without<PrevButton>,
            Without<NextButton>,
        ),
    >,
) {
    for (interaction, mut background) in prev_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                selection.prev();
            }
            Interaction::Hovered => background.0 = ARROW_HOVERED,
            Interaction::None => background.0 = ARROW_IDLE,
        }
    }
    for (interaction, mut background) in next_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                selection.next();
            }
            Interaction::Hovered => background.0 = ARROW_HOVERED,
            Interaction::None => background.0 = ARROW_IDLE,
        }
    }
    for (interaction, mut background) in confirm_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                selection.confirm();
            }
            Interaction::Hovered => background.0 = CONFIRM_HOVERED,
            Interaction::None => background.0 = CONFIRM_IDLE,
        }
    }
}
