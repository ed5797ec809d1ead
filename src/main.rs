// Hide console window on Windows for release builds (GUI app).
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use voidlink::select3d::{
    animate_avatars,
    animate_halo_motes,
    animate_role_sigils,
    animate_selection_rings,
    drive_camera,
    handle_avatar_picking,
    handle_back_button,
    handle_keyboard_input,
    handle_nav_buttons,
    refresh_overlay_panel,
    refresh_splash_screen,
    rotate_carousel,
    setup,
    setup_overlay,
    setup_splash,
    sync_overlay_visibility,
    tick_view_transition,
    update_key_light,
    update_stage_visibility,
    Roster,
    SelectionState,
};

/// Voidlink - 3D character selection
#[derive(Parser)]
#[command(name = "voidlink")]
#[command(author, version, about = "Voidlink - carousel character selection screen")]
struct Cli {
    /// Path to a RON roster file (falls back to the built-in catalog)
    #[arg(short = 'f', long = "roster")]
    roster: Option<PathBuf>,

    /// Index of the initially selected character
    #[arg(long, default_value = "0")]
    start: usize,

    /// Window width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "720")]
    height: u32,
}

fn main() {
    let cli = Cli::parse();

    let roster = match &cli.roster {
        Some(path) => match Roster::load_from_file(&path.to_string_lossy()) {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!(
                    "{} {} (using the built-in catalog)",
                    "Warning:".yellow().bold(),
                    e
                );
                Roster::default()
            }
        },
        None => Roster::default(),
    };

    if cli.start >= roster.len() {
        eprintln!(
            "{} start index {} is out of range for {} characters, clamping",
            "Warning:".yellow().bold(),
            cli.start,
            roster.len()
        );
    }
    let selection = SelectionState::with_start(roster.len(), cli.start);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "VOIDLINK Character Select".to_string(),
                        resolution: (cli.width, cli.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error".to_string(),
                    ..default()
                }),
        )
        .insert_resource(roster)
        .insert_resource(selection)
        .add_systems(Startup, (setup, setup_overlay, setup_splash))
        .add_systems(
            Update,
            (
                // Input feeds the state machine; the countdown advances it.
                handle_keyboard_input,
                handle_avatar_picking,
                handle_nav_buttons,
                handle_back_button,
                tick_view_transition,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                // Scene animation, all derived from the selection state.
                rotate_carousel,
                animate_avatars,
                animate_selection_rings,
                animate_halo_motes,
                animate_role_sigils,
                drive_camera,
                update_key_light,
                update_stage_visibility,
            )
                .after(tick_view_transition),
        )
        .add_systems(
            Update,
            (
                sync_overlay_visibility,
                refresh_overlay_panel,
                refresh_splash_screen,
            )
                .after(tick_view_transition),
        )
        .run();
}
