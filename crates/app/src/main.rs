//! Bathroom - themeable 3D bathroom viewer

use std::time::{SystemTime, UNIX_EPOCH};

use bathroom_config::{DisplayConfig, ViewerConfig};
use bathroom_scene::{OutboundUiMessages, ScenePlugin};
use bathroom_theme::ThemeId;
use bevy::prelude::*;
use bevy::window::WindowResolution;

mod hotkeys;
mod picker;

fn main() {
    // Parse configuration from environment
    let config = ViewerConfig::from_env();
    let initial_theme = ThemeId::from_name_or_default(&config.initial_theme);
    let jitter_seed = config.jitter_seed.unwrap_or_else(clock_seed);

    // Display configuration - single source of truth for window size
    let display_config = DisplayConfig::default();

    let window_config = Window {
        title: "Bathroom".into(),
        resolution: WindowResolution::new(display_config.width, display_config.height),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    );

    info!(
        "Starting Bathroom with theme {} (jitter seed {})",
        initial_theme, jitter_seed
    );

    app.add_plugins(ScenePlugin {
        initial_theme,
        jitter_seed,
    })
    .add_plugins(picker::ThemePickerPlugin)
    .add_plugins(hotkeys::HotkeysPlugin)
    .add_systems(Last, log_outbound_messages)
    .run();
}

/// Seed from the wall clock when none is configured
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// The native picker reads scene state directly, so outbound messages are
/// only logged
fn log_outbound_messages(mut outbound: ResMut<OutboundUiMessages>) {
    if outbound.messages.is_empty() {
        return;
    }
    for msg in outbound.drain() {
        match msg.to_json() {
            Ok(json) => debug!("Scene -> UI: {}", json),
            Err(e) => warn!("Failed to serialize UI message: {}", e),
        }
    }
}
