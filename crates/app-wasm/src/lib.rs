//! Bathroom Bevy WASM Build
//!
//! This crate compiles the bathroom viewer to WebAssembly. The scene renders
//! to a full-page canvas with a DOM theme picker on top, and the host page can
//! drive it through CustomEvents (see [`bridge`]).

use bathroom_config::ViewerConfig;
use bathroom_scene::ScenePlugin;
use bathroom_theme::ThemeId;
use bevy::prelude::*;
use wasm_bindgen::prelude::*;

pub mod bridge;
pub mod error;
pub mod full_bleed;
pub mod picker;

use error::ShellError;
use full_bleed::{ElementStyle, FullBleedGuard};
use picker::DomThemePicker;

/// Canvas the scene renders into
pub const CANVAS_SELECTOR: &str = "#bathroom-canvas";

/// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Initialize the bridge for messages from the host page
    if let Err(e) = bridge::init_bridge() {
        error::report("Bridge unavailable", &e);
    }

    let config = page_config();
    let initial_theme = ThemeId::from_name_or_default(&config.initial_theme);
    let jitter_seed = config
        .jitter_seed
        .unwrap_or_else(|| js_sys::Date::now() as u64);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(canvas_window()),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    )
    .add_plugins(ScenePlugin {
        initial_theme,
        jitter_seed,
    })
    .add_plugins(BrowserShellPlugin);

    // The page keeps rendering without whichever piece failed
    match mount_full_bleed() {
        Ok(guard) => {
            app.insert_non_send_resource(guard);
        }
        Err(e) => error::report("Full-bleed styles not applied", &e),
    }
    match mount_picker(initial_theme) {
        Ok(picker) => {
            app.insert_non_send_resource(picker);
        }
        Err(e) => error::report("Theme picker not mounted", &e),
    }

    info!("Starting Bathroom (WASM) with theme {}", initial_theme);
    app.run();
}

/// Plugin wiring the browser shell into the scene
pub struct BrowserShellPlugin;

impl Plugin for BrowserShellPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bridge::BridgePlugin)
            .add_systems(PostUpdate, picker::sync_dom_picker);
    }
}

/// Window bound to the page canvas, sized to its parent
fn canvas_window() -> Window {
    Window {
        canvas: Some(CANVAS_SELECTOR.to_string()),
        fit_canvas_to_parent: true,
        ..default()
    }
}

/// Viewer settings from the page query string
fn page_config() -> ViewerConfig {
    let Some(params) = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
    else {
        return ViewerConfig::default();
    };
    ViewerConfig::from_query_params(|name| params.get(name))
}

fn document() -> Result<web_sys::Document, ShellError> {
    web_sys::window()
        .ok_or(ShellError::NoWindow)?
        .document()
        .ok_or(ShellError::NoDocument)
}

fn mount_full_bleed() -> Result<FullBleedGuard<ElementStyle>, ShellError> {
    FullBleedGuard::acquire(ElementStyle::body(&document()?)?)
}

fn mount_picker(current: ThemeId) -> Result<DomThemePicker, ShellError> {
    DomThemePicker::mount(&document()?, current)
}
