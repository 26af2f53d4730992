//! IPC message protocol for the bathroom viewer
//!
//! Defines the JSON messages exchanged between a host UI (the browser page
//! around the WASM canvas) and the Bevy scene.

mod error;
mod messages;

pub use error::IpcError;
pub use messages::{SceneToUi, ThemeOption, UiToScene};
