//! JavaScript bridge for the host page
//!
//! Messages are passed via CustomEvents on the window object: the page
//! dispatches `bathroom:ui-to-scene` with a JSON [`UiToScene`] detail, and the
//! scene answers with `bathroom:scene-to-ui` carrying a JSON [`SceneToUi`].

use std::cell::RefCell;
use std::collections::VecDeque;

use bathroom_ipc::{SceneToUi, UiToScene};
use bathroom_scene::{OutboundUiMessages, ThemeSelected};
use bevy::prelude::*;
use wasm_bindgen::prelude::*;

use crate::error::{self, ShellError};

/// Event the host page dispatches to talk to the scene
pub const UI_TO_SCENE_EVENT: &str = "bathroom:ui-to-scene";

/// Event the scene dispatches to talk to the host page
pub const SCENE_TO_UI_EVENT: &str = "bathroom:scene-to-ui";

thread_local! {
    /// Queue of messages received from the UI
    static MESSAGE_QUEUE: RefCell<VecDeque<UiToScene>> = RefCell::new(VecDeque::new());
}

/// Initialize the JavaScript event listeners
pub fn init_bridge() -> Result<(), ShellError> {
    let window = web_sys::window().ok_or(ShellError::NoWindow)?;

    let closure = Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
        let Some(detail) = event.detail().as_string() else {
            return;
        };
        match UiToScene::from_json(&detail) {
            Ok(msg) => queue_ui_message(msg),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to parse UI message: {}", e).into());
            }
        }
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback(UI_TO_SCENE_EVENT, closure.as_ref().unchecked_ref())?;

    // The listener lives as long as the page
    closure.forget();

    web_sys::console::log_1(&"Bathroom WASM bridge initialized".into());
    Ok(())
}

/// Queue a message as if it came from the UI
pub fn queue_ui_message(msg: UiToScene) {
    MESSAGE_QUEUE.with(|queue| {
        queue.borrow_mut().push_back(msg);
    });
}

/// Poll for the next message from the UI (non-blocking)
pub fn poll_ui_message() -> Option<UiToScene> {
    MESSAGE_QUEUE.with(|queue| queue.borrow_mut().pop_front())
}

/// Send a message to the host page
pub fn send_to_ui(msg: &SceneToUi) -> Result<(), ShellError> {
    let window = web_sys::window().ok_or(ShellError::NoWindow)?;
    let json = msg.to_json()?;

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&json));
    let event = web_sys::CustomEvent::new_with_event_init_dict(SCENE_TO_UI_EVENT, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Plugin moving messages between the bridge queue and the scene
pub struct BridgePlugin;

impl Plugin for BridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, handle_ui_messages)
            .add_systems(Last, forward_outbound_messages);
    }
}

/// System that polls for messages from the UI
fn handle_ui_messages(mut selections: MessageWriter<ThemeSelected>) {
    while let Some(msg) = poll_ui_message() {
        match msg {
            UiToScene::SelectTheme { theme } => {
                selections.write(ThemeSelected(theme));
            }
        }
    }
}

fn forward_outbound_messages(mut outbound: ResMut<OutboundUiMessages>) {
    if outbound.messages.is_empty() {
        return;
    }
    for msg in outbound.drain() {
        if let Err(e) = send_to_ui(&msg) {
            error::report("Failed to send UI message", &e);
        }
    }
}
