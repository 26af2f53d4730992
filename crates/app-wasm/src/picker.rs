//! DOM theme picker
//!
//! A `<select>` overlaid on the canvas. Changes are queued on the bridge as
//! [`UiToScene::SelectTheme`], so page-driven and picker-driven selections
//! take the same path into the scene.

use bathroom_ipc::{ThemeOption, UiToScene};
use bathroom_scene::ViewportState;
use bathroom_theme::ThemeId;
use bevy::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlOptionElement, HtmlSelectElement};

use crate::bridge;
use crate::error::ShellError;

/// Element id of the picker
pub const PICKER_ID: &str = "bathroom-theme-picker";

const PICKER_STYLES: [(&str, &str); 4] = [
    ("position", "absolute"),
    ("top", "10px"),
    ("left", "10px"),
    ("z-index", "1"),
];

/// A mounted picker; removed from the document on drop
pub struct DomThemePicker {
    element: HtmlSelectElement,
    on_change: Closure<dyn FnMut(Event)>,
}

impl DomThemePicker {
    /// Create the picker, select `current` and append it to the body
    pub fn mount(document: &Document, current: ThemeId) -> Result<Self, ShellError> {
        let body = document.body().ok_or(ShellError::NoBody)?;

        let element: HtmlSelectElement = document
            .create_element("select")?
            .dyn_into()
            .map_err(|_| ShellError::Dom("created element is not a <select>".to_string()))?;
        element.set_id(PICKER_ID);

        let style = element.style();
        for (property, value) in PICKER_STYLES {
            style.set_property(property, value)?;
        }

        for option in ThemeOption::all() {
            let entry = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)?;
            element.append_child(&entry)?;
        }
        element.set_value(current.name());

        let on_change = Closure::wrap(Box::new(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            bridge::queue_ui_message(UiToScene::SelectTheme {
                theme: select.value(),
            });
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;

        body.append_child(&element)?;

        Ok(Self { element, on_change })
    }

    /// Show `theme` as selected without raising a change event
    pub fn show(&self, theme: ThemeId) {
        if self.element.value() != theme.name() {
            self.element.set_value(theme.name());
        }
    }
}

impl Drop for DomThemePicker {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref());
        self.element.remove();
    }
}

/// Keep the picker in step with selections made through the bridge
pub fn sync_dom_picker(state: Res<ViewportState>, picker: Option<NonSend<DomThemePicker>>) {
    if !state.is_changed() {
        return;
    }
    if let Some(picker) = picker {
        picker.show(state.theme);
    }
}
