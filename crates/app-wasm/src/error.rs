//! Errors raised while wiring the browser shell

use bathroom_ipc::IpcError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Ipc(#[from] IpcError),
}

impl From<JsValue> for ShellError {
    fn from(value: JsValue) -> Self {
        ShellError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Report a shell error on the browser console
pub fn report(context: &str, error: &ShellError) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}
