//! Message enums for communication between the scene and the UI.

use bathroom_theme::ThemeId;
use serde::{Deserialize, Serialize};

use crate::error::IpcError;

/// Messages from the UI to the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToScene {
    /// Theme picked in the selector. The name is not validated here: names
    /// outside the theme set select the light theme.
    SelectTheme { theme: String },
}

/// Messages from the scene to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SceneToUi {
    /// Initial state sync: selector options and the active theme
    Initialize {
        themes: Vec<ThemeOption>,
        current: ThemeId,
    },

    /// The scene now renders with this theme
    ThemeApplied { theme: ThemeId },

    /// Viewport size in logical pixels
    ViewportResized { width: f32, height: f32 },
}

/// One entry of the theme selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOption {
    pub value: String,
    pub label: String,
}

impl ThemeOption {
    /// Options for every theme, in selector order
    pub fn all() -> Vec<ThemeOption> {
        ThemeId::ALL
            .iter()
            .map(|theme| ThemeOption {
                value: theme.name().to_string(),
                label: theme.label().to_string(),
            })
            .collect()
    }
}

impl UiToScene {
    /// Decode a message from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        if json.trim().is_empty() {
            return Err(IpcError::InvalidFormat("empty message".to_string()));
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl SceneToUi {
    /// Initialization message for the given active theme
    pub fn initialize(current: ThemeId) -> Self {
        SceneToUi::Initialize {
            themes: ThemeOption::all(),
            current,
        }
    }

    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_theme_wire_format() {
        let msg = UiToScene::from_json(r#"{"type":"SelectTheme","data":{"theme":"beach"}}"#)
            .unwrap();
        assert_eq!(
            msg,
            UiToScene::SelectTheme {
                theme: "beach".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_theme_name_still_decodes() {
        let msg =
            UiToScene::from_json(r#"{"type":"SelectTheme","data":{"theme":"neon"}}"#).unwrap();
        assert!(matches!(msg, UiToScene::SelectTheme { theme } if theme == "neon"));
    }

    #[test]
    fn test_invalid_messages_are_errors() {
        assert!(matches!(
            UiToScene::from_json("  "),
            Err(IpcError::InvalidFormat(_))
        ));
        assert!(matches!(
            UiToScene::from_json(r#"{"type":"Explode"}"#),
            Err(IpcError::Serialize(_))
        ));
    }

    #[test]
    fn test_theme_applied_encodes_lowercase_name() {
        let json = SceneToUi::ThemeApplied {
            theme: ThemeId::Forest,
        }
        .to_json()
        .unwrap();
        assert_eq!(json, r#"{"type":"ThemeApplied","data":{"theme":"forest"}}"#);
    }

    #[test]
    fn test_initialize_lists_all_themes() {
        let SceneToUi::Initialize { themes, current } = SceneToUi::initialize(ThemeId::Light)
        else {
            panic!("expected Initialize");
        };
        assert_eq!(current, ThemeId::Light);
        assert_eq!(themes.len(), 7);
        assert_eq!(themes[0].value, "light");
        assert_eq!(themes[0].label, "Light");
        assert_eq!(themes[6].value, "sunset");
    }
}
