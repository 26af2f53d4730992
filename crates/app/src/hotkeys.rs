//! Keyboard shortcuts
//!
//! - 1 to 7: Select the theme at that position in the picker
//! - Home: Reset the camera to its starting view

use bathroom_scene::{OrbitCamera, ThemeSelected};
use bathroom_theme::ThemeId;
use bevy::prelude::*;

const THEME_KEYS: [KeyCode; 7] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
];

pub struct HotkeysPlugin;

impl Plugin for HotkeysPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_theme_hotkeys, handle_reset_camera_hotkey));
    }
}

/// Theme bound to a key, if any
pub fn theme_for_key(key: KeyCode) -> Option<ThemeId> {
    THEME_KEYS
        .iter()
        .position(|k| *k == key)
        .map(|index| ThemeId::ALL[index])
}

fn handle_theme_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    mut selections: MessageWriter<ThemeSelected>,
) {
    if let Some(theme) = key_input.get_just_pressed().find_map(|key| theme_for_key(*key)) {
        info!("Selecting theme {} (hotkey)", theme);
        selections.write(ThemeSelected::from(theme));
    }
}

fn handle_reset_camera_hotkey(
    key_input: Res<ButtonInput<KeyCode>>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if !key_input.just_pressed(KeyCode::Home) {
        return;
    }
    for mut orbit in cameras.iter_mut() {
        orbit.reset();
    }
    info!("Camera reset (Home)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_map_to_themes() {
        assert_eq!(theme_for_key(KeyCode::Digit1), Some(ThemeId::Light));
        assert_eq!(theme_for_key(KeyCode::Digit7), Some(ThemeId::Sunset));
        assert_eq!(theme_for_key(KeyCode::Digit8), None);
        assert_eq!(theme_for_key(KeyCode::KeyA), None);
    }

    #[test]
    fn test_every_theme_has_a_key() {
        for (index, theme) in ThemeId::ALL.iter().enumerate() {
            assert_eq!(theme_for_key(THEME_KEYS[index]), Some(*theme));
        }
    }
}
