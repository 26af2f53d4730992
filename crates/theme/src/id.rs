//! Theme identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::palette::ThemePalette;

/// One of the seven selectable themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Light,
    Dark,
    Beach,
    Modern,
    Vintage,
    Forest,
    Sunset,
}

impl ThemeId {
    /// All themes in selector order
    pub const ALL: [ThemeId; 7] = [
        ThemeId::Light,
        ThemeId::Dark,
        ThemeId::Beach,
        ThemeId::Modern,
        ThemeId::Vintage,
        ThemeId::Forest,
        ThemeId::Sunset,
    ];

    /// Lowercase identifier used on the wire and as the selector value
    pub fn name(self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
            ThemeId::Beach => "beach",
            ThemeId::Modern => "modern",
            ThemeId::Vintage => "vintage",
            ThemeId::Forest => "forest",
            ThemeId::Sunset => "sunset",
        }
    }

    /// Human-readable label shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            ThemeId::Light => "Light",
            ThemeId::Dark => "Dark",
            ThemeId::Beach => "Beach",
            ThemeId::Modern => "Modern",
            ThemeId::Vintage => "Vintage",
            ThemeId::Forest => "Forest",
            ThemeId::Sunset => "Sunset",
        }
    }

    /// Parse a theme name, falling back to the default theme for anything
    /// outside the closed set (including the empty string)
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Palette for this theme
    pub fn palette(self) -> &'static ThemePalette {
        ThemePalette::for_theme(self)
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
