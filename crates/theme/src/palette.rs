//! Palette table and lookup

use serde::{Deserialize, Serialize};

use crate::id::ThemeId;

/// One of the six color roles a theme supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteSlot {
    Wall,
    Floor,
    Sink,
    TileLine,
    Mirror,
    Mat,
}

impl PaletteSlot {
    pub const ALL: [PaletteSlot; 6] = [
        PaletteSlot::Wall,
        PaletteSlot::Floor,
        PaletteSlot::Sink,
        PaletteSlot::TileLine,
        PaletteSlot::Mirror,
        PaletteSlot::Mat,
    ];
}

/// Six CSS colors (named or hex) for theme-linked fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub wall: &'static str,
    pub floor: &'static str,
    pub sink: &'static str,
    pub tile_line: &'static str,
    pub mirror: &'static str,
    pub mat: &'static str,
}

impl ThemePalette {
    /// Color assigned to a slot
    pub fn slot(&self, slot: PaletteSlot) -> &'static str {
        match slot {
            PaletteSlot::Wall => self.wall,
            PaletteSlot::Floor => self.floor,
            PaletteSlot::Sink => self.sink,
            PaletteSlot::TileLine => self.tile_line,
            PaletteSlot::Mirror => self.mirror,
            PaletteSlot::Mat => self.mat,
        }
    }

    pub(crate) fn for_theme(theme: ThemeId) -> &'static ThemePalette {
        match theme {
            ThemeId::Light => &LIGHT,
            ThemeId::Dark => &DARK,
            ThemeId::Beach => &BEACH,
            ThemeId::Modern => &MODERN,
            ThemeId::Vintage => &VINTAGE,
            ThemeId::Forest => &FOREST,
            ThemeId::Sunset => &SUNSET,
        }
    }
}

/// Resolve a theme name to its palette.
///
/// Never fails: names outside the closed theme set, including the empty
/// string, resolve to the light palette.
pub fn resolve_palette(theme: &str) -> &'static ThemePalette {
    ThemeId::from_name_or_default(theme).palette()
}

static LIGHT: ThemePalette = ThemePalette {
    wall: "lightblue",
    floor: "gray",
    sink: "white",
    tile_line: "black",
    mirror: "blue",
    mat: "#4169E1",
};

static DARK: ThemePalette = ThemePalette {
    wall: "gray",
    floor: "darkgray",
    sink: "silver",
    tile_line: "white",
    mirror: "black",
    mat: "#2F4F4F",
};

// "sand" is not a CSS color; it renders as the material default
static BEACH: ThemePalette = ThemePalette {
    wall: "skyblue",
    floor: "sand",
    sink: "lightgreen",
    tile_line: "gold",
    mirror: "lightblue",
    mat: "#87CEEB",
};

static MODERN: ThemePalette = ThemePalette {
    wall: "white",
    floor: "lightgray",
    sink: "black",
    tile_line: "gray",
    mirror: "silver",
    mat: "#A9A9A9",
};

static VINTAGE: ThemePalette = ThemePalette {
    wall: "#D1C6B1",
    floor: "#C3B299",
    sink: "#F3E5AB",
    tile_line: "#A68C45",
    mirror: "#B78C56",
    mat: "#DEB887",
};

static FOREST: ThemePalette = ThemePalette {
    wall: "#2E8B57",
    floor: "#556B2F",
    sink: "#8B4513",
    tile_line: "#D2B48C",
    mirror: "#228B22",
    mat: "#8FBC8F",
};

static SUNSET: ThemePalette = ThemePalette {
    wall: "#FF7F50",
    floor: "#FFD700",
    sink: "#FF6347",
    tile_line: "#FF4500",
    mirror: "#FF8C00",
    mat: "#FFA07A",
};
