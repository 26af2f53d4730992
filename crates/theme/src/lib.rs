//! Theme registry for the bathroom viewer
//!
//! A fixed set of themes, each supplying a six-slot color palette. Lookup by
//! name is total: anything outside the closed set resolves to the light theme.

mod error;
mod id;
mod palette;

pub use error::ThemeError;
pub use id::ThemeId;
pub use palette::{PaletteSlot, ThemePalette, resolve_palette};
