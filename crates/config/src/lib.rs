//! Shared configuration for the bathroom viewer
//!
//! Window defaults and the environment-driven viewer settings shared by the
//! native and WASM builds.

use serde::{Deserialize, Serialize};

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 720;

/// Environment variable naming the theme selected at startup
pub const THEME_ENV: &str = "BATHROOM_THEME";

/// Environment variable fixing the seed for the decorative layout jitter
pub const SEED_ENV: &str = "BATHROOM_SEED";

/// Page query parameter naming the theme selected at startup (browser build)
pub const THEME_QUERY_KEY: &str = "theme";

/// Page query parameter fixing the jitter seed (browser build)
pub const SEED_QUERY_KEY: &str = "seed";

/// Display configuration for the native window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Viewer settings resolved at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Theme name selected at startup. Unknown names render as the light theme.
    pub initial_theme: String,
    /// Seed for the decorative jitter; `None` lets the entry point pick one
    pub jitter_seed: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_theme: "light".to_string(),
            jitter_seed: None,
        }
    }
}

impl ViewerConfig {
    /// Read `BATHROOM_THEME` and `BATHROOM_SEED` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing or malformed values keep
    /// their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            initial_theme: lookup(THEME_ENV)
                .map(|theme| theme.trim().to_string())
                .filter(|theme| !theme.is_empty())
                .unwrap_or(defaults.initial_theme),
            jitter_seed: lookup(SEED_ENV).and_then(|seed| seed.trim().parse().ok()),
        }
    }

    /// Build from decoded page query parameters (`theme`, `seed`)
    pub fn from_query_params(param: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(|key| match key {
            THEME_ENV => param(THEME_QUERY_KEY),
            SEED_ENV => param(SEED_QUERY_KEY),
            _ => None,
        })
    }
}
