//! Error types for theme parsing.

/// Errors produced by strict theme parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
}
