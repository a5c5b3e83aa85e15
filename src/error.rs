//! Error types
//!
//! Failures specific to the hover effect. GPU and window plumbing keeps using
//! `anyhow` and converts these with `?`.

/// Errors raised while configuring or building the effect.
#[derive(Debug, thiserror::Error)]
pub enum HoverError {
    /// The render container has no area to draw into.
    #[error("render container is empty ({width}x{height}); it must exist before initialization")]
    EmptyContainer { width: u32, height: u32 },

    /// A colour string could not be parsed.
    #[error("invalid colour {0:?}; expected #rgb, #rrggbb, black or white")]
    InvalidColor(String),

    /// A font weight outside the CSS range.
    #[error("invalid font weight {0}; expected 1..=1000")]
    InvalidFontWeight(u16),

    /// The device cannot hold even a clamped text texture.
    #[error("text texture of {width}x{height} exceeds device limit {limit}")]
    TextureTooLarge { width: u32, height: u32, limit: u32 },
}
