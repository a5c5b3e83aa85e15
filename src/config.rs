//! Effect configuration
//!
//! Builder-style settings for [`HoverTextEffect`](crate::effect::HoverTextEffect).

use crate::distortion::DistortionParams;
use crate::error::HoverError;
use crate::input::{EaseSettings, InputWiring};
use crate::text::{Rgb, TextStyle};

/// Settings for the hover effect.
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// Text and how to draw it.
    pub style: TextStyle,
    /// Displacement field tuning.
    pub distortion: DistortionParams,
    /// Smoothing coefficients.
    pub ease: EaseSettings,
    /// Colour behind the quad.
    pub clear_color: Rgb,
    /// MSAA samples; 1 disables antialiasing.
    pub sample_count: u32,
    /// How enter/leave events are dispatched.
    pub wiring: InputWiring,
    /// Rasterize the text again whenever the window is resized.
    pub regenerate_on_resize: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            style: TextStyle::default(),
            distortion: DistortionParams::default(),
            ease: EaseSettings::default(),
            clear_color: Rgb::WHITE,
            sample_count: 4,
            wiring: InputWiring::Dedicated,
            regenerate_on_resize: false,
        }
    }
}

impl EffectConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the displayed text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.style.text = text.into();
        self
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = family.into();
        self
    }

    /// Set the font size in canvas pixels; `None` derives it from the canvas width.
    pub fn font_size(mut self, size: Option<f32>) -> Self {
        self.style.font_size = size;
        self
    }

    /// Set the background colour from a CSS-style string.
    pub fn fill_color(mut self, color: &str) -> Result<Self, HoverError> {
        self.style.fill_color = Rgb::parse(color)?;
        Ok(self)
    }

    /// Set the font weight (1..=1000).
    pub fn font_weight(mut self, weight: u16) -> Result<Self, HoverError> {
        if weight == 0 || weight > 1000 {
            return Err(HoverError::InvalidFontWeight(weight));
        }
        self.style.font_weight = weight;
        Ok(self)
    }

    /// Set the displacement parameters.
    pub fn distortion(mut self, distortion: DistortionParams) -> Self {
        self.distortion = distortion;
        self
    }

    /// Set the ease factors.
    pub fn ease(mut self, ease: EaseSettings) -> Self {
        self.ease = ease;
        self
    }

    /// Set the clear colour.
    pub fn clear_color(mut self, color: Rgb) -> Self {
        self.clear_color = color;
        self
    }

    /// Set the MSAA sample count.
    pub fn sample_count(mut self, count: u32) -> Self {
        self.sample_count = count.max(1);
        self
    }

    /// Set the event wiring.
    pub fn wiring(mut self, wiring: InputWiring) -> Self {
        self.wiring = wiring;
        self
    }

    /// Set whether resizes regenerate the texture.
    pub fn regenerate_on_resize(mut self, enabled: bool) -> Self {
        self.regenerate_on_resize = enabled;
        self
    }
}
