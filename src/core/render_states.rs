//! Render state configurations
//!
//! Small enums and structs that map onto wgpu pipeline and pass state.

/// Clear state for a color attachment.
#[derive(Debug, Clone, Copy)]
pub struct ClearState {
    /// Color the attachment is cleared to before drawing.
    pub color: wgpu::Color,
}

impl ClearState {
    /// Clear to the given color.
    pub fn color(color: wgpu::Color) -> Self {
        Self { color }
    }

    /// Get the wgpu load operation for color.
    pub fn color_load_op(&self) -> wgpu::LoadOp<wgpu::Color> {
        wgpu::LoadOp::Clear(self.color)
    }
}

impl Default for ClearState {
    fn default() -> Self {
        Self::color(wgpu::Color::WHITE)
    }
}

/// Cull mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullState {
    /// No culling.
    None,
    /// Cull back faces.
    #[default]
    Back,
}

impl CullState {
    /// Convert to wgpu cull mode.
    pub fn to_wgpu(&self) -> Option<wgpu::Face> {
        match self {
            CullState::None => None,
            CullState::Back => Some(wgpu::Face::Back),
        }
    }
}
