//! Grid-quantized mouse displacement
//!
//! CPU mirror of the fragment stage in `shaders/hover.wgsl`. The shader and
//! these functions must stay formula-for-formula identical.

use glam::Vec2;

/// Tuning for the displacement field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    /// Number of cells per UV axis.
    pub grid_size: f32,
    /// Radius in UV space beyond which the effect vanishes.
    pub radius: f32,
    /// Multiplier applied to the mouse movement vector.
    pub intensity: f32,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            grid_size: 40.0,
            radius: 0.3,
            intensity: 0.3,
        }
    }
}

impl DistortionParams {
    /// Pack into the `params` vec4 of the material uniform.
    pub fn to_uniform(&self) -> [f32; 4] {
        [self.grid_size, self.radius, self.intensity, 0.0]
    }
}

/// GLSL/WGSL `smoothstep`. Works with `edge0 > edge1` for a falling edge.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quantize `uv` to its grid cell and return the sampling point for the cell.
///
/// The point is the cell origin plus one full cell on each axis.
pub fn grid_cell_center(uv: Vec2, grid_size: f32) -> Vec2 {
    let cell = (uv * grid_size).floor() / grid_size;
    cell + Vec2::splat(1.0 / grid_size)
}

/// Falloff for a cell at `distance` from the mouse: 1 at the cursor, 0 past `radius`.
pub fn strength(distance: f32, radius: f32) -> f32 {
    smoothstep(radius, 0.0, distance)
}

/// Offset subtracted from `uv` before sampling.
pub fn uv_offset(uv: Vec2, mouse: Vec2, prev_mouse: Vec2, params: &DistortionParams) -> Vec2 {
    let center = grid_cell_center(uv, params.grid_size);
    let mouse_direction = mouse - prev_mouse;
    let distance = (center - mouse).length();
    strength(distance, params.radius) * -mouse_direction * params.intensity
}

/// The UV actually sampled for a fragment at `uv`.
pub fn displaced_uv(uv: Vec2, mouse: Vec2, prev_mouse: Vec2, params: &DistortionParams) -> Vec2 {
    uv - uv_offset(uv, mouse, prev_mouse, params)
}
