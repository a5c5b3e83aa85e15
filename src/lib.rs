//! hover-text
//!
//! A full-window quad showing rasterized text, distorted by a grid-quantized
//! displacement that trails the mouse.
//!
//! # Architecture
//!
//! 1. **context** - Core wgpu wrapper (Device, Queue)
//! 2. **core** - GPU primitives (buffers, textures, pipelines)
//! 3. **text** - CPU text rasterization into the effect texture
//! 4. **distortion** - The displacement formulas the shader evaluates
//! 5. **input** - Pointer tracking and exponential smoothing
//! 6. **renderer** - Camera, quad geometry and the hover material
//! 7. **animation** - Cancellable per-frame scheduling
//! 8. **effect** - `HoverTextEffect`, tying the above together
//! 9. **window** - Window management with winit (feature = "window")

pub mod animation;
pub mod config;
pub mod context;
pub mod core;
pub mod distortion;
pub mod effect;
pub mod error;
pub mod input;
pub mod renderer;
pub mod text;

#[cfg(feature = "window")]
pub mod window;

// Re-export commonly used types
pub use animation::{AnimationLoop, StopHandle};
pub use config::EffectConfig;
pub use context::WgpuContext;
pub use self::core::{
    ClearState, CullState, IndexBuffer, MultisampleTexture, PipelineBuilder,
    Texture2D, UniformBuffer, VertexBuffer, VertexPU,
};
pub use distortion::DistortionParams;
pub use effect::{HoverScene, HoverTextEffect, SceneChange};
pub use error::HoverError;
pub use input::{ContainerRect, EaseSettings, InputTracker, InputWiring};
pub use renderer::{HoverMaterial, HoverUniform, OrthographicCamera, PlaneGeometry, Viewport};
pub use text::{Rgb, TextImage, TextStyle, TextTextureGenerator};

#[cfg(feature = "window")]
pub use window::{Event, FrameInput, FrameOutput, Key, Window, WindowSettings};

// Re-export glam for convenience
pub use glam;
