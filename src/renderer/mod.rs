//! Scene pieces: camera, quad geometry and the hover material.

pub mod camera;
pub mod geometry;
pub mod material;

pub use camera::{OrthographicCamera, Viewport};
pub use geometry::PlaneGeometry;
pub use material::{HoverMaterial, HoverUniform};
