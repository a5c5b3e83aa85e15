//! Orthographic camera

use glam::{Mat4, Vec3};

/// Viewport information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Get the aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Orthographic camera looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl OrthographicCamera {
    /// Camera spanning [-1, 1] horizontally and [-1/aspect, 1/aspect]
    /// vertically, one unit in front of the origin.
    pub fn for_aspect(aspect: f32) -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: 1.0 / aspect,
            bottom: -1.0 / aspect,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position - Vec3::Z, Vec3::Y)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_for_aspect() {
        let camera = OrthographicCamera::for_aspect(2.0);
        assert_eq!(camera.top, 0.5);
        assert_eq!(camera.bottom, -0.5);
        assert_eq!((camera.left, camera.right), (-1.0, 1.0));
    }

    #[test]
    fn test_corners_map_to_clip_edges() {
        let camera = OrthographicCamera::for_aspect(2.0);
        let vp = camera.view_projection_matrix();

        let corner = vp.project_point3(Vec3::new(1.0, 0.5, 0.0));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);
        assert!(corner.z > 0.0 && corner.z < 1.0);

        let origin = vp.project_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-6 && origin.y.abs() < 1e-6);
    }

    #[test]
    fn test_viewport_aspect() {
        let viewport = Viewport {
            x: 0,
            y: 0,
            width: 1600,
            height: 900,
        };
        assert!((viewport.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }
}
