//! Plane geometry

use crate::context::WgpuContext;
use crate::core::buffer::{IndexBuffer, VertexBuffer};
use crate::core::vertex::VertexPU;

/// Corner vertices of a `width` x `height` plane in the XY plane.
///
/// UVs follow the texture-space convention used by the shader: (0, 0) at the
/// bottom-left, v growing upward.
pub fn plane_vertices(width: f32, height: f32) -> [VertexPU; 4] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    [
        VertexPU::new([-hw, hh, 0.0], [0.0, 1.0]),
        VertexPU::new([hw, hh, 0.0], [1.0, 1.0]),
        VertexPU::new([-hw, -hh, 0.0], [0.0, 0.0]),
        VertexPU::new([hw, -hh, 0.0], [1.0, 0.0]),
    ]
}

/// Counter-clockwise triangles for [`plane_vertices`].
pub const PLANE_INDICES: [u16; 6] = [0, 2, 1, 2, 3, 1];

/// A plane mesh on the GPU.
pub struct PlaneGeometry {
    vertices: VertexBuffer,
    indices: IndexBuffer,
}

impl PlaneGeometry {
    /// Upload a plane of the given size centred at the origin.
    pub fn new(ctx: &WgpuContext, width: f32, height: f32) -> Self {
        let vertices = VertexBuffer::new(ctx, &plane_vertices(width, height), Some("plane vertices"));
        let indices = IndexBuffer::new(ctx, &PLANE_INDICES, Some("plane indices"));
        Self { vertices, indices }
    }

    /// Draw the plane. Pipeline and bind groups must already be set.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertices.slice());
        render_pass.set_index_buffer(self.indices.slice(), self.indices.format());
        render_pass.draw_indexed(0..self.indices.count(), 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_spans_size() {
        let vertices = plane_vertices(2.0, 2.0);
        assert_eq!(vertices[0].position, [-1.0, 1.0, 0.0]);
        assert_eq!(vertices[3].position, [1.0, -1.0, 0.0]);
        assert_eq!(vertices[2].uv, [0.0, 0.0]);
        assert_eq!(vertices[1].uv, [1.0, 1.0]);
    }

    #[test]
    fn test_triangles_face_camera() {
        let vertices = plane_vertices(2.0, 2.0);
        for tri in PLANE_INDICES.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| vertices[i as usize].position);
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0, "triangle {:?} is clockwise", tri);
        }
    }
}
