//! Vertex tables used by the lectures and the attribute layouts that
//! describe them.
//!
//! All tables are interleaved `f32` data. A [`VertexLayout`] says which float
//! components feed which shader attribute location.

use glam::Vec3;

/// One vertex attribute inside an interleaved float buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader `layout (location = N)`.
    pub location: u32,
    /// Number of floats.
    pub components: i32,
    /// Offset from the start of the vertex, in floats.
    pub offset: usize,
}

/// How an interleaved float buffer is split into attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub attributes: &'static [VertexAttribute],
    /// Floats per vertex.
    pub stride: usize,
}

impl VertexLayout {
    pub const fn byte_stride(&self) -> i32 {
        (self.stride * size_of::<f32>()) as i32
    }

    pub const fn byte_offset(attribute: &VertexAttribute) -> i32 {
        (attribute.offset * size_of::<f32>()) as i32
    }

    /// Number of whole vertices in `data`.
    pub fn vertex_count(&self, data: &[f32]) -> usize {
        data.len() / self.stride
    }
}

const fn attr(location: u32, components: i32, offset: usize) -> VertexAttribute {
    VertexAttribute {
        location,
        components,
        offset,
    }
}

/// Position (3) and color (3).
pub const POSITION_COLOR: VertexLayout = VertexLayout {
    attributes: &[attr(0, 3, 0), attr(1, 3, 3)],
    stride: 6,
};

/// Position (3), color (3) and texture coordinates (2).
pub const POSITION_COLOR_UV: VertexLayout = VertexLayout {
    attributes: &[attr(0, 3, 0), attr(1, 3, 3), attr(2, 2, 6)],
    stride: 8,
};

/// Position (3) and texture coordinates (2).
pub const POSITION_UV: VertexLayout = VertexLayout {
    attributes: &[attr(0, 3, 0), attr(1, 2, 3)],
    stride: 5,
};

/// Position (3), normal (3) and texture coordinates (2).
pub const POSITION_NORMAL_UV: VertexLayout = VertexLayout {
    attributes: &[attr(0, 3, 0), attr(1, 3, 3), attr(2, 2, 6)],
    stride: 8,
};

/// Only the position out of a position/normal/uv buffer. Used for lamps.
pub const POSITION_ONLY_OF_NORMAL_UV: VertexLayout = VertexLayout {
    attributes: &[attr(0, 3, 0)],
    stride: 8,
};

#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 18] = [
    // positions        // colors
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0, // bottom left
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0, // top
];

#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 32] = [
    // positions        // colors         // uv
     0.5,  0.5, 0.0,    1.0, 0.0, 0.0,    1.0, 1.0, // top right
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,    1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 0.0, 1.0,    0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,    1.0, 1.0, 0.0,    0.0, 1.0, // top left
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

#[rustfmt::skip]
pub const LIT_CUBE_VERTICES: [f32; 288] = [
    // positions          // normals           // uv
    -0.5, -0.5, -0.5,     0.0,  0.0, -1.0,     0.0, 0.0,
     0.5, -0.5, -0.5,     0.0,  0.0, -1.0,     1.0, 0.0,
     0.5,  0.5, -0.5,     0.0,  0.0, -1.0,     1.0, 1.0,
     0.5,  0.5, -0.5,     0.0,  0.0, -1.0,     1.0, 1.0,
    -0.5,  0.5, -0.5,     0.0,  0.0, -1.0,     0.0, 1.0,
    -0.5, -0.5, -0.5,     0.0,  0.0, -1.0,     0.0, 0.0,

    -0.5, -0.5,  0.5,     0.0,  0.0,  1.0,     0.0, 0.0,
     0.5, -0.5,  0.5,     0.0,  0.0,  1.0,     1.0, 0.0,
     0.5,  0.5,  0.5,     0.0,  0.0,  1.0,     1.0, 1.0,
     0.5,  0.5,  0.5,     0.0,  0.0,  1.0,     1.0, 1.0,
    -0.5,  0.5,  0.5,     0.0,  0.0,  1.0,     0.0, 1.0,
    -0.5, -0.5,  0.5,     0.0,  0.0,  1.0,     0.0, 0.0,

    -0.5,  0.5,  0.5,    -1.0,  0.0,  0.0,     1.0, 0.0,
    -0.5,  0.5, -0.5,    -1.0,  0.0,  0.0,     1.0, 1.0,
    -0.5, -0.5, -0.5,    -1.0,  0.0,  0.0,     0.0, 1.0,
    -0.5, -0.5, -0.5,    -1.0,  0.0,  0.0,     0.0, 1.0,
    -0.5, -0.5,  0.5,    -1.0,  0.0,  0.0,     0.0, 0.0,
    -0.5,  0.5,  0.5,    -1.0,  0.0,  0.0,     1.0, 0.0,

     0.5,  0.5,  0.5,     1.0,  0.0,  0.0,     1.0, 0.0,
     0.5,  0.5, -0.5,     1.0,  0.0,  0.0,     1.0, 1.0,
     0.5, -0.5, -0.5,     1.0,  0.0,  0.0,     0.0, 1.0,
     0.5, -0.5, -0.5,     1.0,  0.0,  0.0,     0.0, 1.0,
     0.5, -0.5,  0.5,     1.0,  0.0,  0.0,     0.0, 0.0,
     0.5,  0.5,  0.5,     1.0,  0.0,  0.0,     1.0, 0.0,

    -0.5, -0.5, -0.5,     0.0, -1.0,  0.0,     0.0, 1.0,
     0.5, -0.5, -0.5,     0.0, -1.0,  0.0,     1.0, 1.0,
     0.5, -0.5,  0.5,     0.0, -1.0,  0.0,     1.0, 0.0,
     0.5, -0.5,  0.5,     0.0, -1.0,  0.0,     1.0, 0.0,
    -0.5, -0.5,  0.5,     0.0, -1.0,  0.0,     0.0, 0.0,
    -0.5, -0.5, -0.5,     0.0, -1.0,  0.0,     0.0, 1.0,

    -0.5,  0.5, -0.5,     0.0,  1.0,  0.0,     0.0, 1.0,
     0.5,  0.5, -0.5,     0.0,  1.0,  0.0,     1.0, 1.0,
     0.5,  0.5,  0.5,     0.0,  1.0,  0.0,     1.0, 0.0,
     0.5,  0.5,  0.5,     0.0,  1.0,  0.0,     1.0, 0.0,
    -0.5,  0.5,  0.5,     0.0,  1.0,  0.0,     0.0, 0.0,
    -0.5,  0.5, -0.5,     0.0,  1.0,  0.0,     0.0, 1.0,
];

/// World positions of the lit containers.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// World positions of the point lights.
pub const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

/// Position of the standalone lamp cube.
pub const LAMP_POSITION: Vec3 = Vec3::new(1.2, 1.0, 2.0);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fits(layout: &VertexLayout, data: &[f32], vertices: usize) {
        assert_eq!(data.len() % layout.stride, 0);
        assert_eq!(layout.vertex_count(data), vertices);
        for attribute in layout.attributes {
            assert!(attribute.offset + attribute.components as usize <= layout.stride);
        }
    }

    #[test]
    fn test_tables_match_layouts() {
        assert_fits(&POSITION_COLOR, &TRIANGLE_VERTICES, 3);
        assert_fits(&POSITION_COLOR_UV, &QUAD_VERTICES, 4);
        assert_fits(&POSITION_UV, &CUBE_VERTICES, 36);
        assert_fits(&POSITION_NORMAL_UV, &LIT_CUBE_VERTICES, 36);
        assert_fits(&POSITION_ONLY_OF_NORMAL_UV, &LIT_CUBE_VERTICES, 36);
    }

    #[test]
    fn test_quad_indices_in_range() {
        let count = POSITION_COLOR_UV.vertex_count(&QUAD_VERTICES) as u32;
        assert!(QUAD_INDICES.iter().all(|&i| i < count));
    }

    #[test]
    fn test_byte_offsets() {
        assert_eq!(POSITION_NORMAL_UV.byte_stride(), 32);
        assert_eq!(VertexLayout::byte_offset(&POSITION_NORMAL_UV.attributes[2]), 24);
    }

    #[test]
    fn test_lit_cube_normals_are_unit_and_face_outward() {
        for vertex in LIT_CUBE_VERTICES.chunks(8) {
            let position = Vec3::new(vertex[0], vertex[1], vertex[2]);
            let normal = Vec3::new(vertex[3], vertex[4], vertex[5]);
            assert_eq!(normal.length(), 1.0);
            assert!(position.dot(normal) > 0.0);
        }
    }
}
