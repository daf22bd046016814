//! The three fixed vertex datasets and their GPU-side buffer pairs.

use gl::types::GLint;

use crate::graphics::opengl::{set_vertex_attrib, GlVertexArray, GlVertexBuffer};

/// Every vertex is a 4-component (x, y, z, w) position.
pub const COMPONENTS: usize = 4;

pub const TRIANGLE: [f32; 12] = [
    0.8, -0.8, 0.0, 1.0,
    0.0, 0.8, 0.0, 1.0,
    -0.8, -0.8, 0.0, 1.0,
];

pub const LINE: [f32; 8] = [
    0.0, 0.0, 0.0, 1.0,
    1.0, 1.0, 0.0, 1.0,
];

pub const POINTS: [f32; 8] = [
    0.75, 0.75, 0.0, 1.0,
    0.25, 0.25, 0.0, 1.0,
];

pub fn vertex_count_of(data: &[f32]) -> usize {
    data.len() / COMPONENTS
}

/// One dataset uploaded to the GPU: a vertex array object, the buffer it
/// references, and the number of vertices it holds.
pub struct PrimitiveSet {
    vao: GlVertexArray,
    // Referenced by the VAO; must stay alive as long as it does.
    _vbo: GlVertexBuffer,
    vertex_count: GLint,
}

impl PrimitiveSet {
    pub fn upload(data: &[f32]) -> Self {
        let vao = GlVertexArray::generate();
        vao.bind();

        let vbo = GlVertexBuffer::init(data);
        set_vertex_attrib(0, COMPONENTS as GLint);

        Self {
            vao,
            _vbo: vbo,
            vertex_count: vertex_count_of(data) as GLint,
        }
    }

    pub fn bind(&self) {
        self.vao.bind();
    }

    pub fn vertex_count(&self) -> GLint {
        self.vertex_count
    }
}

/// Uploads all three datasets, indexed by `DrawTarget::index`.
pub fn upload_all() -> [PrimitiveSet; 3] {
    [
        PrimitiveSet::upload(&TRIANGLE),
        PrimitiveSet::upload(&LINE),
        PrimitiveSet::upload(&POINTS),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn datasets_hold_three_two_and_two_vertices() {
        assert_eq!(vertex_count_of(&TRIANGLE), 3);
        assert_eq!(vertex_count_of(&LINE), 2);
        assert_eq!(vertex_count_of(&POINTS), 2);
    }

    #[test]
    fn datasets_are_whole_vertices() {
        assert_eq!(TRIANGLE.len() % COMPONENTS, 0);
        assert_eq!(LINE.len() % COMPONENTS, 0);
        assert_eq!(POINTS.len() % COMPONENTS, 0);
    }

    #[test]
    fn every_vertex_has_unit_w() {
        for data in &[&TRIANGLE[..], &LINE[..], &POINTS[..]] {
            for vertex in data.chunks(COMPONENTS) {
                assert_eq!(vertex[3], 1.0);
            }
        }
    }

    #[test]
    fn selector_indices_line_up_with_dataset_counts() {
        use crate::scene::selector::DrawTarget;

        let datasets: [&[f32]; 3] = [&TRIANGLE, &LINE, &POINTS];

        assert_eq!(vertex_count_of(datasets[DrawTarget::Triangle.index()]), 3);
        assert_eq!(vertex_count_of(datasets[DrawTarget::Line.index()]), 2);
        assert_eq!(vertex_count_of(datasets[DrawTarget::Points.index()]), 2);
    }

    #[test]
    fn triangle_matches_the_original_constants() {
        assert_eq!(&TRIANGLE[0..4], &[0.8, -0.8, 0.0, 1.0]);
        assert_eq!(&TRIANGLE[4..8], &[0.0, 0.8, 0.0, 1.0]);
        assert_eq!(&TRIANGLE[8..12], &[-0.8, -0.8, 0.0, 1.0]);
    }
}
