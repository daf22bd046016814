//! The 3-state selector deciding which primitive set gets drawn.

use gl;
use gl::types::GLenum;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawTarget {
    Triangle,
    Line,
    Points,
}

impl DrawTarget {
    /// Cycles Triangle -> Line -> Points -> Triangle. Only mouse presses
    /// call this; releases never reach it.
    pub fn advance(&mut self) {
        *self = match *self {
            DrawTarget::Triangle => DrawTarget::Line,
            DrawTarget::Line => DrawTarget::Points,
            DrawTarget::Points => DrawTarget::Triangle,
        };
    }

    /// Position of this target's buffer pair in the uploaded set.
    pub fn index(self) -> usize {
        match self {
            DrawTarget::Triangle => 0,
            DrawTarget::Line => 1,
            DrawTarget::Points => 2,
        }
    }

    /// The primitive topology used to interpret this target's vertices.
    pub fn mode(self) -> GLenum {
        match self {
            DrawTarget::Triangle => gl::TRIANGLES,
            DrawTarget::Line => gl::LINES,
            DrawTarget::Points => gl::POINTS,
        }
    }
}

/// The ordered draw calls a frame issues for the selected target.
///
/// The original lab demo's draw switch had no break statements, so
/// selecting the triangle also drew the line and the points, and selecting
/// the line also drew the points, every mode reading from whichever vertex
/// array was bound at the time. `cascade` reproduces that behavior;
/// otherwise each state draws exactly its own primitive set.
pub fn draw_plan(selected: DrawTarget, cascade: bool) -> &'static [DrawTarget] {
    use self::DrawTarget::*;

    if cascade {
        match selected {
            Triangle => &[Triangle, Line, Points],
            Line => &[Line, Points],
            Points => &[Points],
        }
    } else {
        match selected {
            Triangle => &[Triangle],
            Line => &[Line],
            Points => &[Points],
        }
    }
}
