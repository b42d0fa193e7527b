//! Drawing sink: the boundary between the core and the render backend.
//!
//! The core never issues draw calls itself. Each frame it hands the
//! backend world-space triangle/line/point lists and screen-space text
//! lines through [`DrawSink`]; an immediate-mode GL backend, a retained
//! renderer, or the capturing [`DrawList`] used in tests all fit behind
//! the same trait.

use crate::math::Vector3;
use crate::mesh::Triangle;

/// RGB color, linear components in 0..1.
pub type Color = [f32; 3];

/// Receives one frame's worth of geometry and overlay text.
pub trait DrawSink {
    /// Flat-shaded world-space triangles, one color for the batch.
    fn triangles(&mut self, triangles: &[Triangle], color: Color);

    /// World-space line segments.
    fn lines(&mut self, segments: &[(Vector3, Vector3)], color: Color, width: f32);

    /// World-space points.
    fn points(&mut self, points: &[Vector3], color: Color, size: f32);

    /// Screen-space text at a left margin `x` and line slot `line`.
    fn text(&mut self, x: f32, line: usize, text: &str, scale: f32, color: Color);
}

/// Capturing sink: records everything drawn in a frame. Used by the test
/// harness; also handy for backends that want retained draw lists.
#[derive(Default)]
pub struct DrawList {
    pub triangles: Vec<(Triangle, Color)>,
    pub lines: Vec<((Vector3, Vector3), Color, f32)>,
    pub points: Vec<(Vector3, Color, f32)>,
    pub texts: Vec<(usize, String, Color)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
        self.points.clear();
        self.texts.clear();
    }

    /// Text line at a given slot, if present.
    pub fn text_line(&self, line: usize) -> Option<&str> {
        self.texts
            .iter()
            .find(|(slot, _, _)| *slot == line)
            .map(|(_, text, _)| text.as_str())
    }
}

impl DrawSink for DrawList {
    fn triangles(&mut self, triangles: &[Triangle], color: Color) {
        self.triangles
            .extend(triangles.iter().map(|tri| (*tri, color)));
    }

    fn lines(&mut self, segments: &[(Vector3, Vector3)], color: Color, width: f32) {
        self.lines
            .extend(segments.iter().map(|seg| (*seg, color, width)));
    }

    fn points(&mut self, points: &[Vector3], color: Color, size: f32) {
        self.points.extend(points.iter().map(|p| (*p, color, size)));
    }

    fn text(&mut self, _x: f32, line: usize, text: &str, _scale: f32, color: Color) {
        self.texts.push((line, text.to_string(), color));
    }
}
