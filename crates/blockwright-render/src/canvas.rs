use blockwright_core::color::Rgb;
use glam::Vec2;

/// The 2D drawing primitives the renderer needs. Implemented by the browser
/// canvas, the SVG writer and the recording canvas used in tests.
pub trait Canvas {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);

    fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32);

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32);

    /// Global alpha applied to every following draw until changed.
    fn set_alpha(&mut self, alpha: f32);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rgb),
    Fill { points: Vec<Vec2>, color: Rgb, alpha: f32 },
    Stroke { points: Vec<Vec2>, color: Rgb, width: f32, alpha: f32 },
    Line { from: Vec2, to: Vec2, color: Rgb, width: f32, alpha: f32 },
}

/// Canvas that records every call instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
    alpha: f32,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            alpha: 1.0,
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> impl Iterator<Item = (&[Vec2], Rgb, f32)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill { points, color, alpha } => Some((points.as_slice(), *color, *alpha)),
            _ => None,
        })
    }

    pub fn count_lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.ops.push(DrawOp::Fill {
            points: points.to_vec(),
            color,
            alpha: self.alpha,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        self.ops.push(DrawOp::Stroke {
            points: points.to_vec(),
            color,
            width,
            alpha: self.alpha,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
            alpha: self.alpha,
        });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}
