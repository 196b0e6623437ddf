use std::fmt::Write;

use blockwright_core::color::Rgb;
use blockwright_render::Canvas;
use glam::Vec2;

/// [`Canvas`] that writes an SVG document.
pub struct SvgCanvas {
    width: u32,
    height: u32,
    alpha: f32,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: 1.0,
            body: String::new(),
        }
    }

    /// The complete document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn opacity(&self, attr: &str) -> String {
        if self.alpha < 1.0 {
            format!(" {attr}=\"{:.2}\"", self.alpha)
        } else {
            String::new()
        }
    }
}

fn points_attr(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, color: Rgb) {
        // Everything drawn so far is covered anyway.
        self.body.clear();
        let _ = writeln!(self.body, "<rect width=\"100%\" height=\"100%\" fill=\"{color}\"/>");
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        if points.is_empty() {
            return;
        }
        let opacity = self.opacity("fill-opacity");
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" fill=\"{color}\"{opacity}/>",
            points_attr(points)
        );
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        if points.is_empty() {
            return;
        }
        let opacity = self.opacity("stroke-opacity");
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\" stroke-linejoin=\"round\"{opacity}/>",
            points_attr(points)
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32) {
        let opacity = self.opacity("stroke-opacity");
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{color}\" stroke-width=\"{width}\"{opacity}/>",
            from.x, from.y, to.x, to.y
        );
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let svg = SvgCanvas::new(320, 240).finish();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"320\" height=\"240\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_primitives() {
        let mut canvas = SvgCanvas::new(100, 100);
        canvas.clear(Rgb::from_packed(0xf0f0f0));
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        canvas.fill_polygon(&square, Rgb::from_packed(0xff0000));
        canvas.stroke_polygon(&square, Rgb::from_packed(0x333333), 1.0);
        canvas.line(Vec2::ZERO, Vec2::new(5.0, 5.5), Rgb::from_packed(0xdddddd), 1.0);
        let svg = canvas.finish();

        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#f0f0f0\"/>"));
        assert!(svg.contains(
            "<polygon points=\"0.00,0.00 10.00,0.00 10.00,10.00 0.00,10.00\" fill=\"#ff0000\"/>"
        ));
        assert!(svg.contains("stroke=\"#333333\" stroke-width=\"1\""));
        assert!(svg.contains("<line x1=\"0.00\" y1=\"0.00\" x2=\"5.00\" y2=\"5.50\""));
    }

    #[test]
    fn test_alpha_applies_until_reset() {
        let mut canvas = SvgCanvas::new(10, 10);
        let tri = [Vec2::ZERO, Vec2::X, Vec2::Y];
        canvas.set_alpha(0.5);
        canvas.fill_polygon(&tri, Rgb::from_packed(0x00ff00));
        canvas.set_alpha(1.0);
        canvas.fill_polygon(&tri, Rgb::from_packed(0x0000ff));
        let svg = canvas.finish();
        assert!(svg.contains("fill=\"#00ff00\" fill-opacity=\"0.50\"/>"));
        assert!(svg.contains("fill=\"#0000ff\"/>"));
    }

    #[test]
    fn test_clear_discards_earlier_output() {
        let mut canvas = SvgCanvas::new(10, 10);
        canvas.line(Vec2::ZERO, Vec2::X, Rgb::default(), 1.0);
        canvas.clear(Rgb::from_packed(0xffffff));
        let svg = canvas.finish();
        assert!(!svg.contains("<line"));
        assert_eq!(svg.matches("<rect").count(), 1);
    }
}
