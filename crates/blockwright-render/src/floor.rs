use blockwright_grid::GridConfig;
use glam::Vec3;

/// A floor grid line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorLine {
    pub from: Vec3,
    pub to: Vec3,
}

/// Cell boundary lines of the footprint on the ground plane (y = 0), one set
/// along each horizontal axis: (footprint + 1) × 2 segments.
///
/// Lines sit on the same plane the ground pick resolves against, so a click
/// inside a drawn cell lands on that cell.
pub fn floor_lines(config: &GridConfig) -> Vec<FloorLine> {
    let (lo, hi) = config.footprint_range();
    let min = lo as f32 - 0.5;
    let max = hi as f32 - 0.5;

    let mut lines = Vec::with_capacity(2 * (config.footprint() as usize + 1));
    for i in lo..=hi {
        let b = i as f32 - 0.5;
        // Parallel to z
        lines.push(FloorLine {
            from: Vec3::new(b, 0.0, min),
            to: Vec3::new(b, 0.0, max),
        });
        // Parallel to x
        lines.push(FloorLine {
            from: Vec3::new(min, 0.0, b),
            to: Vec3::new(max, 0.0, b),
        });
    }
    lines
}
