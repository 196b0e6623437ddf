use blockwright_core::constants::{
    DEFAULT_FOOTPRINT, DEFAULT_GRID_HEIGHT, MAX_FOOTPRINT, MAX_GRID_HEIGHT,
};
use blockwright_core::types::GridCoord;

/// Bounds of the build area: a square footprint centered at the origin and a
/// maximum stack height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    footprint: u32,
    max_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            footprint: DEFAULT_FOOTPRINT,
            max_height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Values outside `1..=MAX_FOOTPRINT` / `1..=MAX_GRID_HEIGHT` are clamped.
    pub fn new(footprint: u32, max_height: u32) -> Self {
        Self {
            footprint: footprint.clamp(1, MAX_FOOTPRINT),
            max_height: max_height.clamp(1, MAX_GRID_HEIGHT),
        }
    }

    pub fn footprint(&self) -> u32 {
        self.footprint
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Half-open horizontal range `[lo, hi)` covered by the footprint on
    /// both the x and z axes. An even footprint of 10 covers -5..5.
    pub fn footprint_range(&self) -> (i32, i32) {
        let lo = -(self.footprint as i32) / 2;
        (lo, lo + self.footprint as i32)
    }

    pub fn in_footprint(&self, x: i32, z: i32) -> bool {
        let (lo, hi) = self.footprint_range();
        (lo..hi).contains(&x) && (lo..hi).contains(&z)
    }

    pub fn in_height(&self, y: i32) -> bool {
        y >= 0 && y < self.max_height as i32
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.in_footprint(coord.x, coord.z) && self.in_height(coord.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn test_even_footprint_range() {
        let cfg = GridConfig::new(10, 5);
        assert_eq!(cfg.footprint_range(), (-5, 5));
        assert!(cfg.in_footprint(-5, 4));
        assert!(!cfg.in_footprint(5, 0));
        assert!(!cfg.in_footprint(0, -6));
    }

    #[test]
    fn test_odd_footprint_is_centered() {
        let cfg = GridConfig::new(5, 5);
        assert_eq!(cfg.footprint_range(), (-2, 3));
        assert!(cfg.in_footprint(-2, 2));
        assert!(!cfg.in_footprint(3, 0));
    }

    #[test]
    fn test_height_range() {
        let cfg = GridConfig::new(4, 3);
        assert!(cfg.contains(IVec3::new(0, 0, 0)));
        assert!(cfg.contains(IVec3::new(0, 2, 0)));
        assert!(!cfg.contains(IVec3::new(0, 3, 0)));
        assert!(!cfg.contains(IVec3::new(0, -1, 0)));
    }

    #[test]
    fn test_new_clamps() {
        let cfg = GridConfig::new(0, 1000);
        assert_eq!(cfg.footprint(), 1);
        assert_eq!(cfg.max_height(), MAX_GRID_HEIGHT);
    }
}
