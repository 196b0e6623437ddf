use blockwright_core::constants::{GROUND_EPSILON, UNIT_SIZE};
use blockwright_core::view::{ViewState, Viewport};
use glam::{Vec2, Vec3};

/// A projected world point: pixel position plus an ordering depth.
/// Larger depth is nearer the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub screen: Vec2,
    pub depth: f32,
}

/// Orthographic yaw/pitch projection from grid space to canvas pixels.
///
/// Trig terms are computed once per projector, so build one per draw pass or
/// pick query rather than per point.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    sin_yaw: f32,
    cos_yaw: f32,
    sin_pitch: f32,
    cos_pitch: f32,
    scale: f32,
    origin: Vec2,
}

impl Projector {
    pub fn new(view: &ViewState, viewport: Viewport) -> Self {
        let (sin_yaw, cos_yaw) = view.yaw_rad().sin_cos();
        let (sin_pitch, cos_pitch) = view.pitch_rad().sin_cos();
        Self {
            sin_yaw,
            cos_yaw,
            sin_pitch,
            cos_pitch,
            scale: UNIT_SIZE * view.zoom(),
            origin: view.pan() + viewport.center(),
        }
    }

    /// Rotate by yaw about Y, then by pitch about the lateral axis.
    /// Returns (iso_x, iso_y, depth) before the view transform.
    fn rotate(&self, p: Vec3) -> (f32, f32, f32) {
        let x1 = p.x * self.cos_yaw - p.z * self.sin_yaw;
        let z1 = p.x * self.sin_yaw + p.z * self.cos_yaw;
        let y2 = p.y * self.cos_pitch - z1 * self.sin_pitch;
        let z2 = p.y * self.sin_pitch + z1 * self.cos_pitch;
        (x1, -y2, z2)
    }

    pub fn project(&self, p: Vec3) -> ProjectedPoint {
        let (iso_x, iso_y, depth) = self.rotate(p);
        ProjectedPoint {
            screen: Vec2::new(iso_x, iso_y) * self.scale + self.origin,
            depth,
        }
    }

    /// Depth of a world point without the screen transform.
    pub fn depth(&self, p: Vec3) -> f32 {
        self.rotate(p).2
    }

    /// Ground-plane (`y = 0`) cell under a screen point, rounded to the
    /// nearest cell. `None` when the view is too close to edge-on for the
    /// ground to be resolved.
    pub fn screen_to_ground(&self, screen: Vec2) -> Option<(i32, i32)> {
        let (x, z) = self.screen_to_ground_exact(screen)?;
        Some((x.round() as i32, z.round() as i32))
    }

    /// Unrounded ground-plane coordinates under a screen point.
    pub fn screen_to_ground_exact(&self, screen: Vec2) -> Option<(f32, f32)> {
        if self.sin_pitch.abs() < GROUND_EPSILON || self.scale <= 0.0 {
            return None;
        }
        let iso = (screen - self.origin) / self.scale;
        // On y = 0: iso_y = z1 * sin(pitch), iso_x = x1. Undo the yaw rotation.
        let z1 = iso.y / self.sin_pitch;
        let x = iso.x * self.cos_yaw + z1 * self.sin_yaw;
        let z = -iso.x * self.sin_yaw + z1 * self.cos_yaw;
        if x.is_finite() && z.is_finite() {
            Some((x, z))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector(yaw: f32, pitch: f32, zoom: f32, pan: Vec2) -> Projector {
        Projector::new(&ViewState::new(yaw, pitch, zoom, pan), Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_origin_projects_to_center_plus_pan() {
        let p = projector(45.0, 30.0, 1.0, Vec2::new(12.0, -8.0));
        let pt = p.project(Vec3::ZERO);
        assert!((pt.screen - Vec2::new(412.0, 292.0)).length() < 1e-4);
        assert_eq!(pt.depth, 0.0);
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let p = projector(45.0, 30.0, 1.0, Vec2::ZERO);
        let low = p.project(Vec3::ZERO);
        let high = p.project(Vec3::Y);
        assert!(high.screen.y < low.screen.y);
    }

    #[test]
    fn test_depth_matches_view_direction() {
        let view = ViewState::new(120.0, -25.0, 1.0, Vec2::ZERO);
        let p = Projector::new(&view, Viewport::default());
        let toward_camera = -view.view_direction();
        let a = Vec3::new(1.0, 2.0, -3.0);
        let b = a + toward_camera;
        assert!((p.depth(b) - p.depth(a) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_ground_round_trip() {
        let views = [
            (45.0, 30.0, 1.0, Vec2::ZERO),
            (10.0, 60.0, 2.0, Vec2::new(30.0, -20.0)),
            (200.0, 15.0, 0.5, Vec2::new(-100.0, 40.0)),
            (300.0, -45.0, 3.0, Vec2::ZERO),
            (135.0, 80.0, 1.0, Vec2::ZERO),
        ];
        for (yaw, pitch, zoom, pan) in views {
            let p = projector(yaw, pitch, zoom, pan);
            for x in -5..5 {
                for z in -5..5 {
                    let pt = p.project(Vec3::new(x as f32, 0.0, z as f32));
                    assert_eq!(
                        p.screen_to_ground(pt.screen),
                        Some((x, z)),
                        "yaw {yaw} pitch {pitch}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_ground_round_trip_at_right_angle_yaw() {
        for yaw in [90.0, 270.0] {
            let p = projector(yaw, 30.0, 1.0, Vec2::ZERO);
            let pt = p.project(Vec3::new(3.0, 0.0, -2.0));
            assert_eq!(p.screen_to_ground(pt.screen), Some((3, -2)));
        }
    }

    #[test]
    fn test_ground_degenerate_at_level_pitch() {
        let p = projector(45.0, 0.0, 1.0, Vec2::ZERO);
        assert_eq!(p.screen_to_ground(Vec2::new(400.0, 300.0)), None);
        let p = projector(45.0, 0.01, 1.0, Vec2::ZERO);
        assert_eq!(p.screen_to_ground(Vec2::new(410.0, 280.0)), None);
    }
}
