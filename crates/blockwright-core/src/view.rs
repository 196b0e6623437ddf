use glam::{Vec2, Vec3};

use crate::constants::*;

/// Orbit/zoom/pan state of the build view. Angles are in degrees.
///
/// Fields are private so every mutation goes through the clamping rules:
/// yaw stays in [0, 360), pitch in [PITCH_MIN_DEG, PITCH_MAX_DEG], zoom in
/// [ZOOM_MIN, ZOOM_MAX].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    yaw: f32,
    pitch: f32,
    zoom: f32,
    pan: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW_DEG,
            pitch: DEFAULT_PITCH_DEG,
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewState {
    /// Build a view from raw values, applying the clamping rules.
    pub fn new(yaw: f32, pitch: f32, zoom: f32, pan: Vec2) -> Self {
        let mut view = Self::default();
        view.set_yaw(yaw);
        view.set_pitch(pitch);
        view.set_zoom(zoom);
        view.pan = pan;
        view
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn yaw_rad(&self) -> f32 {
        self.yaw.to_radians()
    }

    pub fn pitch_rad(&self) -> f32 {
        self.pitch.to_radians()
    }

    pub fn set_yaw(&mut self, deg: f32) {
        self.yaw = wrap_degrees(deg);
    }

    pub fn set_pitch(&mut self, deg: f32) {
        if deg.is_finite() {
            self.pitch = deg.clamp(PITCH_MIN_DEG, PITCH_MAX_DEG);
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Orbit by the given yaw/pitch deltas in degrees.
    pub fn rotate_by(&mut self, d_yaw: f32, d_pitch: f32) {
        self.set_yaw(self.yaw + d_yaw);
        self.set_pitch(self.pitch + d_pitch);
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Multiply zoom by `factor` (clamped), keeping the screen point under
    /// `pointer` fixed. `center` is the canvas center in the same pixel space.
    pub fn zoom_at(&mut self, factor: f32, pointer: Vec2, center: Vec2) {
        let old = self.zoom;
        self.set_zoom(old * factor);
        let ratio = self.zoom / old;
        // A screen point s = iso*unit*zoom + pan + center scales about pan+center.
        self.pan -= (pointer - center - self.pan) * (ratio - 1.0);
    }

    /// Restore the canonical view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// World-space direction the camera looks along. A face with
    /// `normal · view_direction() < 0` faces the camera.
    pub fn view_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw_rad().sin_cos();
        let (sp, cp) = self.pitch_rad().sin_cos();
        Vec3::new(-sy * cp, -sp, -cy * cp)
    }
}

/// Wrap an angle into [0, 360).
pub fn wrap_degrees(deg: f32) -> f32 {
    if !deg.is_finite() {
        return 0.0;
    }
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let v = ViewState::default();
        assert_eq!(v.yaw(), 45.0);
        assert_eq!(v.pitch(), 30.0);
        assert_eq!(v.zoom(), 1.0);
        assert_eq!(v.pan(), Vec2::ZERO);
    }

    #[test]
    fn test_yaw_wraps() {
        let mut v = ViewState::default();
        v.set_yaw(370.0);
        assert!((v.yaw() - 10.0).abs() < 1e-4);
        v.set_yaw(-10.0);
        assert!((v.yaw() - 350.0).abs() < 1e-4);
        v.set_yaw(360.0);
        assert_eq!(v.yaw(), 0.0);
        v.set_yaw(-1e-7);
        assert!(v.yaw() >= 0.0 && v.yaw() < 360.0);
    }

    #[test]
    fn test_yaw_wraps_over_many_turns() {
        let mut v = ViewState::default();
        for _ in 0..1000 {
            v.rotate_by(7.3, 0.0);
            assert!(v.yaw() >= 0.0 && v.yaw() < 360.0, "yaw {}", v.yaw());
        }
        for _ in 0..1000 {
            v.rotate_by(-11.1, 0.0);
            assert!(v.yaw() >= 0.0 && v.yaw() < 360.0, "yaw {}", v.yaw());
        }
    }

    #[test]
    fn test_pitch_clamps() {
        let mut v = ViewState::default();
        v.rotate_by(0.0, 500.0);
        assert_eq!(v.pitch(), PITCH_MAX_DEG);
        v.rotate_by(0.0, -500.0);
        assert_eq!(v.pitch(), PITCH_MIN_DEG);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut v = ViewState::default();
        v.set_zoom(6.0);
        assert_eq!(v.zoom(), ZOOM_MAX);
        v.set_zoom(0.01);
        assert_eq!(v.zoom(), ZOOM_MIN);
        v.set_zoom(f32::NAN);
        assert_eq!(v.zoom(), ZOOM_MIN);
    }

    #[test]
    fn test_repeated_zoom_in_stops_at_max() {
        let mut v = ViewState::default();
        let center = Vec2::new(400.0, 300.0);
        for _ in 0..100 {
            v.zoom_at(ZOOM_STEP, Vec2::new(123.0, 45.0), center);
            assert!(v.zoom() <= ZOOM_MAX);
        }
        assert_eq!(v.zoom(), ZOOM_MAX);
    }

    #[test]
    fn test_zoom_keeps_pointer_fixed() {
        let center = Vec2::new(400.0, 300.0);
        let pointer = Vec2::new(520.0, 210.0);
        let mut v = ViewState::new(45.0, 30.0, 1.3, Vec2::new(-35.0, 12.0));

        // Screen-space offset of a content point currently under the pointer.
        let iso = (pointer - center - v.pan()) / v.zoom();
        v.zoom_at(1.5, pointer, center);
        let after = iso * v.zoom() + v.pan() + center;
        assert!((after - pointer).length() < 1e-3, "moved to {after}");
    }

    #[test]
    fn test_zoom_at_limit_leaves_pan() {
        let mut v = ViewState::new(45.0, 30.0, ZOOM_MAX, Vec2::new(5.0, 5.0));
        v.zoom_at(2.0, Vec2::new(0.0, 0.0), Vec2::new(400.0, 300.0));
        assert_eq!(v.pan(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_reset() {
        let mut v = ViewState::new(200.0, -40.0, 3.0, Vec2::new(10.0, 20.0));
        v.reset();
        assert_eq!(v, ViewState::default());
    }

    #[test]
    fn test_view_direction_is_unit() {
        for (yaw, pitch) in [(0.0, 0.0), (45.0, 30.0), (200.0, -70.0)] {
            let v = ViewState::new(yaw, pitch, 1.0, Vec2::ZERO);
            assert!((v.view_direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_default_view_sees_top_right_front() {
        let d = ViewState::default().view_direction();
        assert!(d.dot(Vec3::Y) < 0.0);
        assert!(d.dot(Vec3::X) < 0.0);
        assert!(d.dot(Vec3::Z) < 0.0);
    }
}
