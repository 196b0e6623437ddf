use glam::Vec2;

/// Pointer travel (pixels) below which a press-release counts as a click.
pub const CLICK_SLOP_PX: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Key::Space,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// Host-independent input event. Positions are canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Vec2, button: PointerButton },
    PointerMove { pos: Vec2 },
    PointerUp { pos: Vec2, button: PointerButton },
    PointerLeave,
    /// Positive `delta_y` scrolls down (zoom out).
    Wheel { pos: Vec2, delta_y: f32 },
    KeyDown(Key),
    KeyUp(Key),
    Resize { width: f32, height: f32 },
}

/// View change requested by a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragDelta {
    Rotate(Vec2),
    Pan(Vec2),
}

/// A press and release without meaningful travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub pos: Vec2,
    pub button: PointerButton,
}

/// Pointer gesture state machine: idle, rotating or panning, plus a pending
/// primary press that becomes a click if released in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Rotating { last: Vec2, travel: f32 },
    Panning { last: Vec2 },
    Pressing { start: Vec2 },
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Rotating { .. } | Gesture::Panning { .. })
    }

    /// Transition on pointer-down. `pan_modifier` is the held pan key.
    pub fn press(&mut self, pos: Vec2, button: PointerButton, pan_modifier: bool) {
        *self = match (button, pan_modifier) {
            (PointerButton::Secondary, _) => Gesture::Rotating { last: pos, travel: 0.0 },
            (PointerButton::Middle, _) | (PointerButton::Primary, true) => Gesture::Panning { last: pos },
            (PointerButton::Primary, false) => Gesture::Pressing { start: pos },
        };
    }

    /// Track pointer motion, returning the view change to apply, if any.
    pub fn motion(&mut self, pos: Vec2) -> Option<DragDelta> {
        match self {
            Gesture::Rotating { last, travel } => {
                let delta = pos - *last;
                *last = pos;
                *travel += delta.length();
                Some(DragDelta::Rotate(delta))
            }
            Gesture::Panning { last } => {
                let delta = pos - *last;
                *last = pos;
                Some(DragDelta::Pan(delta))
            }
            Gesture::Idle | Gesture::Pressing { .. } => None,
        }
    }

    /// Transition on pointer-up; always returns to idle. Yields a click when
    /// the press did not travel.
    pub fn release(&mut self, pos: Vec2, button: PointerButton) -> Option<Click> {
        let click = match (*self, button) {
            (Gesture::Pressing { start }, PointerButton::Primary) => {
                (pos.distance(start) < CLICK_SLOP_PX).then_some(Click { pos, button })
            }
            (Gesture::Rotating { last, travel }, PointerButton::Secondary) => {
                (travel + pos.distance(last) < CLICK_SLOP_PX).then_some(Click { pos, button })
            }
            _ => None,
        };
        *self = Gesture::Idle;
        click
    }

    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers() {
        let mut g = Gesture::Idle;
        g.press(Vec2::ZERO, PointerButton::Secondary, false);
        assert!(matches!(g, Gesture::Rotating { .. }));

        g.press(Vec2::ZERO, PointerButton::Middle, false);
        assert!(matches!(g, Gesture::Panning { .. }));

        g.press(Vec2::ZERO, PointerButton::Primary, true);
        assert!(matches!(g, Gesture::Panning { .. }));

        g.press(Vec2::ZERO, PointerButton::Primary, false);
        assert!(matches!(g, Gesture::Pressing { .. }));
        assert!(!g.is_dragging());
    }

    #[test]
    fn test_rotate_deltas_accumulate_travel() {
        let mut g = Gesture::Idle;
        g.press(Vec2::new(10.0, 10.0), PointerButton::Secondary, false);
        assert_eq!(
            g.motion(Vec2::new(14.0, 13.0)),
            Some(DragDelta::Rotate(Vec2::new(4.0, 3.0)))
        );
        assert_eq!(
            g.motion(Vec2::new(14.0, 10.0)),
            Some(DragDelta::Rotate(Vec2::new(0.0, -3.0)))
        );
        // Back where it started, but it moved: no click.
        assert_eq!(g.release(Vec2::new(14.0, 10.0), PointerButton::Secondary), None);
        assert_eq!(g, Gesture::Idle);
    }

    #[test]
    fn test_secondary_click_without_drag() {
        let mut g = Gesture::Idle;
        g.press(Vec2::new(50.0, 50.0), PointerButton::Secondary, false);
        let click = g.release(Vec2::new(51.0, 50.0), PointerButton::Secondary);
        assert_eq!(
            click,
            Some(Click {
                pos: Vec2::new(51.0, 50.0),
                button: PointerButton::Secondary
            })
        );
    }

    #[test]
    fn test_primary_click_and_drag_off() {
        let mut g = Gesture::Idle;
        g.press(Vec2::ZERO, PointerButton::Primary, false);
        assert_eq!(g.motion(Vec2::new(1.0, 1.0)), None);
        assert!(g.release(Vec2::new(1.0, 1.0), PointerButton::Primary).is_some());

        g.press(Vec2::ZERO, PointerButton::Primary, false);
        assert!(g.release(Vec2::new(20.0, 0.0), PointerButton::Primary).is_none());
    }

    #[test]
    fn test_pan_never_clicks() {
        let mut g = Gesture::Idle;
        g.press(Vec2::ZERO, PointerButton::Primary, true);
        assert_eq!(g.motion(Vec2::new(5.0, -2.0)), Some(DragDelta::Pan(Vec2::new(5.0, -2.0))));
        assert!(g.release(Vec2::new(5.0, -2.0), PointerButton::Primary).is_none());
        assert_eq!(g, Gesture::Idle);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("R"), Key::Char('r'));
        assert_eq!(Key::from_dom("2"), Key::Char('2'));
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("Shift"), Key::Other);
        assert_eq!(PointerButton::from_dom(2), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_dom(4), None);
    }
}
