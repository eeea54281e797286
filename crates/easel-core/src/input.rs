//! Pointer input as delivered by the host UI.
//!
//! Events carry positions in input-surface pixels (origin top-left, y down).
//! Each widget owns a [`Viewport`] that maps those pixels into its own
//! normalized space (origin bottom-left, y up).

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Events ───────────────────────────────────────────────────────

/// Pointer event in input-surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    ButtonDown { button: PointerButton, x: f32, y: f32 },
    ButtonUp { button: PointerButton, x: f32, y: f32 },
}

impl PointerEvent {
    pub fn position(&self) -> Vec2 {
        match *self {
            Self::Move { x, y } | Self::ButtonDown { x, y, .. } | Self::ButtonUp { x, y, .. } => {
                Vec2::new(x, y)
            }
        }
    }
}

/// Pointer button identifier.
///
/// `Secondary` is the contextual action (right click, long press) that
/// deletes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

// ── Cursor ───────────────────────────────────────────────────────

/// Cursor the host should show over a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    /// Over empty space: a press inserts a new element.
    #[default]
    Crosshair,
    /// Over an existing element.
    Grab,
    /// An element is being dragged.
    Grabbing,
}

// ── Viewport ─────────────────────────────────────────────────────

/// A widget's rectangle on the input surface.
///
/// `padding` insets the plotting area so handles at the edges stay fully
/// visible and clickable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Vec2,
    pub size: Vec2,
    pub padding: f32,
}

impl Viewport {
    pub fn new(origin: Vec2, size: Vec2, padding: f32) -> Self {
        Self {
            origin,
            size,
            padding,
        }
    }

    /// Whether a surface position lies inside the widget rectangle.
    pub fn contains(&self, surface_pos: Vec2) -> bool {
        let local = surface_pos - self.origin;
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.size.x && local.y < self.size.y
    }

    fn inner_size(&self) -> Vec2 {
        (self.size - Vec2::splat(2.0 * self.padding)).max(Vec2::ONE)
    }

    /// Convert a surface position to normalized widget coordinates.
    ///
    /// The result is clamped to `[0, 1]` on both axes, so positions outside
    /// the widget (during a drag) pin to the nearest edge.
    pub fn normalize(&self, surface_pos: Vec2) -> Vec2 {
        let local = surface_pos - self.origin - Vec2::splat(self.padding);
        let pos = local / self.inner_size();
        // Surface y is top-down; normalized y is bottom-up.
        Vec2::new(pos.x, 1.0 - pos.y).clamp(Vec2::ZERO, Vec2::ONE)
    }

    /// Convert normalized widget coordinates back to surface pixels.
    pub fn denormalize(&self, normalized: Vec2) -> Vec2 {
        let flipped = Vec2::new(normalized.x, 1.0 - normalized.y);
        self.origin + Vec2::splat(self.padding) + flipped * self.inner_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn viewport() -> Viewport {
        Viewport::new(Vec2::new(100.0, 50.0), Vec2::new(220.0, 120.0), 10.0)
    }

    #[test]
    fn test_normalize_corners() {
        let vp = viewport();
        let bottom_left = vp.normalize(Vec2::new(110.0, 160.0));
        assert!(bottom_left.abs_diff_eq(Vec2::new(0.0, 0.0), EPSILON));
        let top_right = vp.normalize(Vec2::new(310.0, 60.0));
        assert!(top_right.abs_diff_eq(Vec2::new(1.0, 1.0), EPSILON));
        let center = vp.normalize(Vec2::new(210.0, 110.0));
        assert!(center.abs_diff_eq(Vec2::new(0.5, 0.5), EPSILON));
    }

    #[test]
    fn test_normalize_clamps_outside() {
        let vp = viewport();
        let far = vp.normalize(Vec2::new(-500.0, 900.0));
        assert_eq!(far, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_denormalize_inverts_normalize() {
        let vp = viewport();
        let p = Vec2::new(0.3, 0.8);
        assert!(vp.normalize(vp.denormalize(p)).abs_diff_eq(p, EPSILON));
    }

    #[test]
    fn test_contains() {
        let vp = viewport();
        assert!(vp.contains(Vec2::new(100.0, 50.0)));
        assert!(vp.contains(Vec2::new(319.0, 169.0)));
        assert!(!vp.contains(Vec2::new(320.0, 100.0)));
        assert!(!vp.contains(Vec2::new(99.0, 100.0)));
    }

    #[test]
    fn test_pointer_event_serde() {
        let ev = PointerEvent::ButtonDown {
            button: PointerButton::Secondary,
            x: 4.0,
            y: 2.0,
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"kind":"ButtonDown","button":"Secondary","x":4.0,"y":2.0}"#);
        assert_eq!(serde_json::from_str::<PointerEvent>(&json).unwrap(), ev);
    }
}
