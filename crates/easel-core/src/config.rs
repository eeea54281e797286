//! Construction-time configuration for editor widgets.
//!
//! Every field has a default, so a config file only needs to mention what it
//! changes. The change listener is not part of the config; it is attached to
//! the editor after construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::curve::{self, ControlPoint};
use crate::error::EaselError;
use crate::gradient::{self, ColorStop};
use crate::input::Viewport;
use crate::sampler::DEFAULT_SAMPLES;

/// Default widget width in logical pixels.
const DEFAULT_WIDTH: f32 = 300.0;
/// Default curve widget height.
const DEFAULT_CURVE_HEIGHT: f32 = 150.0;
/// Default gradient strip height.
const DEFAULT_GRADIENT_HEIGHT: f32 = 40.0;
/// Inset between the widget edge and the plotting area.
const DEFAULT_PADDING: f32 = 8.0;

fn default_accent() -> HexColor {
    HexColor::new(0x4f, 0xc3, 0xf7)
}

/// Configuration for one curve or gradient widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of samples exported by curve widgets.
    pub samples: usize,
    /// Widget origin on the input surface.
    pub x: f32,
    pub y: f32,
    /// Widget size in logical pixels.
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    /// Highlight colour for handles and the curve trace. Cosmetic only.
    pub accent: HexColor,
    /// Initial control points (curve widgets).
    pub default_points: Vec<ControlPoint>,
    /// Initial colour stops (gradient widgets).
    pub default_stops: Vec<ColorStop>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::curve()
    }
}

impl EditorConfig {
    /// Defaults sized for a curve plot.
    pub fn curve() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            x: 0.0,
            y: 0.0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_CURVE_HEIGHT,
            padding: DEFAULT_PADDING,
            accent: default_accent(),
            default_points: curve::default_points(),
            default_stops: gradient::default_stops(),
        }
    }

    /// Defaults sized for a gradient strip.
    pub fn gradient() -> Self {
        Self {
            height: DEFAULT_GRADIENT_HEIGHT,
            ..Self::curve()
        }
    }

    /// Parse a JSON config, falling back to `base` for absent fields.
    pub fn from_json(json: &str, base: Self) -> Result<Self, EaselError> {
        let mut value = serde_json::to_value(base)?;
        let patch: serde_json::Value = serde_json::from_str(json)?;
        merge(&mut value, patch);
        Ok(serde_json::from_value::<Self>(value)?.validated())
    }

    /// Clamp values that would make the widget unusable.
    pub fn validated(mut self) -> Self {
        if self.samples < 2 {
            tracing::warn!(samples = self.samples, "sample count below 2; using 2");
            self.samples = 2;
        }
        let min_side = 2.0 * self.padding + 1.0;
        if self.width < min_side || self.height < min_side {
            tracing::warn!(
                width = self.width,
                height = self.height,
                padding = self.padding,
                "widget smaller than its padding; enlarging"
            );
            self.width = self.width.max(min_side);
            self.height = self.height.max(min_side);
        }
        self
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
            self.padding,
        )
    }
}

/// Overlay `patch` onto `base`, recursing into objects.
fn merge(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}
