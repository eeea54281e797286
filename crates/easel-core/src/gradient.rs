//! Multi-stop colour gradients.
//!
//! Colours between two neighbouring stops are a straight per-channel linear
//! blend. Unlike curves there is no easing: colour ramps stay predictable
//! and a stop's influence ends sharply at its neighbours.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::EaselError;
use crate::sampler::sample_uniform;
use crate::sequence::{ElementId, MIN_LEN, OrderedSequence, Positioned, Slot};

/// Colour reported by a gradient with fewer than two stops.
pub const FALLBACK_COLOR: HexColor = HexColor::BLACK;

/// A gradient stop at a normalized position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub pos: f32,
    pub color: HexColor,
}

impl ColorStop {
    pub const fn new(pos: f32, color: HexColor) -> Self {
        Self { pos, color }
    }
}

impl Positioned for ColorStop {
    fn position(&self) -> f32 {
        self.pos
    }

    fn set_position(&mut self, position: f32) {
        self.pos = position;
    }
}

/// Black to white.
pub fn default_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, HexColor::BLACK),
        ColorStop::new(1.0, HexColor::WHITE),
    ]
}

/// An editable colour ramp, serialized as its stop list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct GradientModel {
    stops: OrderedSequence<ColorStop>,
}

impl Default for GradientModel {
    fn default() -> Self {
        Self::new(default_stops())
    }
}

impl From<Vec<ColorStop>> for GradientModel {
    fn from(stops: Vec<ColorStop>) -> Self {
        Self::new(stops)
    }
}

impl From<GradientModel> for Vec<ColorStop> {
    fn from(gradient: GradientModel) -> Self {
        gradient.stops()
    }
}

impl GradientModel {
    /// Build a gradient from stops in any order.
    pub fn new(stops: impl IntoIterator<Item = ColorStop>) -> Self {
        Self {
            stops: OrderedSequence::new(
                stops
                    .into_iter()
                    .map(|s| ColorStop::new(s.pos.clamp(0.0, 1.0), s.color)),
            ),
        }
    }

    pub fn stops(&self) -> Vec<ColorStop> {
        self.stops.to_vec()
    }

    pub fn stop(&self, index: usize) -> Option<ColorStop> {
        self.stops.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn element_id(&self, index: usize) -> Option<ElementId> {
        self.stops.id_at(index)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.stops.index_of(id)
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Colour of the ramp at `t`.
    ///
    /// Holds the end colours outside the first/last stop and returns
    /// [`FALLBACK_COLOR`] when fewer than two stops exist.
    pub fn evaluate_color_at(&self, t: f32) -> HexColor {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return FALLBACK_COLOR;
        };
        if self.stops.len() < MIN_LEN {
            return FALLBACK_COLOR;
        }

        if t <= first.pos {
            return first.color;
        }
        if t >= last.pos {
            return last.color;
        }

        let Some((lo, hi)) = self.stops.bracket(t) else {
            return last.color;
        };
        let (Some(a), Some(b)) = (self.stops.get(lo), self.stops.get(hi)) else {
            return last.color;
        };

        let span = b.pos - a.pos;
        if span.abs() < 1e-10 {
            return b.color;
        }
        HexColor::lerp(a.color, b.color, (t - a.pos) / span)
    }

    /// Sample the ramp at `count` evenly spaced positions.
    pub fn sample_colors(&self, count: usize) -> Vec<HexColor> {
        sample_uniform(count, |t| self.evaluate_color_at(t))
    }

    /// Insert a stop at `pos`, coloured with the ramp's current colour there
    /// so the ramp does not visibly change. Returns the new stop's index.
    pub fn insert_stop(&mut self, pos: f32) -> usize {
        let pos = if self.stops.len() >= MIN_LEN {
            Slot::Interior.clamp(pos)
        } else {
            pos.clamp(0.0, 1.0)
        };
        let color = self.evaluate_color_at(pos);
        let index = self.stops.insert(ColorStop::new(pos, color));
        tracing::debug!(pos, %color, index, len = self.stops.len(), "gradient: inserted stop");
        index
    }

    /// Move the stop at `index`, returning its index after re-sorting.
    pub fn move_stop(&mut self, index: usize, pos: f32) -> Option<usize> {
        let moved = self.stops.update(index, |s| s.pos = pos);
        if let Some(to) = moved {
            tracing::trace!(from = index, to, pos, "gradient: moved stop");
        }
        moved
    }

    /// Delete an interior stop, provided at least two stops remain.
    pub fn delete_stop(&mut self, index: usize) -> bool {
        let removed = self.stops.remove(index).is_some();
        if removed {
            tracing::debug!(index, len = self.stops.len(), "gradient: deleted stop");
        }
        removed
    }

    /// Replace the colour of the stop at `index`. Its position is unchanged.
    pub fn set_stop_color(&mut self, index: usize, color: HexColor) -> Result<(), EaselError> {
        let len = self.stops.len();
        let stop = self
            .stops
            .get_mut(index)
            .ok_or(EaselError::IndexOutOfRange { index, len })?;
        stop.color = color;
        tracing::debug!(index, %color, "gradient: stop colour set");
        Ok(())
    }

    /// Replace all stops. Positions are clamped to `[0, 1]` and sorted.
    pub fn set_stops(&mut self, stops: impl IntoIterator<Item = ColorStop>) {
        *self = Self::new(stops);
        tracing::debug!(len = self.stops.len(), "gradient: stops replaced");
    }
}
