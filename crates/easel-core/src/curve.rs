//! Value-over-time curves built from control points.
//!
//! Between two neighbouring control points the curve follows a smoothstep
//! ease, so the slope is zero at every control point and the curve never
//! overshoots the range spanned by its neighbours:
//!
//! ```text
//! s  = (t − p0.x) / (p1.x − p0.x)
//! s' = 3s² − 2s³
//! y  = p0.y + (p1.y − p0.y) × s'
//! ```
//!
//! Outside the first/last control point the curve holds the endpoint value.
//!
//! # Complexity
//! - Evaluate: O(log N) binary search + O(1) interpolation
//! - Sample: O(N × count)

use serde::{Deserialize, Serialize};

use crate::error::EaselError;
use crate::sampler::{DEFAULT_SAMPLES, sample_uniform};
use crate::sequence::{ElementId, MIN_LEN, OrderedSequence, Positioned, Slot};

/// Divisor for the subsampling stride used when rebuilding control points
/// from a sampled array.
const RECONSTRUCT_DIVISOR: usize = 6;

/// A curve control point. Both coordinates are normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

impl ControlPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn clamped(self) -> Self {
        Self::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }
}

impl Positioned for ControlPoint {
    fn position(&self) -> f32 {
        self.x
    }

    fn set_position(&mut self, position: f32) {
        self.x = position;
    }
}

/// Five evenly spaced points on the diagonal.
pub fn default_points() -> Vec<ControlPoint> {
    (0..5)
        .map(|i| {
            let v = i as f32 / 4.0;
            ControlPoint::new(v, v)
        })
        .collect()
}

/// Smoothstep ease: `3s² − 2s³`.
fn smoothstep(s: f32) -> f32 {
    s * s * (3.0 - 2.0 * s)
}

/// An editable curve over a normalized parameter.
///
/// Serialized as its plain point list; deserializing clamps and sorts like
/// [`CurveModel::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct CurveModel {
    points: OrderedSequence<ControlPoint>,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new(default_points())
    }
}

impl From<Vec<ControlPoint>> for CurveModel {
    fn from(points: Vec<ControlPoint>) -> Self {
        Self::new(points)
    }
}

impl From<CurveModel> for Vec<ControlPoint> {
    fn from(curve: CurveModel) -> Self {
        curve.points()
    }
}

impl CurveModel {
    /// Build a curve from control points in any order.
    pub fn new(points: impl IntoIterator<Item = ControlPoint>) -> Self {
        Self {
            points: OrderedSequence::new(points.into_iter().map(ControlPoint::clamped)),
        }
    }

    pub fn points(&self) -> Vec<ControlPoint> {
        self.points.to_vec()
    }

    pub fn point(&self, index: usize) -> Option<ControlPoint> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn element_id(&self, index: usize) -> Option<ElementId> {
        self.points.id_at(index)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.points.index_of(id)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluate the curve at `t`.
    ///
    /// Returns 0 when fewer than two control points exist.
    pub fn evaluate_at(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        if self.points.len() < MIN_LEN {
            return 0.0;
        }

        // Clamp to range
        if t <= first.x {
            return first.y;
        }
        if t >= last.x {
            return last.y;
        }

        let Some((lo, hi)) = self.points.bracket(t) else {
            return last.y;
        };
        let (Some(p0), Some(p1)) = (self.points.get(lo), self.points.get(hi)) else {
            return last.y;
        };

        let span = p1.x - p0.x;
        if span.abs() < 1e-10 {
            return p1.y;
        }
        let s = (t - p0.x) / span;
        p0.y + (p1.y - p0.y) * smoothstep(s)
    }

    /// Sample the curve at `count` evenly spaced positions covering `[0, 1]`.
    pub fn sampled_values(&self, count: usize) -> Vec<f32> {
        sample_uniform(count, |t| self.evaluate_at(t))
    }

    /// Sample with [`DEFAULT_SAMPLES`] entries.
    pub fn default_sampled_values(&self) -> Vec<f32> {
        self.sampled_values(DEFAULT_SAMPLES)
    }

    /// Insert a control point and return its index in the re-sorted curve.
    ///
    /// While the curve has both endpoints the new point is kept strictly
    /// between them.
    pub fn insert_point(&mut self, x: f32, y: f32) -> usize {
        let x = if self.points.len() >= MIN_LEN {
            Slot::Interior.clamp(x)
        } else {
            x.clamp(0.0, 1.0)
        };
        let index = self.points.insert(ControlPoint::new(x, y.clamp(0.0, 1.0)));
        tracing::debug!(x, y, index, len = self.points.len(), "curve: inserted point");
        index
    }

    /// Move the point at `index`, returning its index after re-sorting.
    ///
    /// `y` is clamped to `[0, 1]`. The first point stays at `x = 0`, the
    /// last at `x = 1`, and interior points are kept within `[0.01, 0.99]`.
    pub fn move_point(&mut self, index: usize, x: f32, y: f32) -> Option<usize> {
        let moved = self.points.update(index, |p| {
            p.x = x;
            p.y = y.clamp(0.0, 1.0);
        });
        if let Some(to) = moved {
            tracing::trace!(from = index, to, x, y, "curve: moved point");
        }
        moved
    }

    /// Delete an interior point. Endpoints are never removed.
    pub fn delete_point(&mut self, index: usize) -> bool {
        let removed = self.points.remove(index).is_some();
        if removed {
            tracing::debug!(index, len = self.points.len(), "curve: deleted point");
        }
        removed
    }

    /// Replace all control points. Input is clamped to `[0, 1]` and sorted.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = ControlPoint>) {
        *self = Self::new(points);
        tracing::debug!(len = self.points.len(), "curve: points replaced");
    }

    /// Rebuild a small set of control points from a sampled array.
    ///
    /// Every `⌈len / 6⌉`-th sample becomes a point at `x = i / (len − 1)`,
    /// and the first and last samples are always included. This is lossy:
    /// sampling the rebuilt curve only approximates `values`.
    pub fn from_sampled_array(&mut self, values: &[f32]) -> Result<(), EaselError> {
        let len = values.len();
        if len < MIN_LEN {
            return Err(EaselError::TooFewSamples(len));
        }

        let stride = len.div_ceil(RECONSTRUCT_DIVISOR);
        let last = (len - 1) as f32;
        let mut points: Vec<ControlPoint> = values
            .iter()
            .enumerate()
            .step_by(stride)
            .map(|(i, &y)| ControlPoint::new(i as f32 / last, y))
            .collect();

        if !points.iter().any(|p| p.x == 0.0) {
            points.push(ControlPoint::new(0.0, values[0]));
        }
        if !points.iter().any(|p| p.x == 1.0) {
            points.push(ControlPoint::new(1.0, values[len - 1]));
        }

        self.set_points(points);
        Ok(())
    }
}
