//! Fixed-grid sampling of the editable models.
//!
//! Sampling is a pure function of the current model state. Nothing is cached;
//! every call recomputes the full snapshot.

/// Sample count used for curves when none is configured.
pub const DEFAULT_SAMPLES: usize = 32;

/// Evaluate `f` at `count` uniformly spaced positions in `[0, 1]`.
///
/// The first sample is at `t = 0` and the last at `t = 1`. A single sample
/// is taken at `t = 0`; `count == 0` yields an empty vector.
pub fn sample_uniform<T>(count: usize, f: impl Fn(f32) -> T) -> Vec<T> {
    let denom = count.saturating_sub(1).max(1) as f32;
    (0..count).map(|i| f(i as f32 / denom)).collect()
}
