/// Errors produced by the editing core.
///
/// Interactive edits never fail: rejected deletions and out-of-range moves are
/// silent no-ops. Only boundary input (colour strings, programmatic data,
/// configuration) is reported through this type.
#[derive(Debug, thiserror::Error)]
pub enum EaselError {
    #[error("invalid colour {0:?}: expected \"#rrggbb\"")]
    InvalidColor(String),

    #[error("need at least 2 samples to rebuild a curve, got {0}")]
    TooFewSamples(usize),

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
