use easel_core::EaselError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Easel(#[from] EaselError),

    #[error("failed to write preview: {0}")]
    Image(#[from] image::ImageError),

    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
