use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartRenderError {
    #[error("chart backend failure: {0}")]
    Backend(String),
    #[error("png encoding failure: {0}")]
    PngEncoding(String),
    #[error("failed to write chart {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
