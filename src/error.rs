use thiserror::Error;

pub type Result<T, E = LabelError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any failure reported by the SDK, from transport to service-side
    /// validation. All remote failures share this variant.
    #[error("{0}")]
    Service(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
