/// Core error type for the pulse system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid health payload: {0}")]
    InvalidPayload(String),
}
