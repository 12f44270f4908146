use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Response has no choices")]
    MissingChoice,

    #[error("Invalid field `{field}` on food #{index}: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("Vision API request failed: {0}")]
    Request(String),

    #[error("Vision API returned error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Vision API request timed out")]
    Timeout,

    #[error("No foods detected")]
    NoFoodsDetected,

    #[error("Could not encode image: {0}")]
    Encoding(String),

    #[error("Image model unavailable: {0}")]
    ModelUnavailable(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
