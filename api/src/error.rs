use thiserror::Error;

/// Failures talking to the device controller. None of these are fatal to the
/// dashboard; callers log them and keep whatever they showed last.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid device address `{0}`")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
}

impl ApiError {
    /// True for errors that the next poll may recover from on its own.
    pub fn is_transient(&self) -> bool {
        !matches!(self, ApiError::InvalidBaseUrl(_))
    }
}
