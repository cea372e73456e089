use crate::domain::field::Field;

/// Flash shown when the service cannot be reached at all.
pub const TRANSPORT_MESSAGE: &str = "Unable to reach the recommendations service";
/// Flash shown when a 2xx response has a body we cannot read.
pub const DECODE_MESSAGE: &str = "Unexpected response from the recommendations service";

/// Input rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{0} must be a non-negative integer")]
    NotANumber(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Missing(f) | Self::NotANumber(f) => *f,
        }
    }
}

/// Failure talking to the recommendations service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the reason the service gave.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("transport: {0}")]
    Transport(String),
    #[error("decode: {0}")]
    Decode(String),
}

/// Why a form action failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::Api(ApiError::Server { .. }) => "SERVER",
            Self::Api(ApiError::Transport(_)) => "TRANSPORT",
            Self::Api(ApiError::Decode(_)) => "DECODE",
        }
    }

    /// Text for the flash region.
    pub fn flash_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Api(ApiError::Server { message, .. }) => message.clone(),
            Self::Api(ApiError::Transport(_)) => TRANSPORT_MESSAGE.to_owned(),
            Self::Api(ApiError::Decode(_)) => DECODE_MESSAGE.to_owned(),
        }
    }
}
