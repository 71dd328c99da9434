use core_interop::InteropError;
use thiserror::Error;

/// Text shown by UI triggers when a module call fails because a package is
/// missing.
pub const UNAVAILABLE_MESSAGE: &str = "operation unavailable";

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("{capability} unavailable: {message}")]
    Unavailable { capability: String, message: String },

    #[error("Interop error: {0}")]
    Interop(InteropError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModuleError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Short text suitable for an alert or a WebView callback.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => UNAVAILABLE_MESSAGE,
            Self::Interop(_) | Self::Serialization(_) => "operation failed",
        }
    }
}

impl From<InteropError> for ModuleError {
    fn from(err: InteropError) -> Self {
        match err {
            InteropError::Unavailable {
                capability,
                message,
            } => Self::Unavailable {
                capability,
                message,
            },
            other => Self::Interop(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModuleError>;
