use thiserror::Error;

#[derive(Error, Debug)]
pub enum InteropError {
    #[error("{capability} unavailable: {message}")]
    Unavailable { capability: String, message: String },

    #[error("Interop facade is already installed")]
    AlreadyInstalled,

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

impl InteropError {
    pub(crate) fn unavailable(capability: &str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            capability: capability.to_string(),
            message: message.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, InteropError>;
