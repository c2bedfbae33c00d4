use thiserror::Error;

use crate::validation::FormField;
use crate::view::ViewState;

#[derive(Error, Debug)]
pub enum ArgusError {
    #[error("{message}")]
    InvalidFormat {
        field: FormField,
        message: String,
    },
    
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),
    
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
    
    #[error("A submission is already in flight")]
    Busy,
    
    #[error("Cannot {event} while {from:?}")]
    InvalidTransition {
        from: ViewState,
        event: &'static str,
    },
    
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ArgusError {
    pub fn invalid_format(field: FormField, message: impl Into<String>) -> Self {
        ArgusError::InvalidFormat {
            field,
            message: message.into(),
        }
    }
    
    /// Errors the user can fix by editing the form, as opposed to retrying
    pub fn is_field_error(&self) -> bool {
        matches!(self, ArgusError::InvalidFormat { .. })
    }
}

impl From<reqwest::Error> for ArgusError {
    fn from(err: reqwest::Error) -> Self {
        // Transport, status and decode failures are all reported the same way
        ArgusError::ResolutionFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArgusError>;
