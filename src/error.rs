// ⚠️ Error taxonomy for the assistant
// Every variant is turned into a user-facing line by the dispatcher

use thiserror::Error;

/// Message used when a validation error carries no text of its own
pub const FALLBACK_VALIDATION_MESSAGE: &str = "Give me correct data please.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    /// Bad name, phone or date format
    #[error("{0}")]
    Validation(String),

    /// Referenced contact is absent
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Too few positional arguments for a command
    #[error("Missing argument")]
    MissingArgument,
}

impl BotError {
    pub fn validation(message: impl Into<String>) -> Self {
        BotError::Validation(message.into())
    }

    /// Text shown to the user at the prompt
    pub fn user_message(&self) -> String {
        match self {
            BotError::NotFound(_) => "Contact not found.".to_string(),
            BotError::Validation(message) if message.trim().is_empty() => {
                FALLBACK_VALIDATION_MESSAGE.to_string()
            }
            BotError::Validation(message) => message.clone(),
            BotError::MissingArgument => "Enter the argument for the command.".to_string(),
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
