use thiserror::Error;

use crate::domain::CommandId;

/// Failures the responder can hit while turning a request body into a reply.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// Body is not a decodable event. Recovered into an informational card.
    #[error("invalid request: {0}")]
    MalformedInput(String),
    /// Reply could not be encoded. The only condition answered with a 500.
    #[error("failed to encode response: {0}")]
    Serialization(String),
    #[error("failed to load banner font: {0}")]
    FontUnavailable(String),
}

impl ResponderError {
    pub fn malformed(error: impl ToString) -> Self {
        Self::MalformedInput(error.to_string())
    }

    pub fn serialization(error: impl ToString) -> Self {
        Self::Serialization(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings file `{path}`: {reason}")]
    InvalidFile { path: String, reason: String },
    #[error("invalid bind address `{addr}`: {reason}")]
    InvalidBindAddress { addr: String, reason: String },
    #[error("command id {id} is assigned to both /{first} and /{second}")]
    DuplicateCommandId {
        id: CommandId,
        first: &'static str,
        second: &'static str,
    },
}
