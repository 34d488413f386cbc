//! Error types for the ValetDesk client library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{ItemId, ItemStatus};

/// Comprehensive error type for all client operations.
///
/// Every variant is scoped to the operation that produced it; none of them
/// leave the store or dispatcher in an unusable state.
#[derive(Error, Debug)]
pub enum ValetError {
    /// The service could not be reached or the exchange broke off
    #[error("{message}: {source}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with `success: false`
    #[error("Service error: {message}")]
    Service { message: String },
    /// The response body was not a valid envelope
    #[error("Invalid response from service (HTTP {status}): {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    NotFound { id: ItemId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Status change the client does not offer
    #[error("Item {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: ItemId,
        from: ItemStatus,
        to: ItemStatus,
    },
    /// Destructive action attempted without explicit confirmation
    #[error("Deleting item {id} requires confirmation")]
    ConfirmationRequired { id: ItemId },
    /// Another action from the same screen is still in flight
    #[error("Another request is already in progress")]
    Busy,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating transport errors with context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> ValetError {
        ValetError::Transport {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ValetError {
        ValetError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ValetError {
    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error was raised before any request left the client.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::InvalidTransition { .. }
                | Self::ConfirmationRequired { .. }
                | Self::Busy
        )
    }
}

/// Specialized extension trait for transport-related Results.
pub trait TransportResultExt<T> {
    /// Map reqwest errors with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ValetError::transport(message).with_source(e))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ValetError>;
