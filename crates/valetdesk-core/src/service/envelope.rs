//! Response envelope shared by every item endpoint.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ValetError},
    models::ItemStatus,
};

/// `{ success, data?, error?, message?, count? }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response that must carry data.
    ///
    /// # Errors
    ///
    /// * `ValetError::Service` - When `success` is false, or true without data
    pub fn into_data(self) -> Result<T> {
        match self.into_optional_data()? {
            Some(data) => Ok(data),
            None => Err(ValetError::Service {
                message: "Response is missing data".to_string(),
            }),
        }
    }

    /// Payload of a successful response where data is optional.
    pub fn into_optional_data(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.into_failure())
        }
    }

    /// Check success and discard any payload.
    pub fn into_unit(self) -> Result<()> {
        self.into_optional_data().map(|_| ())
    }

    /// The service's own failure message, falling back to a generic one.
    pub fn failure_message(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Request failed")
    }

    fn into_failure(self) -> ValetError {
        ValetError::Service {
            message: self.failure_message().to_string(),
        }
    }
}

/// `PATCH /items/{id}` request body.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: ItemStatus,
}

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
}

impl Health {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
