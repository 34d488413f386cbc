//! One-line alerts reported after an action or a health check.

use std::fmt;

use crate::service::Health;

/// `Success: ...` or `Error: ...`, the CLI's counterpart of an alert dialog.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Alert for a `GET /health` answer; anything but `healthy` is a failure.
    pub fn health(health: &Health) -> Self {
        let message = format!("{} is {}", health.service, health.status);
        if health.is_healthy() {
            Self::success(message)
        } else {
            Self::failure(message)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success" } else { "Error" };
        writeln!(f, "{label}: {}", self.message)
    }
}
