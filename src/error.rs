//! Planning error types
//!
//! Every engine operation reports failures as a `PlanError`; the tool layer
//! turns them into error envelopes.

use thiserror::Error;

/// Planning error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A parameter could not be used even after falling back to defaults
    #[error("{0}")]
    InvalidInput(String),

    /// Reference data is missing or nothing matched the request
    #[error("{0}")]
    DataUnavailable(String),

    /// Arithmetic produced an unusable value
    #[error("{0}")]
    Computation(String),
}

/// Error category kept on error envelopes; not part of the wire shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    DataUnavailable,
    Computation,
}

impl PlanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::InvalidInput(_) => ErrorKind::InvalidInput,
            PlanError::DataUnavailable(_) => ErrorKind::DataUnavailable,
            PlanError::Computation(_) => ErrorKind::Computation,
        }
    }

    /// Prefix the message with the failing operation, keeping the kind
    pub fn context(self, operation: &str) -> Self {
        match self {
            PlanError::InvalidInput(m) => PlanError::InvalidInput(format!("{}: {}", operation, m)),
            PlanError::DataUnavailable(m) => {
                PlanError::DataUnavailable(format!("{}: {}", operation, m))
            }
            PlanError::Computation(m) => PlanError::Computation(format!("{}: {}", operation, m)),
        }
    }

    pub fn catalog_unavailable() -> Self {
        PlanError::DataUnavailable("Could not load exercises data".to_string())
    }
}

/// Result type for planning operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Reject NaN and infinite inputs before they reach a formula
pub fn ensure_finite(name: &str, value: f64) -> PlanResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanError::Computation(format!("{} must be a finite number, got {}", name, value)))
    }
}
