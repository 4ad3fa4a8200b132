//! Tool response envelope
//!
//! Every tool answers with `{"status": "success", "data": ...}` or
//! `{"status": "error", "error_message": ...}`. The error kind travels
//! with the Rust value only.

use serde::Serialize;

use crate::error::{ErrorKind, PlanError, PlanResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResponse<T> {
    Success {
        data: T,
    },
    Error {
        error_message: String,
        #[serde(skip)]
        error_kind: ErrorKind,
    },
}

impl<T> ToolResponse<T> {
    pub fn success(data: T) -> Self {
        ToolResponse::Success { data }
    }

    pub fn error(err: PlanError) -> Self {
        ToolResponse::Error {
            error_kind: err.kind(),
            error_message: err.to_string(),
        }
    }

    /// Wrap an engine result. Unexpected failures are prefixed with
    /// `failure`; data-unavailable messages are user-facing and kept as is.
    pub fn from_result(result: PlanResult<T>, failure: &str) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err @ PlanError::DataUnavailable(_)) => Self::error(err),
            Err(err) => Self::error(err.context(failure)),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ToolResponse::Success { data } => Some(data),
            ToolResponse::Error { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ToolResponse::Success { .. } => None,
            ToolResponse::Error { error_kind, .. } => Some(*error_kind),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ToolResponse::Success { .. } => None,
            ToolResponse::Error { error_message, .. } => Some(error_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let r = ToolResponse::success(json!({"bmr": 1649}));
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"status": "success", "data": {"bmr": 1649}})
        );
    }

    #[test]
    fn test_error_shape() {
        let r: ToolResponse<()> = ToolResponse::error(PlanError::catalog_unavailable());
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({
                "status": "error",
                "error_message": "Could not load exercises data"
            })
        );
        assert_eq!(r.error_kind(), Some(ErrorKind::DataUnavailable));
    }

    #[test]
    fn test_error_keys() {
        let r: ToolResponse<()> = ToolResponse::error(PlanError::Computation("bad".into()));
        let value = serde_json::to_value(&r).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["error_message", "status"]);
    }

    #[test]
    fn test_failure_prefix() {
        let r: ToolResponse<()> = ToolResponse::from_result(
            Err(PlanError::Computation("height_cm must be a finite number, got NaN".into())),
            "Calorie calculation failed",
        );
        assert_eq!(r.error_kind(), Some(ErrorKind::Computation));
        assert_eq!(
            r.error_message(),
            Some("Calorie calculation failed: height_cm must be a finite number, got NaN")
        );

        let r: ToolResponse<()> = ToolResponse::from_result(
            Err(PlanError::DataUnavailable("Food 'Pizza' not found in database".into())),
            "Food analysis failed",
        );
        assert_eq!(r.error_message(), Some("Food 'Pizza' not found in database"));
    }
}
