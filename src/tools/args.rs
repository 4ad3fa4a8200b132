//! Numeric tool arguments
//!
//! Numbers arrive as raw JSON values so a wrong type is reported in an
//! error envelope instead of failing the whole call.

use serde_json::Value;

use crate::error::{PlanError, PlanResult};

fn type_error(name: &str, expected: &str, value: &Value) -> PlanError {
    PlanError::Computation(format!("{} must be {}, got {}", name, expected, value))
}

pub fn number(name: &str, value: &Value) -> PlanResult<f64> {
    value.as_f64().ok_or_else(|| type_error(name, "a number", value))
}

/// Non-negative whole number; integral floats such as `30.0` are accepted
pub fn count(name: &str, value: &Value) -> PlanResult<u32> {
    let n = number(name, value)?;
    if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
        Ok(n as u32)
    } else {
        Err(type_error(name, "a non-negative whole number", value))
    }
}

/// Whole number, truncating any fraction toward zero
pub fn integer(name: &str, value: &Value) -> PlanResult<i64> {
    match value.as_i64() {
        Some(n) => Ok(n),
        None => number(name, value).map(|n| n.trunc() as i64),
    }
}
