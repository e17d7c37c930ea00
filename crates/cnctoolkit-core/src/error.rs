//! Error handling for CNCToolkit
//!
//! Every calculator returns a tagged `CalcError` on failure; a calculation
//! either produces a fully populated result or one of these errors, never a
//! partial result. Clamping and advisory conditions are success data carried
//! on the result types, not errors.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Calculation error type
///
/// Represents the ways a single calculation call can fail. All variants are
/// fatal to that call only; the calculators hold no state, so the caller may
/// simply correct the inputs and retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required numeric field is non-positive or non-finite
    #[error("Invalid input '{field}': {value} (must be a positive finite number)")]
    InvalidInput {
        /// The name of the offending field.
        field: &'static str,
        /// The value that was rejected.
        value: f64,
    },

    /// Individually well-formed values that are jointly inconsistent
    #[error("Constraint violation: {reason}")]
    ConstraintViolation {
        /// Description of the violated precondition.
        reason: String,
    },

    /// No stock allowance entry exists for a material/feature pair
    ///
    /// Both keys are closed enums drawn from the same fixed lists the table
    /// is built from, so this is reachable only through a programming error.
    #[error("No stock allowance data for {material} / {feature}")]
    AllowanceNotFound {
        /// Display name of the workpiece material.
        material: String,
        /// Display name of the feature type.
        feature: String,
    },
}

impl CalcError {
    /// Build an `InvalidInput` error for a named field
    pub fn invalid_input(field: &'static str, value: f64) -> Self {
        CalcError::InvalidInput { field, value }
    }

    /// Build a `ConstraintViolation` error from a reason string
    pub fn constraint(reason: impl Into<String>) -> Self {
        CalcError::ConstraintViolation {
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Check if this is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, CalcError::ConstraintViolation { .. })
    }
}

/// Result type using CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

/// Validate that a numeric field is finite and strictly positive
///
/// Returns the value unchanged on success so call sites can validate and
/// bind in one expression.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value));
    }
    Ok(value)
}
