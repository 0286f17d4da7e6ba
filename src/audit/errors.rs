// ============================================================================
// Audit Errors
// Error types for drift auditing of tracked values
// ============================================================================

use std::fmt;

/// Errors reported when auditing tracked values against a tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuditError {
    /// `|exact - value|` exceeded the allowed limit
    ExcessDrift { error: f64, limit: f64 },
    /// One lane is finite and the other is not (overflow, NaN divergence)
    NonFinite { value: f64, exact: f64 },
    /// Tolerance component is negative or NaN
    InvalidTolerance,
    /// Tolerance configuration could not be parsed
    InvalidConfig,
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::ExcessDrift { error, limit } => {
                write!(f, "excess drift: error {error:e} exceeds limit {limit:e}")
            },
            AuditError::NonFinite { value, exact } => write!(
                f,
                "non-finite divergence: value {value} against exact value {exact}"
            ),
            AuditError::InvalidTolerance => {
                write!(f, "invalid tolerance: limits must be non-negative numbers")
            },
            AuditError::InvalidConfig => write!(f, "invalid config: could not parse tolerance"),
        }
    }
}

impl std::error::Error for AuditError {}

/// Result type alias for audit operations
pub type AuditResult<T> = Result<T, AuditError>;
