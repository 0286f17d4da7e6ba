// ============================================================================
// Audit Module
// Opt-in drift checks for tracked values
// ============================================================================
//
// This module provides:
// - Tolerance: absolute + relative drift limit, optionally loaded from JSON
// - DriftReport: labeled samples of a computation checked against a tolerance
// - DriftObserver: hook for logging (LoggingObserver) or custom sinks
// - AuditError: error types for drift that exceeds a tolerance
//
// Nothing in here is called by the operators: a computation only pays for
// auditing at the checkpoints the caller records.

mod errors;
mod observer;
mod report;
mod tolerance;

pub use errors::{AuditError, AuditResult};
pub use observer::{DriftObserver, LoggingObserver, NoOpObserver};
pub use report::{DriftReport, Sample};
pub use tolerance::Tolerance;
