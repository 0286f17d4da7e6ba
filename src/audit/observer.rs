// ============================================================================
// Drift Observer Interface
// Receives samples and violations recorded by a DriftReport
// ============================================================================

use super::errors::AuditError;
use super::report::Sample;

/// Observer trait for drift samples.
/// Implementations can handle logging, metrics, assertions, etc.
pub trait DriftObserver: Send + Sync {
    /// Called for every recorded sample.
    fn on_sample(&self, sample: &Sample);

    /// Called when a recorded sample fails its tolerance.
    fn on_violation(&self, sample: &Sample, error: AuditError) {
        let _ = (sample, error);
    }
}

/// No-op observer
pub struct NoOpObserver;

impl DriftObserver for NoOpObserver {
    fn on_sample(&self, _sample: &Sample) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl DriftObserver for LoggingObserver {
    fn on_sample(&self, sample: &Sample) {
        tracing::debug!(
            label = sample.label,
            value = sample.value,
            exact = sample.exact,
            error = sample.error(),
            "drift sample"
        );
    }

    fn on_violation(&self, sample: &Sample, error: AuditError) {
        tracing::warn!(label = sample.label, %error, "drift beyond tolerance");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        let sample = Sample {
            label: "x",
            value: 1.0,
            exact: 1.0,
        };
        observer.on_sample(&sample);
        observer.on_violation(&sample, AuditError::InvalidTolerance);
        // Should not panic
    }

    #[test]
    fn test_logging_observer_without_subscriber() {
        let observer = LoggingObserver;
        let sample = Sample {
            label: "y",
            value: 1.0,
            exact: 1.5,
        };
        observer.on_sample(&sample);
        observer.on_violation(
            &sample,
            AuditError::ExcessDrift {
                error: 0.5,
                limit: 0.1,
            },
        );
    }
}
