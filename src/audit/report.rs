// ============================================================================
// Drift Report
// Labeled samples of tracked values checked against one tolerance
// ============================================================================

use super::errors::{AuditError, AuditResult};
use super::observer::{DriftObserver, NoOpObserver};
use super::tolerance::Tolerance;
use crate::precision::{Precision, Tracked, Working};
use crate::Real;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Snapshot of one tracked value, both lanes widened to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Caller-chosen name of the checkpoint
    pub label: &'static str,
    /// Working value
    pub value: f64,
    /// Reference value
    pub exact: f64,
}

impl Sample {
    /// Capture a tracked value.
    pub fn of<P: Precision>(label: &'static str, real: Real<P, Tracked>) -> Self {
        Self {
            label,
            value: real.value().widen(),
            exact: real.exact(),
        }
    }

    /// Reference minus working value.
    #[inline]
    pub fn error(&self) -> f64 {
        self.exact - self.value
    }
}

/// Collects labeled samples from a computation and checks them against a
/// [`Tolerance`].
///
/// Most audits sample a handful of checkpoints, which stay inline without
/// allocating.
///
/// # Example
/// ```
/// use shadow_real::audit::{DriftReport, Tolerance};
/// use shadow_real::{Real, Single, Tracked};
///
/// type R = Real<Single, Tracked>;
///
/// let mut report = DriftReport::new(Tolerance::absolute(1e-6)?);
/// let (c, d) = (R::new(100.00001), R::new(100.0));
/// let _ = report.record("difference of squares", c * c - d * d);
/// let _ = report.record("factored", (c + d) * (c - d));
///
/// assert_eq!(report.worst().map(|s| s.label), Some("difference of squares"));
/// assert_eq!(report.violations().count(), 1);
/// # Ok::<(), shadow_real::audit::AuditError>(())
/// ```
pub struct DriftReport {
    tolerance: Tolerance,
    samples: SmallVec<[Sample; 8]>,
    observer: Arc<dyn DriftObserver>,
}

impl DriftReport {
    /// Create an empty report with no observer.
    pub fn new(tolerance: Tolerance) -> Self {
        Self::with_observer(tolerance, Arc::new(NoOpObserver))
    }

    /// Create an empty report that notifies `observer`.
    pub fn with_observer(tolerance: Tolerance, observer: Arc<dyn DriftObserver>) -> Self {
        Self {
            tolerance,
            samples: SmallVec::new(),
            observer,
        }
    }

    /// The tolerance samples are checked against.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Record a checkpoint and check it.
    ///
    /// The sample is kept whether or not it passes.
    ///
    /// # Errors
    /// The first failure of this sample, see [`Tolerance::check`].
    pub fn record<P: Precision>(
        &mut self,
        label: &'static str,
        real: Real<P, Tracked>,
    ) -> AuditResult<()> {
        let sample = Sample::of(label, real);
        self.observer.on_sample(&sample);

        let result = self.tolerance.check_sample(&sample);
        if let Err(error) = result {
            self.observer.on_violation(&sample, error);
        }

        self.samples.push(sample);
        result
    }

    /// All recorded samples, in recording order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample with the largest `|error|`. NaN errors rank highest.
    pub fn worst(&self) -> Option<&Sample> {
        self.samples
            .iter()
            .max_by(|a, b| a.error().abs().total_cmp(&b.error().abs()))
    }

    /// Samples failing the tolerance, with their error.
    pub fn violations(&self) -> impl Iterator<Item = (&Sample, AuditError)> + '_ {
        self.samples.iter().filter_map(move |sample| {
            self.tolerance
                .check_sample(sample)
                .err()
                .map(|error| (sample, error))
        })
    }

    /// Check every sample against the tolerance.
    ///
    /// # Errors
    /// The first violation in recording order.
    pub fn check(&self) -> AuditResult<()> {
        for sample in &self.samples {
            tracing::trace!(label = sample.label, error = sample.error(), "checking sample");
            self.tolerance.check_sample(sample)?;
        }
        Ok(())
    }

    /// Drop all samples, keeping tolerance and observer.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl fmt::Debug for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriftReport")
            .field("tolerance", &self.tolerance)
            .field("samples", &self.samples)
            .finish()
    }
}

impl fmt::Display for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            let status = match self.tolerance.check_sample(sample) {
                Ok(()) => "ok",
                Err(_) => "FAIL",
            };
            writeln!(
                f,
                "{}: value = {}, exact value = {}, error = {:e} [{}]",
                sample.label,
                sample.value,
                sample.exact,
                sample.error(),
                status
            )?;
        }
        Ok(())
    }
}
