// ============================================================================
// Tolerance
// Configurable drift limit for tracked values
// ============================================================================

use super::errors::{AuditError, AuditResult};
use super::report::Sample;
use crate::precision::{Precision, Tracked};
use crate::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum drift accepted for a tracked value.
///
/// A value passes when `|error| <= absolute + relative * |exact|`.
///
/// # Example
/// ```
/// use shadow_real::audit::Tolerance;
/// use shadow_real::{Real, Single, Tracked};
///
/// let tolerance = Tolerance::new(0.0, 1e-6)?;
/// let x = Real::<Single, Tracked>::new(1e6) + 1.2_f32;
/// assert!(tolerance.check(x).is_ok());
/// assert!(tolerance.check(x - 1e6_f32).is_err());
/// # Ok::<(), shadow_real::audit::AuditError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// Limit independent of magnitude
    pub absolute: f64,
    /// Limit proportional to `|exact|`
    pub relative: f64,
}

impl Tolerance {
    /// Default absolute limit
    pub const DEFAULT_ABSOLUTE: f64 = 1e-6;

    /// Default relative limit (a few `f32` ulps)
    pub const DEFAULT_RELATIVE: f64 = 4.0 * f32::EPSILON as f64;

    /// Create a tolerance from both limits.
    ///
    /// # Errors
    /// Returns `InvalidTolerance` if either limit is negative or NaN.
    pub fn new(absolute: f64, relative: f64) -> AuditResult<Self> {
        if !Self::is_valid_limit(absolute) || !Self::is_valid_limit(relative) {
            return Err(AuditError::InvalidTolerance);
        }
        Ok(Self { absolute, relative })
    }

    /// Only an absolute limit.
    pub fn absolute(limit: f64) -> AuditResult<Self> {
        Self::new(limit, 0.0)
    }

    /// Only a relative limit.
    pub fn relative(limit: f64) -> AuditResult<Self> {
        Self::new(0.0, limit)
    }

    /// Replace the absolute limit.
    pub fn with_absolute(self, limit: f64) -> AuditResult<Self> {
        Self::new(limit, self.relative)
    }

    /// Replace the relative limit.
    pub fn with_relative(self, limit: f64) -> AuditResult<Self> {
        Self::new(self.absolute, limit)
    }

    /// Parse a JSON tolerance such as `{"absolute": 1e-6, "relative": 0.0}`.
    ///
    /// Missing fields take their default value.
    ///
    /// # Errors
    /// - `InvalidConfig` if the text is not a valid tolerance object
    /// - `InvalidTolerance` if a limit is negative
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> AuditResult<Self> {
        let parsed: Tolerance =
            serde_json::from_str(text).map_err(|_| AuditError::InvalidConfig)?;
        Self::new(parsed.absolute, parsed.relative)
    }

    /// Allowed `|error|` for a given reference value.
    #[inline]
    pub fn limit_for(&self, exact: f64) -> f64 {
        self.absolute + self.relative * exact.abs()
    }

    /// Check a tracked value.
    ///
    /// # Errors
    /// - `NonFinite` if exactly one lane is finite, or both are non-finite
    ///   but different
    /// - `ExcessDrift` if `|error|` exceeds [`limit_for`](Self::limit_for)
    pub fn check<P: Precision>(&self, real: Real<P, Tracked>) -> AuditResult<()> {
        self.check_sample(&Sample::of("", real))
    }

    /// Check an already recorded sample.
    pub fn check_sample(&self, sample: &Sample) -> AuditResult<()> {
        let (value, exact) = (sample.value, sample.exact);

        if !value.is_finite() || !exact.is_finite() {
            let same = (value.is_nan() && exact.is_nan()) || value == exact;
            return if same {
                Ok(())
            } else {
                Err(AuditError::NonFinite { value, exact })
            };
        }

        let error = sample.error();
        let limit = self.limit_for(exact);
        if error.abs() > limit {
            Err(AuditError::ExcessDrift { error, limit })
        } else {
            Ok(())
        }
    }

    fn is_valid_limit(limit: f64) -> bool {
        limit >= 0.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }
}

impl<P: Precision> Real<P, Tracked> {
    /// Pass the value through if its drift is within `tolerance`.
    ///
    /// # Errors
    /// See [`Tolerance::check`].
    pub fn audit(self, tolerance: &Tolerance) -> AuditResult<Self> {
        tolerance.check(self).map(|()| self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::{Double, Single};

    type ST = Real<Single, Tracked>;

    #[test]
    fn test_new_validates() {
        assert!(Tolerance::new(0.0, 0.0).is_ok());
        assert_eq!(
            Tolerance::new(-1.0, 0.0),
            Err(AuditError::InvalidTolerance)
        );
        assert_eq!(
            Tolerance::relative(f64::NAN),
            Err(AuditError::InvalidTolerance)
        );
        assert_eq!(
            Tolerance::default().with_absolute(-0.5),
            Err(AuditError::InvalidTolerance)
        );
    }

    #[test]
    fn test_default_limits() {
        let t = Tolerance::default();
        assert_eq!(t.absolute, 1e-6);
        assert_eq!(t.relative, 4.0 * f32::EPSILON as f64);
    }

    #[test]
    fn test_limit_for() {
        let t = Tolerance::new(0.5, 0.25).unwrap();
        assert_eq!(t.limit_for(-4.0), 1.5);
    }

    #[test]
    fn test_check_within_and_beyond() {
        let t = Tolerance::absolute(1e-3).unwrap();
        assert!(t.check(ST::new(3.0)).is_ok());

        let drifted = ST::with_exact(1.0, 1.01_f64);
        match t.check(drifted) {
            Err(AuditError::ExcessDrift { error, limit }) => {
                assert!((error - 0.01).abs() < 1e-12);
                assert_eq!(limit, 1e-3);
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_check_non_finite() {
        let t = Tolerance::default();
        let overflow = ST::new(f32::MAX) * 2.0_f32;
        assert_eq!(
            t.check(overflow),
            Err(AuditError::NonFinite {
                value: f64::INFINITY,
                exact: f32::MAX as f64 * 2.0,
            })
        );

        // Both lanes agree on the special value
        let inf = ST::new(f32::INFINITY);
        assert!(t.check(inf).is_ok());
        let nan = ST::new(0.0) / 0.0_f32;
        assert!(t.check(nan).is_ok());
    }

    #[test]
    fn test_audit_passes_value_through() {
        let t = Tolerance::default();
        let x = Real::<Double, Tracked>::new(2.0).sqrt();
        assert_eq!(x.audit(&t).map(|r| r.value()), Ok(2.0_f64.sqrt()));
        assert!(ST::with_exact(0.0, 1.0_f64).audit(&t).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let t = Tolerance::from_json(r#"{"absolute": 0.01}"#).unwrap();
        assert_eq!(t.absolute, 0.01);
        assert_eq!(t.relative, Tolerance::DEFAULT_RELATIVE);

        assert_eq!(
            Tolerance::from_json(r#"{"absolute": -1.0}"#),
            Err(AuditError::InvalidTolerance)
        );
        assert_eq!(
            Tolerance::from_json("not json"),
            Err(AuditError::InvalidConfig)
        );
    }
}
