// ============================================================================
// Real
// Floating-point value with an optional f64 shadow computation
// ============================================================================

mod functions;
mod operand;
mod ops;
mod reduce;

pub use operand::Operand;

use crate::precision::{
    Double, Mode, Paired, Payload, Plain, Precision, Single, Tracked, Working,
};
use num_traits::AsPrimitive;
use std::fmt;

/// A float that computes at working precision `P` and, in [`Tracked`] mode,
/// repeats every operation in `f64` to measure the rounding drift.
///
/// # Type Parameters
/// - `P`: [`Single`] (`f32`, default) or [`Double`](crate::Double) (`f64`)
/// - `M`: [`Plain`] (default) or [`Tracked`]
///
/// `Real<Single>` is the equivalent of `f32`: it has the same size,
/// alignment and results. `Real<Single, Tracked>` additionally carries the
/// value the same expression would have had if every step were evaluated in
/// `f64`, available through [`exact`](Real::exact) and
/// [`error`](Real::error).
///
/// Both lanes are computed independently from their own inputs, so two
/// algebraically equivalent expressions report different errors:
///
/// ```
/// use shadow_real::{Real, Single, Tracked};
///
/// type R = Real<Single, Tracked>;
///
/// let c = R::new(100.00001);
/// let d = R::new(100.0);
/// let e = c * c - d * d;
/// let f = (c + d) * (c - d);
///
/// assert!(f.error().abs() < e.error().abs());
/// ```
///
/// # Thread Safety
/// `Real` is `Copy + Send + Sync` and owns no external state. Mutating one
/// instance from several threads needs the same synchronization as a bare
/// float.
#[repr(transparent)]
pub struct Real<P: Precision = Single, M: Mode = Plain> {
    payload: M::Storage<P::Float>,
}

/// Shorthand for the working float of a precision.
pub(crate) type FloatOf<P> = <P as Precision>::Float;

impl<P: Precision, M: Mode> Real<P, M> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a working value.
    ///
    /// In tracking mode the reference lane is the same value promoted to
    /// `f64`, so a freshly built value always has zero error.
    #[inline]
    pub fn new(value: P::Float) -> Self {
        Self {
            payload: Payload::seed(value),
        }
    }

    /// Overwrite with a working value.
    ///
    /// Both lanes are reseeded from `value`: any divergence accumulated so far
    /// is discarded. Use the compound operators to keep it.
    #[inline]
    pub fn assign(&mut self, value: P::Float) {
        *self = Self::new(value);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The working-precision value.
    #[inline]
    pub fn value(self) -> P::Float {
        self.payload.value()
    }

    /// Whether this type carries a reference lane.
    #[inline]
    pub const fn is_tracking() -> bool {
        M::TRACKING
    }

    /// `true` if the working value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value().is_nan()
    }

    /// `true` if the working value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value().is_finite()
    }

    /// `true` if the working value is positive or negative infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.value().is_infinite()
    }

    /// `true` if the working value has a negative sign bit.
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.value().is_sign_negative()
    }

    // ========================================================================
    // Lane plumbing
    // ========================================================================

    #[inline(always)]
    pub(crate) fn map(
        self,
        work: impl FnOnce(FloatOf<P>) -> FloatOf<P>,
        reference: impl FnOnce(f64) -> f64,
    ) -> Self {
        Self {
            payload: self.payload.map(work, reference),
        }
    }

    #[inline(always)]
    pub(crate) fn zip(
        self,
        rhs: Self,
        work: impl FnOnce(FloatOf<P>, FloatOf<P>) -> FloatOf<P>,
        reference: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        Self {
            payload: self.payload.zip(rhs.payload, work, reference),
        }
    }
}

impl<P: Precision> Real<P, Tracked> {
    /// Create from a working value and an independently computed reference.
    ///
    /// The seed may be any primitive number; it is converted with an `as f64`
    /// cast, so 64-bit integers beyond 2^53 round to the nearest `f64`.
    ///
    /// Only tracked values have a reference lane:
    ///
    /// ```compile_fail
    /// use shadow_real::Real;
    ///
    /// let x = Real::<shadow_real::Single>::with_exact(1.0, 1.0);
    /// ```
    #[inline]
    pub fn with_exact(value: P::Float, exact: impl AsPrimitive<f64>) -> Self {
        Self {
            payload: Paired {
                value,
                exact: exact.as_(),
            },
        }
    }

    /// The reference value: what the computation yields when every step is
    /// carried out in `f64`.
    ///
    /// Plain values have no reference lane:
    ///
    /// ```compile_fail
    /// use shadow_real::Real;
    ///
    /// let x = Real::<shadow_real::Single>::new(1.0);
    /// let _ = x.exact();
    /// ```
    #[inline]
    pub fn exact(self) -> f64 {
        self.payload.exact
    }

    /// Reference minus working value, in `f64`.
    ///
    /// ```compile_fail
    /// use shadow_real::Real;
    ///
    /// let x = Real::<shadow_real::Double>::new(1.0);
    /// let _ = x.error();
    /// ```
    #[inline]
    pub fn error(self) -> f64 {
        self.payload.error()
    }

    /// `|error| / |exact|`.
    ///
    /// Infinite (or NaN) when the reference value is zero.
    #[inline]
    pub fn relative_error(self) -> f64 {
        self.error().abs() / self.exact().abs()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<P: Precision, M: Mode> Clone for Real<P, M> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Precision, M: Mode> Copy for Real<P, M> {}

impl<P: Precision, M: Mode> Default for Real<P, M> {
    #[inline]
    fn default() -> Self {
        Self::new(<FloatOf<P> as Working>::ZERO)
    }
}

macro_rules! impl_float_conversions {
    ($($P:ident => $F:ident),* $(,)?) => {$(
        impl<M: Mode> From<$F> for Real<$P, M> {
            #[inline]
            fn from(value: $F) -> Self {
                Self::new(value)
            }
        }

        impl<M: Mode> From<Real<$P, M>> for $F {
            #[inline]
            fn from(real: Real<$P, M>) -> Self {
                real.value()
            }
        }
    )*};
}

impl_float_conversions!(Single => f32, Double => f64);

// ============================================================================
// Display and Debug
// ============================================================================

impl<P: Precision, M: Mode> fmt::Display for Real<P, M> {
    /// A bare number for plain values,
    /// `{value = V, exact value = X, error = E}` for tracked ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.payload.render(f)
    }
}

impl<P: Precision, M: Mode> fmt::Debug for Real<P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real<{}, {}>({:?})", P::NAME, M::NAME, self.payload)
    }
}

// ============================================================================
// Tests
// ============================================================================
