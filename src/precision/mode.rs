// ============================================================================
// Tracking Modes
// Plain and tracked payload shapes, selected at compile time
// ============================================================================

use super::sealed::Sealed;
use super::working::Working;
use std::fmt;

/// Storage shape of a [`Real`](crate::Real) for one tracking mode.
///
/// Every operation on `Real` goes through [`map`](Payload::map) or
/// [`zip`](Payload::zip), which take the working-precision and the
/// reference-precision version of the same operation. A plain payload only
/// runs the first; a tracked payload runs both, each on its own lane.
pub trait Payload<F: Working>: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Build a payload from one working value. The reference lane, if any,
    /// is that value promoted to `f64`.
    fn seed(value: F) -> Self;

    /// The working lane.
    fn value(self) -> F;

    /// Apply a unary operation lane by lane.
    fn map(self, work: impl FnOnce(F) -> F, reference: impl FnOnce(f64) -> f64) -> Self;

    /// Apply a binary operation lane by lane.
    fn zip(
        self,
        rhs: Self,
        work: impl FnOnce(F, F) -> F,
        reference: impl FnOnce(f64, f64) -> f64,
    ) -> Self;

    /// `Display` rendering.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Tracking mode of a [`Real`](crate::Real).
///
/// Implemented only by [`Plain`] and [`Tracked`].
pub trait Mode: Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Payload stored for working type `F`.
    type Storage<F: Working>: Payload<F>;

    /// Whether a reference lane is carried.
    const TRACKING: bool;

    /// Short name used by `Debug` output.
    const NAME: &'static str;
}

/// No comparison: a `Real` is exactly its working float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Plain;

/// Comparison tracking: every operation is repeated in `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tracked;

impl Sealed for Plain {}
impl Sealed for Tracked {}

impl Mode for Plain {
    type Storage<F: Working> = Bare<F>;
    const TRACKING: bool = false;
    const NAME: &'static str = "Plain";
}

impl Mode for Tracked {
    type Storage<F: Working> = Paired<F>;
    const TRACKING: bool = true;
    const NAME: &'static str = "Tracked";
}

// ============================================================================
// Bare Payload
// ============================================================================

/// Payload of [`Plain`]: the working float and nothing else.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(transparent)]
pub struct Bare<F>(pub(crate) F);

impl<F: Working> Payload<F> for Bare<F> {
    #[inline(always)]
    fn seed(value: F) -> Self {
        Self(value)
    }

    #[inline(always)]
    fn value(self) -> F {
        self.0
    }

    #[inline(always)]
    fn map(self, work: impl FnOnce(F) -> F, _reference: impl FnOnce(f64) -> f64) -> Self {
        Self(work(self.0))
    }

    #[inline(always)]
    fn zip(
        self,
        rhs: Self,
        work: impl FnOnce(F, F) -> F,
        _reference: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        Self(work(self.0, rhs.0))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<F: fmt::Debug> fmt::Debug for Bare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

// ============================================================================
// Paired Payload
// ============================================================================

/// Payload of [`Tracked`]: the working float plus its `f64` reference.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Paired<F> {
    pub(crate) value: F,
    pub(crate) exact: f64,
}

impl<F: Working> Paired<F> {
    #[inline]
    pub(crate) fn error(self) -> f64 {
        self.exact - self.value.widen()
    }
}

impl<F: Working> Payload<F> for Paired<F> {
    #[inline(always)]
    fn seed(value: F) -> Self {
        Self {
            value,
            exact: value.widen(),
        }
    }

    #[inline(always)]
    fn value(self) -> F {
        self.value
    }

    #[inline(always)]
    fn map(self, work: impl FnOnce(F) -> F, reference: impl FnOnce(f64) -> f64) -> Self {
        Self {
            value: work(self.value),
            exact: reference(self.exact),
        }
    }

    #[inline(always)]
    fn zip(
        self,
        rhs: Self,
        work: impl FnOnce(F, F) -> F,
        reference: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        Self {
            value: work(self.value, rhs.value),
            exact: reference(self.exact, rhs.exact),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error();
        match f.precision() {
            Some(p) => write!(
                f,
                "{{value = {:.*}, exact value = {:.*}, error = {:.*}}}",
                p, self.value, p, self.exact, p, error
            ),
            None => write!(
                f,
                "{{value = {}, exact value = {}, error = {}}}",
                self.value, self.exact, error
            ),
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for Paired<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value: {:?}, exact: {:?}", self.value, self.exact)
    }
}
