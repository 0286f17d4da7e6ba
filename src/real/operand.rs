// ============================================================================
// Operand Shapes
// Anything that can stand on either side of a Real operation
// ============================================================================

use super::Real;
use crate::precision::{Double, Mode, Precision, Single};

/// A value usable as an operand of a `Real<P, M>` operation.
///
/// Implemented for `Real<P, M>`, `&Real<P, M>` and the raw working float of
/// `P`. A raw operand is promoted exactly like [`Real::new`]: its reference
/// lane is the raw value widened to `f64`.
pub trait Operand<P: Precision, M: Mode>: Copy {
    fn into_real(self) -> Real<P, M>;
}

impl<P: Precision, M: Mode> Operand<P, M> for Real<P, M> {
    #[inline(always)]
    fn into_real(self) -> Real<P, M> {
        self
    }
}

impl<P: Precision, M: Mode> Operand<P, M> for &Real<P, M> {
    #[inline(always)]
    fn into_real(self) -> Real<P, M> {
        *self
    }
}

impl<M: Mode> Operand<Single, M> for f32 {
    #[inline(always)]
    fn into_real(self) -> Real<Single, M> {
        Real::new(self)
    }
}

impl<M: Mode> Operand<Double, M> for f64 {
    #[inline(always)]
    fn into_real(self) -> Real<Double, M> {
        Real::new(self)
    }
}
