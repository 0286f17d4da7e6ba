// ============================================================================
// Math Free Functions
// Function-call surface over any Real operand shape
// ============================================================================
//
// `math::sin(x)` is `x.sin()` for a `Real`, and builds the `Real` first for a
// raw float. With only raw arguments the precision follows the float type but
// the mode must be spelled out: `math::sin::<Single, Tracked>(0.5)`.
// Raw/raw two-argument calls that should stay raw use `Working` directly.

use crate::precision::{Mode, Precision};
use crate::{Operand, Real};

macro_rules! unary_free_functions {
    ($($name:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name<P: Precision, M: Mode>(x: impl Operand<P, M>) -> Real<P, M> {
            x.into_real().$name()
        }
    )*};
}

macro_rules! binary_free_functions {
    ($($name:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name<P: Precision, M: Mode>(
            x: impl Operand<P, M>,
            y: impl Operand<P, M>,
        ) -> Real<P, M> {
            x.into_real().$name(y)
        }
    )*};
}

unary_free_functions!(
    abs, floor, ceil, round, rint, trunc, sqrt, cbrt, recip, exp, exp2, exp_m1, ln, log2, log10,
    ln_1p, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, erf, erfc,
    gamma, ln_gamma, sign,
);

binary_free_functions!(powf, hypot, atan2, remainder, fmod, min, max);

/// `x^n` for an integer power.
#[inline]
pub fn powi<P: Precision, M: Mode>(x: impl Operand<P, M>, n: i32) -> Real<P, M> {
    x.into_real().powi(n)
}

/// `max(lo, min(x, hi))`.
#[inline]
pub fn clamp<P: Precision, M: Mode>(
    x: impl Operand<P, M>,
    lo: impl Operand<P, M>,
    hi: impl Operand<P, M>,
) -> Real<P, M> {
    x.into_real().clamp(lo, hi)
}

/// Minimum of `first` and every item of `rest`, folded left to right.
pub fn min_all<P, M, I>(first: impl Operand<P, M>, rest: I) -> Real<P, M>
where
    P: Precision,
    M: Mode,
    I: IntoIterator,
    I::Item: Operand<P, M>,
{
    rest.into_iter().fold(first.into_real(), |acc, x| acc.min(x))
}

/// Maximum of `first` and every item of `rest`, folded left to right.
pub fn max_all<P, M, I>(first: impl Operand<P, M>, rest: I) -> Real<P, M>
where
    P: Precision,
    M: Mode,
    I: IntoIterator,
    I::Item: Operand<P, M>,
{
    rest.into_iter().fold(first.into_real(), |acc, x| acc.max(x))
}

/// Minimum of two or more operands, `Real` or raw, folded left to right:
/// `min!(a, b, c)` is `math::min(math::min(a, b), c)`.
///
/// ```
/// use shadow_real::{min, Real, Single, Tracked};
///
/// let a = Real::<Single, Tracked>::new(3.0);
/// assert_eq!(min!(a, 1.5_f32, 2.0_f32), 1.5_f32);
/// ```
#[macro_export]
macro_rules! min {
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $y:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!($crate::math::min($x, $y) $(, $rest)*)
    };
}

/// Maximum of two or more operands, `Real` or raw, folded left to right.
///
/// ```
/// use shadow_real::{max, Real, Double, Plain};
///
/// let a = Real::<Double, Plain>::new(3.0);
/// assert_eq!(max!(1.0_f64, a, 2.0_f64), 3.0_f64);
/// ```
#[macro_export]
macro_rules! max {
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $y:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!($crate::math::max($x, $y) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::{Double, Single, Tracked};

    type ST = Real<Single, Tracked>;

    #[test]
    fn test_free_functions_match_methods() {
        let x = ST::new(0.3);
        assert_eq!(sin(x), x.sin());
        assert_eq!(sin(x).exact(), x.sin().exact());
        assert_eq!(gamma(&x).exact(), x.gamma().exact());
        assert_eq!(sign(-x).value(), -1.0);
        assert_eq!(powi(x, 2).exact(), x.exact() * x.exact());
    }

    #[test]
    fn test_free_functions_accept_raw_operands() {
        let s = sqrt::<Single, Tracked>(2.0);
        assert_eq!(s.value(), 2.0_f32.sqrt());
        assert_eq!(s.exact(), 2.0_f64.sqrt());

        let h = hypot(3.0_f64, Real::<Double, Tracked>::new(4.0));
        assert_eq!(h.value(), 5.0);

        let a = atan2(ST::new(1.0), 2.0_f32);
        assert_eq!(a.value(), 1.0_f32.atan2(2.0));
        let b = atan2(2.0_f32, ST::new(1.0));
        assert_eq!(b.value(), 2.0_f32.atan2(1.0));
    }

    #[test]
    fn test_clamp_free_function() {
        let c = clamp(ST::new(5.0), 0.0_f32, 1.0_f32);
        assert_eq!(c.value(), 1.0);
        assert_eq!(c.exact(), 1.0);
    }

    #[test]
    fn test_sequence_reductions() {
        let values = [ST::new(4.0), ST::new(-2.0), ST::new(9.0)];
        assert_eq!(min_all(1.0_f32, values).value(), -2.0);
        assert_eq!(max_all(1.0_f32, &values).value(), 9.0);
        assert_eq!(min_all(ST::new(0.5), Vec::<f32>::new()).value(), 0.5);
        assert_eq!(max_all(ST::new(0.5), [0.25_f32, 0.75]).value(), 0.75);
    }

    #[test]
    fn test_macro_fold_matches_nested_calls() {
        let a = ST::new(3.0);
        let b = ST::with_exact(-1.0, -1.5_f64);
        let folded = crate::min!(a, b, 2.0_f32);
        let nested = min(min(a, b), 2.0_f32);
        assert_eq!(folded.value(), nested.value());
        assert_eq!(folded.exact(), nested.exact());
        assert_eq!(folded.exact(), -1.5);
    }
}
