// ============================================================================
// Reductions
// min / max / clamp over wrapped and raw operands
// ============================================================================
//
// The binary cases use the fmin/fmax primitive (a NaN operand is ignored) on
// both lanes. Longer argument lists fold left to right, see `min!`, `max!`,
// `math::min_all` and `math::max_all`.

use super::{FloatOf, Operand, Real};
use crate::precision::{Mode, Precision, Working};

impl<P: Precision, M: Mode> Real<P, M> {
    /// Smaller of two values.
    ///
    /// Each lane takes the minimum of its own inputs, so the reference lane
    /// may come from the other operand when the lanes disagree on ordering.
    #[inline]
    pub fn min(self, other: impl Operand<P, M>) -> Self {
        self.zip(
            other.into_real(),
            <FloatOf<P> as Working>::min,
            <f64 as Working>::min,
        )
    }

    /// Larger of two values. Each lane takes the maximum of its own inputs.
    #[inline]
    pub fn max(self, other: impl Operand<P, M>) -> Self {
        self.zip(
            other.into_real(),
            <FloatOf<P> as Working>::max,
            <f64 as Working>::max,
        )
    }

    /// Restrict the value to `[lo, hi]`, evaluated as `max(lo, min(self, hi))`.
    ///
    /// Never panics: with `lo > hi` the result is `lo`.
    #[inline]
    pub fn clamp(self, lo: impl Operand<P, M>, hi: impl Operand<P, M>) -> Self {
        lo.into_real().max(self.min(hi))
    }
}

#[cfg(test)]
mod tests {
    use crate::precision::{Double, Single, Tracked};
    use crate::{max, min, Real};
    use quickcheck::{quickcheck, TestResult};

    type S = Real<Single>;
    type ST = Real<Single, Tracked>;
    type DT = Real<Double, Tracked>;

    #[test]
    fn test_min_max_plain() {
        let a = S::new(1.0);
        let b = S::new(2.0);
        assert_eq!(a.min(b).value(), 1.0);
        assert_eq!(a.max(b).value(), 2.0);
        assert_eq!(a.max(5.0_f32).value(), 5.0);
        assert_eq!(a.min(f32::NAN).value(), 1.0);
    }

    #[test]
    fn test_max_reference_lane_uses_maximum() {
        // Lanes disagree on ordering: each lane reduces independently
        let a = DT::with_exact(1.0, 10.0_f64);
        let b = DT::with_exact(2.0, 5.0_f64);

        let hi = a.max(b);
        assert_eq!(hi.value(), 2.0);
        assert_eq!(hi.exact(), 10.0);

        let lo = a.min(b);
        assert_eq!(lo.value(), 1.0);
        assert_eq!(lo.exact(), 5.0);
    }

    #[test]
    fn test_max_with_raw_operand_promotes() {
        let a = ST::new(1.5);
        let m = a.max(2.5_f32);
        assert_eq!(m.value(), 2.5);
        assert_eq!(m.exact(), 2.5);
        assert_eq!(m.error(), 0.0);
    }

    #[test]
    fn test_clamp_conventional_order() {
        let lo = 0.0_f32;
        let hi = 1.0_f32;
        assert_eq!(S::new(-0.5).clamp(lo, hi).value(), 0.0);
        assert_eq!(S::new(0.25).clamp(lo, hi).value(), 0.25);
        assert_eq!(S::new(7.0).clamp(lo, hi).value(), 1.0);
        assert_eq!(S::new(7.0).clamp(S::new(lo), &S::new(hi)).value(), 1.0);
    }

    #[test]
    fn test_clamp_tracked_lanes() {
        let x = DT::with_exact(0.5, 2.0_f64);
        let c = x.clamp(0.0_f64, 1.0_f64);
        assert_eq!(c.value(), 0.5);
        assert_eq!(c.exact(), 1.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        assert_eq!(S::new(0.5).clamp(2.0_f32, 1.0_f32).value(), 2.0);
    }

    #[test]
    fn test_variadic_macros() {
        let a = ST::new(3.0);
        let b = ST::new(-1.0);
        assert_eq!(min!(a, b, 2.0_f32).value(), -1.0);
        assert_eq!(max!(a, b, 2.0_f32).value(), 3.0);
        assert_eq!(max!(1.0_f32, a, 7.0_f32, b).value(), 7.0);
        assert_eq!(min!(a).value(), 3.0);
    }

    fn any_nan(values: &[f32]) -> bool {
        values.iter().any(|v| v.is_nan())
    }

    quickcheck! {
        fn min_is_left_fold(a: f32, b: f32, c: f32) -> TestResult {
            if any_nan(&[a, b, c]) {
                return TestResult::discard();
            }
            let folded = min!(S::new(a), b, S::new(c));
            let nested = S::new(a).min(b).min(c);
            TestResult::from_bool(folded == nested)
        }

        fn min_is_associative_and_commutative(a: f32, b: f32, c: f32) -> TestResult {
            if any_nan(&[a, b, c]) {
                return TestResult::discard();
            }
            let expected = a.min(b).min(c);
            let shapes = [
                min!(ST::new(a), ST::new(b), ST::new(c)),
                min!(c, ST::new(a), b),
                min!(ST::new(b), c, a),
                min!(b, a, ST::new(c)),
                min!(ST::new(c), ST::new(b), a),
            ];
            TestResult::from_bool(shapes.iter().all(|r| *r == expected))
        }

        fn max_is_associative_and_commutative(a: f32, b: f32, c: f32) -> TestResult {
            if any_nan(&[a, b, c]) {
                return TestResult::discard();
            }
            let expected = a.max(b).max(c);
            let shapes = [
                max!(S::new(a), b, c),
                max!(c, S::new(b), S::new(a)),
                max!(b, S::new(c), a),
            ];
            TestResult::from_bool(shapes.iter().all(|r| *r == expected))
        }

        fn clamp_stays_in_bounds(x: f32, lo: f32, hi: f32) -> TestResult {
            if any_nan(&[x, lo, hi]) || lo > hi {
                return TestResult::discard();
            }
            let c = S::new(x).clamp(lo, hi);
            TestResult::from_bool(c >= lo && c <= hi)
        }
    }
}
