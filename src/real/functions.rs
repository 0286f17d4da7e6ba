// ============================================================================
// Elementary and Transcendental Functions
// One method per math primitive, evaluated lane by lane
// ============================================================================

use super::{FloatOf, Operand, Real};
use crate::precision::{Mode, Precision, Working};

macro_rules! unary_functions {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        impl<P: Precision, M: Mode> Real<P, M> {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(self) -> Self {
                    self.map(<FloatOf<P> as Working>::$name, <f64 as Working>::$name)
                }
            )*
        }
    };
}

macro_rules! binary_functions {
    ($($(#[$doc:meta])* $name:ident($arg:ident);)*) => {
        impl<P: Precision, M: Mode> Real<P, M> {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(self, $arg: impl Operand<P, M>) -> Self {
                    self.zip(
                        $arg.into_real(),
                        <FloatOf<P> as Working>::$name,
                        <f64 as Working>::$name,
                    )
                }
            )*
        }
    };
}

unary_functions! {
    /// Absolute value.
    abs;
    /// Largest integer not greater than the value.
    floor;
    /// Smallest integer not less than the value.
    ceil;
    /// Nearest integer, halfway cases away from zero.
    round;
    /// Nearest integer, halfway cases to even.
    rint;
    /// Integer part, rounded toward zero.
    trunc;
    sqrt;
    cbrt;
    /// `1 / x`.
    recip;
    exp;
    /// `2^x`.
    exp2;
    /// `e^x - 1`, accurate near zero.
    exp_m1;
    /// Natural logarithm.
    ln;
    log2;
    log10;
    /// `ln(1 + x)`, accurate near zero.
    ln_1p;
    sin;
    cos;
    tan;
    asin;
    acos;
    atan;
    sinh;
    cosh;
    tanh;
    asinh;
    acosh;
    atanh;
    /// Error function.
    erf;
    /// Complementary error function.
    erfc;
    /// Gamma function.
    gamma;
    /// Natural log of `|gamma(x)|`.
    ln_gamma;
}

binary_functions! {
    /// `self^exponent`.
    powf(exponent);
    /// `sqrt(self^2 + other^2)` without intermediate overflow.
    hypot(other);
    /// Four-quadrant arctangent of `self / other`.
    atan2(other);
    /// IEEE remainder: `self - n * divisor`, `n` rounded to nearest.
    remainder(divisor);
    /// C `fmod`: `self - n * divisor`, `n` truncated toward zero. Same as `%`.
    fmod(divisor);
}

impl<P: Precision, M: Mode> Real<P, M> {
    /// `self^n` for an integer power.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        self.map(|v| v.powi(n), |v| v.powi(n))
    }

    /// `-1` if the working value is negative, `+1` otherwise (zero and NaN
    /// included).
    ///
    /// The reference lane is the same constant: a sign never reports error.
    #[inline]
    pub fn sign(self) -> Self {
        let unit = if self.value() < <FloatOf<P> as Working>::ZERO {
            <FloatOf<P> as Working>::NEG_ONE
        } else {
            <FloatOf<P> as Working>::ONE
        };
        Self::new(unit)
    }
}
