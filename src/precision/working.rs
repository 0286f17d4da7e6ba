// ============================================================================
// Working Float Trait
// Uniform access to the math primitives of f32 and f64
// ============================================================================

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Native floating-point type usable as a working lane.
///
/// Every method forwards to the primitive of the same name in `std`, or to
/// `libm` where stable `std` has no equivalent (`erf`, `erfc`, `gamma`,
/// `ln_gamma`, `rint`, `remainder`). Nothing is validated: NaN and infinities
/// come back exactly as the primitive produces them.
///
/// Because the trait is also implemented by `f64`, the reference lane of a
/// [`Real`](crate::Real) is computed through the same entry points. It also
/// serves the raw/raw shape of the two-argument functions:
///
/// ```
/// use shadow_real::Working;
///
/// assert_eq!(Working::hypot(3.0_f32, 4.0), 5.0);
/// ```
pub trait Working:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    /// Negative zero, the identity of IEEE addition.
    const NEG_ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;

    /// Promote to the reference precision.
    fn widen(self) -> f64;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Round half to even (current rounding mode).
    fn rint(self) -> Self;
    fn trunc(self) -> Self;
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn recip(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn exp_m1(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn ln_1p(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    /// The gamma function (C `tgamma`).
    fn gamma(self) -> Self;
    /// Natural log of the absolute value of the gamma function (C `lgamma`).
    fn ln_gamma(self) -> Self;

    fn powi(self, n: i32) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// IEEE remainder: quotient rounded to nearest.
    fn remainder(self, divisor: Self) -> Self;
    /// C `fmod`: quotient truncated toward zero.
    fn fmod(self, divisor: Self) -> Self;
    /// C `fmin`: a NaN operand is ignored.
    fn min(self, other: Self) -> Self;
    /// C `fmax`: a NaN operand is ignored.
    fn max(self, other: Self) -> Self;
}

macro_rules! forward_std {
    ($F:ident: $($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(self) -> Self {
                $F::$name(self)
            }
        )*
    };
    ($F:ident => bool: $($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(self) -> bool {
                $F::$name(self)
            }
        )*
    };
    ($F:ident => binary: $($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(self, other: Self) -> Self {
                $F::$name(self, other)
            }
        )*
    };
}

macro_rules! impl_working {
    (
        $F:ident,
        erf: $erf:path,
        erfc: $erfc:path,
        gamma: $gamma:path,
        ln_gamma: $ln_gamma:path,
        rint: $rint:path,
        remainder: $remainder:path $(,)?
    ) => {
        impl Working for $F {
            const ZERO: Self = 0.0;
            const NEG_ZERO: Self = -0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;

            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            forward_std!($F => bool: is_nan, is_finite, is_infinite, is_sign_negative);

            forward_std!($F:
                abs, floor, ceil, round, trunc, sqrt, cbrt, recip,
                exp, exp2, exp_m1, ln, log2, log10, ln_1p,
                sin, cos, tan, asin, acos, atan,
                sinh, cosh, tanh, asinh, acosh, atanh,
            );

            forward_std!($F => binary: powf, hypot, atan2, min, max);

            #[inline]
            fn rint(self) -> Self {
                $rint(self)
            }

            #[inline]
            fn erf(self) -> Self {
                $erf(self)
            }

            #[inline]
            fn erfc(self) -> Self {
                $erfc(self)
            }

            #[inline]
            fn gamma(self) -> Self {
                $gamma(self)
            }

            #[inline]
            fn ln_gamma(self) -> Self {
                $ln_gamma(self)
            }

            #[inline]
            fn powi(self, n: i32) -> Self {
                $F::powi(self, n)
            }

            #[inline]
            fn remainder(self, divisor: Self) -> Self {
                $remainder(self, divisor)
            }

            #[inline]
            fn fmod(self, divisor: Self) -> Self {
                self % divisor
            }
        }
    };
}

impl_working!(
    f32,
    erf: libm::erff,
    erfc: libm::erfcf,
    gamma: libm::tgammaf,
    ln_gamma: libm::lgammaf,
    rint: libm::rintf,
    remainder: libm::remainderf,
);

impl_working!(
    f64,
    erf: libm::erf,
    erfc: libm::erfc,
    gamma: libm::tgamma,
    ln_gamma: libm::lgamma,
    rint: libm::rint,
    remainder: libm::remainder,
);
