// ============================================================================
// Operators
// Arithmetic, compound assignment and relational operators for Real
// ============================================================================
//
// Every arithmetic operator evaluates the working lane from the operands'
// working values and, in tracking mode, the reference lane from their
// reference values. The reference lane is never derived from the working
// result. Relational operators only look at the working lane.

use super::{FloatOf, Operand, Real};
use crate::precision::{Double, Mode, Precision, Single, Working};
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// ============================================================================
// Unary
// ============================================================================

impl<P: Precision, M: Mode> Neg for Real<P, M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v, |v| -v)
    }
}

impl<P: Precision, M: Mode> Neg for &Real<P, M> {
    type Output = Real<P, M>;

    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}

// ============================================================================
// Binary and Compound Assignment
// ============================================================================

macro_rules! impl_binary_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident => $sym:tt;)*) => {$(
        impl<P: Precision, M: Mode, R: Operand<P, M>> $Op<R> for Real<P, M> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: R) -> Self::Output {
                self.zip(rhs.into_real(), |a, b| a $sym b, |a, b| a $sym b)
            }
        }

        impl<P: Precision, M: Mode, R: Operand<P, M>> $Op<R> for &Real<P, M> {
            type Output = Real<P, M>;

            #[inline]
            fn $op(self, rhs: R) -> Self::Output {
                $Op::$op(*self, rhs)
            }
        }

        impl<P: Precision, M: Mode, R: Operand<P, M>> $OpAssign<R> for Real<P, M> {
            #[inline]
            fn $op_assign(&mut self, rhs: R) {
                *self = $Op::$op(*self, rhs);
            }
        }
    )*};
}

impl_binary_ops! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
    Rem::rem, RemAssign::rem_assign => %;
}

// Raw float on the left-hand side. The raw value keeps its position:
// `2.0 - x` is evaluated as `2.0 - x` in both lanes.
macro_rules! impl_raw_lhs_ops {
    ($P:ident, $F:ident: $($Op:ident::$op:ident),*) => {$(
        impl<M: Mode> $Op<Real<$P, M>> for $F {
            type Output = Real<$P, M>;

            #[inline]
            fn $op(self, rhs: Real<$P, M>) -> Self::Output {
                $Op::$op(Real::<$P, M>::new(self), rhs)
            }
        }

        impl<M: Mode> $Op<&Real<$P, M>> for $F {
            type Output = Real<$P, M>;

            #[inline]
            fn $op(self, rhs: &Real<$P, M>) -> Self::Output {
                $Op::$op(Real::<$P, M>::new(self), *rhs)
            }
        }
    )*};
}

impl_raw_lhs_ops!(Single, f32: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
impl_raw_lhs_ops!(Double, f64: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

// ============================================================================
// Relational
// ============================================================================

impl<P: Precision, M: Mode> PartialEq for Real<P, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<P: Precision, M: Mode> PartialOrd for Real<P, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

macro_rules! impl_raw_relational {
    ($($P:ident => $F:ident),* $(,)?) => {$(
        impl<M: Mode> PartialEq<$F> for Real<$P, M> {
            #[inline]
            fn eq(&self, other: &$F) -> bool {
                self.value() == *other
            }
        }

        impl<M: Mode> PartialEq<Real<$P, M>> for $F {
            #[inline]
            fn eq(&self, other: &Real<$P, M>) -> bool {
                *self == other.value()
            }
        }

        impl<M: Mode> PartialOrd<$F> for Real<$P, M> {
            #[inline]
            fn partial_cmp(&self, other: &$F) -> Option<Ordering> {
                self.value().partial_cmp(other)
            }
        }

        impl<M: Mode> PartialOrd<Real<$P, M>> for $F {
            #[inline]
            fn partial_cmp(&self, other: &Real<$P, M>) -> Option<Ordering> {
                self.partial_cmp(&other.value())
            }
        }
    )*};
}

impl_raw_relational!(Single => f32, Double => f64);

// ============================================================================
// Iterator Folds and Numeric Traits
// ============================================================================

impl<P: Precision, M: Mode> Sum for Real<P, M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(<FloatOf<P> as Working>::NEG_ZERO), |acc, x| acc + x)
    }
}

impl<'a, P: Precision, M: Mode> Sum<&'a Real<P, M>> for Real<P, M> {
    fn sum<I: Iterator<Item = &'a Real<P, M>>>(iter: I) -> Self {
        iter.fold(Self::new(<FloatOf<P> as Working>::NEG_ZERO), |acc, x| acc + x)
    }
}

impl<P: Precision, M: Mode> Product for Real<P, M> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(<FloatOf<P> as Working>::ONE), |acc, x| acc * x)
    }
}

impl<'a, P: Precision, M: Mode> Product<&'a Real<P, M>> for Real<P, M> {
    fn product<I: Iterator<Item = &'a Real<P, M>>>(iter: I) -> Self {
        iter.fold(Self::new(<FloatOf<P> as Working>::ONE), |acc, x| acc * x)
    }
}

impl<P: Precision, M: Mode> num_traits::Zero for Real<P, M> {
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value() == <FloatOf<P> as Working>::ZERO
    }
}

impl<P: Precision, M: Mode> num_traits::One for Real<P, M> {
    #[inline]
    fn one() -> Self {
        Self::new(<FloatOf<P> as Working>::ONE)
    }
}

// ============================================================================
// Tests
// ============================================================================
