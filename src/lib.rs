// ============================================================================
// Shadow Real Library
// Floating-point values with an optional f64 shadow computation
// ============================================================================

//! # Shadow Real
//!
//! A drop-in float type that computes at `f32` or `f64` and can shadow every
//! operation in `f64` to show how much rounding drift a computation picks up.
//!
//! ## Features
//!
//! - **Zero-cost plain mode**: `Real<Single>` has the size, alignment and
//!   results of `f32`
//! - **Tracking mode**: `Real<Single, Tracked>` carries a reference value
//!   computed step by step in `f64`
//! - **Mixed operands**: every operator and function accepts `Real`,
//!   `&Real` or the raw working float on either side
//! - **Full function set**: rounding, roots, exponentials, logarithms,
//!   trigonometry, hyperbolics, `erf`/`gamma`, `min`/`max`/`clamp`
//! - **Drift auditing**: tolerances, labeled reports and `tracing` observers
//!
//! ## Example
//!
//! ```rust
//! use shadow_real::prelude::*;
//!
//! type R = Real<Single, Tracked>;
//!
//! // 1.2 is absorbed into the mantissa of 1e6 at f32
//! let a = R::new(1e6);
//! let b = R::new(1.2);
//! let one = (a + b) - a;
//!
//! assert_eq!(one.value(), 1.1875);
//! assert!((one.exact() - 1.2).abs() < 1e-6);
//! println!("{one}");
//!
//! // Switching the alias to Plain turns tracking off at no runtime cost
//! let plain = Real::<Single>::new(1e6) + 1.2_f32;
//! assert_eq!(plain.value(), 1e6_f32 + 1.2_f32);
//! ```

pub mod audit;
pub mod math;
pub mod precision;
mod real;

pub use precision::{Double, Mode, Plain, Precision, Single, Tracked, Working};
pub use real::{Operand, Real};

// Re-exports for convenience
pub mod prelude {
    pub use crate::audit::{AuditError, DriftReport, LoggingObserver, Tolerance};
    pub use crate::math;
    pub use crate::precision::{Double, Mode, Plain, Precision, Single, Tracked, Working};
    pub use crate::real::{Operand, Real};
    pub use crate::{max, min};
}
