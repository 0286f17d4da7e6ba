// ============================================================================
// Precision Module
// Compile-time selection of working precision and tracking mode
// ============================================================================
//
// This module provides:
// - Working: the float abstraction implemented by f32 and f64
// - Single/Double: working precision markers (f32 / f64)
// - Plain/Tracked: tracking mode markers and their payload shapes
//
// Design principles:
// - Every choice is a type parameter, never a runtime tag
// - Plain payloads are repr(transparent) over the native float
// - The reference lane is always f64

mod mode;
mod working;

pub use mode::{Bare, Mode, Paired, Payload, Plain, Tracked};
pub use working::Working;

use std::fmt;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Working precision of a [`Real`](crate::Real).
///
/// Implemented only by [`Single`] and [`Double`].
pub trait Precision: sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Native float the working lane is computed in.
    type Float: Working;

    /// Short name used by `Debug` output.
    const NAME: &'static str;
}

/// Single precision: the working lane is an `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Single;

/// Double precision: the working lane is an `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Double;

impl sealed::Sealed for Single {}
impl sealed::Sealed for Double {}

impl Precision for Single {
    type Float = f32;
    const NAME: &'static str = "Single";
}

impl Precision for Double {
    type Float = f64;
    const NAME: &'static str = "Double";
}
