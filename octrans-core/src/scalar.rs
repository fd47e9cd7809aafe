//! Generic scalar abstraction so evaluation methods can run with either a
//! plain `f64` (finite-difference solvers) or an automatic-differentiation
//! scalar (for analytic Jacobians) without duplicating the transcription
//! code. Compile-time parameterization (monomorphization over `S`) is the
//! approach the design notes recommend; a dynamic-dispatch alternative would
//! also satisfy the contract but is not needed here.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric type an OCP can be evaluated over.
///
/// Only the minimal operations the trapezoidal transcription performs
/// (addition, subtraction, multiplication by a constant, finiteness
/// checks, and conversion back to `f64` for diagnostics) are required, so
/// that an AD-enriched scalar type only has to implement this small
/// surface to flow through unmodified transcription code.
pub trait Scalar:
    Copy
    + Clone
    + Debug
    + Default
    + From<f64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// `true` unless the value is NaN or infinite.
    fn is_finite(&self) -> bool;

    /// Lossy narrowing to `f64`, used only for diagnostics/reporting.
    fn to_f64(&self) -> f64;
}

impl Scalar for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}
