//! Division guarded against a zero divisor.

use crate::error::{Error, Result};
use crate::hazard::Hazard;
use serde::Deserialize;
use std::ops::Div;
use tracing::debug;

pub const HAZARD: Hazard = Hazard::DivideByZero;

/// How a zero divisor is reported.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDivisorPolicy {
    /// Return the type's zero value.
    #[default]
    ReturnZero,
    /// Return [`Error::DivisionByZero`].
    Error,
}

/// Numeric types that can be divided and compared against zero.
pub trait Divisible: Copy + PartialEq + Div<Output = Self> {
    const ZERO: Self;

    /// `self / rhs` for a non-zero `rhs`. Must not panic.
    fn native_div(self, rhs: Self) -> Self {
        self / rhs
    }

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_divisible_int {
    ($($t:ty),*) => {$(
        impl Divisible for $t {
            const ZERO: Self = 0;

            #[inline]
            fn native_div(self, rhs: Self) -> Self {
                // MIN / -1 wraps to MIN for signed types.
                self.wrapping_div(rhs)
            }
        }
    )*};
}

macro_rules! impl_divisible_float {
    ($($t:ty),*) => {$(
        impl Divisible for $t {
            const ZERO: Self = 0.0;
        }
    )*};
}

impl_divisible_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_divisible_float!(f32, f64);

/// `a / b`, or zero when `b` is zero.
pub fn safe_divide<T: Divisible>(a: T, b: T) -> T {
    if b.is_zero() {
        debug!("zero divisor, returning zero");
        return T::ZERO;
    }
    a.native_div(b)
}

/// `a / b`, or [`Error::DivisionByZero`] when `b` is zero.
pub fn checked_divide<T: Divisible>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(a.native_div(b))
}

pub fn divide_with<T: Divisible>(a: T, b: T, policy: ZeroDivisorPolicy) -> Result<T> {
    match policy {
        ZeroDivisorPolicy::ReturnZero => Ok(safe_divide(a, b)),
        ZeroDivisorPolicy::Error => checked_divide(a, b),
    }
}
