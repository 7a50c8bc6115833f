//! Numeric kinds that geometry values can be built from.
//!
//! `Scalar` is sealed: the kernel's rounding and conversion rules are only
//! defined for the four kinds implemented here.

use crate::errors::GeomError;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

mod private {
    pub trait Sealed {}
}

/// A numeric kind usable as the coordinate type of `Point`, `Size` and `Rect`.
pub trait Scalar:
    private::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + fmt::Debug
    + fmt::Display
{
    /// The additive identity.
    const ZERO: Self;

    /// Short name used in error messages (`"i32"`, `"f64"`, ...).
    const KIND: &'static str;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64` with `as` semantics: floats truncate toward zero
    /// when the target is an integer, saturate at the bounds, and NaN
    /// becomes zero.
    fn from_f64(v: f64) -> Self;

    /// Whether `v` converts into this kind without saturating. NaN never
    /// fits; floating kinds accept infinities but not finite values beyond
    /// their largest magnitude.
    fn fits(v: f64) -> bool;

    /// `self + rhs`, clamped at the bounds for integer kinds.
    fn add_sat(self, rhs: Self) -> Self;

    /// `self - rhs`, clamped at the bounds for integer kinds.
    fn sub_sat(self, rhs: Self) -> Self;

    /// The smaller of two values. No NaN special casing: if either side is
    /// NaN the result is `other`.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// The larger of two values, with the same NaN behavior as `min_of`.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    /// Cast into another kind through `f64`.
    #[inline]
    fn cast<M: Scalar>(self) -> M {
        M::from_f64(self.to_f64())
    }

    /// Cast into another kind through `f64`, failing instead of saturating.
    fn try_cast<M: Scalar>(self) -> Result<M, GeomError> {
        let v = self.to_f64();
        if v.is_nan() {
            crate::log::warn!(kind = M::KIND, "rejecting NaN coordinate");
            return Err(GeomError::NotANumber { kind: M::KIND });
        }
        if !M::fits(v) {
            crate::log::warn!(value = v, kind = M::KIND, "coordinate out of range");
            return Err(GeomError::OutOfRange { value: v, kind: M::KIND });
        }
        Ok(M::from_f64(v))
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0;
                const KIND: &'static str = stringify!($t);

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as Self
                }

                #[inline]
                fn fits(v: f64) -> bool {
                    // -MIN is a power of two, so it is exact in f64.
                    v >= <$t>::MIN as f64 && v < -(<$t>::MIN as f64)
                }

                #[inline]
                fn add_sat(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline]
                fn sub_sat(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }
            }
        )+
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const KIND: &'static str = stringify!($t);

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as Self
                }

                #[inline]
                fn fits(v: f64) -> bool {
                    v.is_infinite() || (v >= <$t>::MIN as f64 && v <= <$t>::MAX as f64)
                }

                #[inline]
                fn add_sat(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_sat(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )+
    };
}

impl_scalar_int!(i32, i64);
impl_scalar_float!(f32, f64);
