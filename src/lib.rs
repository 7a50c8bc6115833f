//! Point, size and rectangle value types for layout and hit-testing.
//!
//! Every type is generic over a numeric kind ([`Scalar`]): `i32`, `i64`,
//! `f32` or `f64`. The usual instantiations have short aliases
//! ([`PointI`], [`RectD`], ...).
//!
//! ```
//! use geomutil::{PointI, RectI};
//!
//! let a = RectI::new(0, 0, 10, 10);
//! let b = RectI::new(5, 5, 10, 10);
//! assert_eq!(a.intersect(b), RectI::new(5, 5, 5, 5));
//! assert_eq!(a.union(b), RectI::new(0, 0, 15, 15));
//! assert!(a.contains(PointI::new(10, 10)));
//! ```
//!
//! Conversions to window-system records live in [`native`]; conversions to
//! `glam` vectors are plain `From` impls.

pub mod errors;
pub mod log;
pub mod native;
pub mod scalar;
pub mod types;
mod vector;

pub use errors::GeomError;
pub use native::{NativePoint, NativeRect, PixelSize};
pub use scalar::Scalar;
pub use types::{
    Point, PointD, PointI, ROUND_EPSILON, Rect, RectD, RectI, Size, SizeD, SizeI,
};
