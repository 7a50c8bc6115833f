//! Point, size and rectangle value types, generic over a numeric kind.
//!
//! All three are plain `Copy` values. A `Rect` is stored as its two corners
//! `min` and `max`; width and height are always derived from them, and
//! nothing forces `min <= max` except the corner constructors.

use crate::errors::GeomError;
use crate::scalar::Scalar;
use std::fmt;
use std::ops::{Add, Sub};

/// Margin used by [`Rect::round_outward`] so that coordinates sitting a hair
/// off an integer (from earlier float arithmetic) snap to it instead of
/// growing the rectangle by a whole unit. Same value as C's `FLT_EPSILON`.
///
/// An edge less than this margin inside an integer is snapped onto it, so
/// the rounded rectangle can miss that sliver of the input.
pub const ROUND_EPSILON: f64 = f32::EPSILON as f64;

/// Round half up: `floor(v + 0.5)`, then narrow to `i32`.
#[inline]
fn round_half_up<T: Scalar>(v: T) -> i32 {
    (v.to_f64() + 0.5).floor() as i32
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// True only when both coordinates are zero.
    ///
    /// Note the conjunction: `Size` and `Rect` call themselves empty when
    /// *either* extent is zero.
    pub fn is_empty(&self) -> bool {
        self.x == T::ZERO && self.y == T::ZERO
    }

    /// Cast each coordinate to kind `M` (`as` semantics).
    pub fn convert<M: Scalar>(self) -> Point<M> {
        Point::new(self.x.cast(), self.y.cast())
    }

    /// Like [`convert`](Self::convert), but fails on NaN or out-of-range
    /// coordinates instead of saturating.
    pub fn try_convert<M: Scalar>(self) -> Result<Point<M>, GeomError> {
        Ok(Point::new(self.x.try_cast()?, self.y.try_cast()?))
    }

    /// Round each coordinate to the nearest integer, halves going up.
    pub fn round_to_nearest_int(self) -> Point<i32> {
        Point::new(round_half_up(self.x), round_half_up(self.y))
    }
}

/// Translate a point by a size
impl<T: Scalar> Add<Size<T>> for Point<T> {
    type Output = Point<T>;
    fn add(self, rhs: Size<T>) -> Point<T> {
        Point::new(self.x.add_sat(rhs.dx), self.y.add_sat(rhs.dy))
    }
}

/// The extent spanned between two points
impl<T: Scalar> Sub for Point<T> {
    type Output = Size<T>;
    fn sub(self, rhs: Point<T>) -> Size<T> {
        Size::new(self.x.sub_sat(rhs.x), self.y.sub_sat(rhs.y))
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 2D size (width and height)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub dx: T,
    pub dy: T,
}

impl<T> Size<T> {
    pub const fn new(dx: T, dy: T) -> Self {
        Size { dx, dy }
    }
}

impl<T: Scalar> Size<T> {
    /// True when either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.dx == T::ZERO || self.dy == T::ZERO
    }

    pub fn convert<M: Scalar>(self) -> Size<M> {
        Size::new(self.dx.cast(), self.dy.cast())
    }

    pub fn try_convert<M: Scalar>(self) -> Result<Size<M>, GeomError> {
        Ok(Size::new(self.dx.try_cast()?, self.dy.try_cast()?))
    }

    pub fn round_to_nearest_int(self) -> Size<i32> {
        Size::new(round_half_up(self.dx), round_half_up(self.dy))
    }
}

impl<T: fmt::Display> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.dx, self.dy)
    }
}

/// Axis-aligned rectangle
///
/// `Rect::default()` (all zero) is the canonical empty rectangle returned by
/// [`Rect::intersect`] when there is no overlap.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T: Scalar> Rect<T> {
    /// Rectangle at `(x, y)` with extents `dx`, `dy`.
    ///
    /// Negative extents are kept as given; use [`Rect::from_xy`] to get a
    /// normalized rectangle. Integer corners saturate at the bounds of `T`.
    pub fn new(x: T, y: T, dx: T, dy: T) -> Self {
        Rect {
            min: Point::new(x, y),
            max: Point::new(x.add_sat(dx), y.add_sat(dy)),
        }
    }

    pub fn from_point_size(pt: Point<T>, size: Size<T>) -> Self {
        Rect::new(pt.x, pt.y, size.dx, size.dy)
    }

    /// Rectangle spanning two opposite corners given as coordinates.
    ///
    /// Each axis is normalized on its own: when the end lies before the
    /// start the two swap, so the result never has a negative width or
    /// height.
    pub fn from_xy(xs: T, ys: T, xe: T, ye: T) -> Self {
        let (x0, x1) = if xe < xs { (xe, xs) } else { (xs, xe) };
        let (y0, y1) = if ye < ys { (ye, ys) } else { (ys, ye) };
        Rect {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle spanning two opposite corners, in either order.
    pub fn from_corners(p1: Point<T>, p2: Point<T>) -> Self {
        Rect::from_xy(p1.x, p1.y, p2.x, p2.y)
    }

    pub fn x(&self) -> T {
        self.min.x
    }

    pub fn y(&self) -> T {
        self.min.y
    }

    pub fn width(&self) -> T {
        self.max.x.sub_sat(self.min.x)
    }

    pub fn height(&self) -> T {
        self.max.y.sub_sat(self.min.y)
    }

    /// Same as [`width`](Self::width).
    pub fn dx(&self) -> T {
        self.width()
    }

    /// Same as [`height`](Self::height).
    pub fn dy(&self) -> T {
        self.height()
    }

    /// Top-left corner
    pub fn tl(&self) -> Point<T> {
        self.min
    }

    /// Bottom-right corner
    pub fn br(&self) -> Point<T> {
        self.max
    }

    pub fn size(&self) -> Size<T> {
        self.max - self.min
    }

    /// Keep the top-left corner and move the right edge.
    pub fn set_width(&mut self, width: T) {
        self.max.x = self.min.x.add_sat(width);
    }

    /// Keep the top-left corner and move the bottom edge.
    pub fn set_height(&mut self, height: T) {
        self.max.y = self.min.y.add_sat(height);
    }

    pub fn set_dx(&mut self, dx: T) {
        self.set_width(dx);
    }

    pub fn set_dy(&mut self, dy: T) {
        self.set_height(dy);
    }

    /// True when either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.dx() == T::ZERO || self.dy() == T::ZERO
    }

    /// Point-in-rectangle test, inclusive on every edge: a point on the
    /// right or bottom boundary is inside.
    pub fn contains(&self, pt: Point<T>) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }

    /// Overlap of two rectangles, or `Rect::default()` if the overlap has
    /// no positive area.
    pub fn intersect(&self, other: Rect<T>) -> Rect<T> {
        let min = Point::new(self.min.x.max_of(other.min.x), self.min.y.max_of(other.min.y));
        let max = Point::new(self.max.x.min_of(other.max.x), self.max.y.min_of(other.max.y));
        if max.x.sub_sat(min.x) <= T::ZERO || max.y.sub_sat(min.y) <= T::ZERO {
            return Rect::default();
        }
        Rect { min, max }
    }

    /// Smallest rectangle covering both.
    ///
    /// An operand whose width AND height are both non-positive is ignored.
    /// One that is degenerate along a single axis still takes part.
    pub fn union(&self, other: Rect<T>) -> Rect<T> {
        if self.dx() <= T::ZERO && self.dy() <= T::ZERO {
            crate::log::debug!(rect = %self, "union: ignoring degenerate receiver");
            return other;
        }
        if other.dx() <= T::ZERO && other.dy() <= T::ZERO {
            crate::log::debug!(rect = %other, "union: ignoring degenerate operand");
            return *self;
        }
        Rect {
            min: Point::new(self.min.x.min_of(other.min.x), self.min.y.min_of(other.min.y)),
            max: Point::new(self.max.x.max_of(other.max.x), self.max.y.max_of(other.max.y)),
        }
    }

    /// Translate the whole rectangle. Width and height are unchanged.
    pub fn offset(&mut self, dx: T, dy: T) {
        self.min = self.min + Size::new(dx, dy);
        self.max = self.max + Size::new(dx, dy);
    }

    /// Grow by `dx` on the left and right and by `dy` on the top and
    /// bottom. Negative amounts shrink.
    pub fn inflate(&mut self, dx: T, dy: T) {
        self.min.x = self.min.x.sub_sat(dx);
        self.max.x = self.max.x.add_sat(dx);
        self.min.y = self.min.y.sub_sat(dy);
        self.max.y = self.max.y.add_sat(dy);
    }

    /// Cast origin and extents to kind `M` (`as` semantics).
    ///
    /// Origin and extents are converted separately, so truncation never
    /// widens the rectangle.
    pub fn convert<M: Scalar>(self) -> Rect<M> {
        Rect::new(self.x().cast(), self.y().cast(), self.dx().cast(), self.dy().cast())
    }

    pub fn try_convert<M: Scalar>(self) -> Result<Rect<M>, GeomError> {
        Ok(Rect::new(
            self.x().try_cast()?,
            self.y().try_cast()?,
            self.dx().try_cast()?,
            self.dy().try_cast()?,
        ))
    }

    /// Round origin and extents independently to the nearest integer.
    pub fn round_to_nearest_int(self) -> Rect<i32> {
        Rect::new(
            round_half_up(self.x()),
            round_half_up(self.y()),
            round_half_up(self.dx()),
            round_half_up(self.dy()),
        )
    }

    /// Smallest integer rectangle enclosing this one.
    ///
    /// Low edges are floored and high edges ceiled after pulling each in by
    /// [`ROUND_EPSILON`], so an edge at `9.99999999` or `10.0000001` lands
    /// on `10` rather than spilling into the next unit. Coordinates more
    /// than `ROUND_EPSILON` away from an integer are always enclosed.
    pub fn round_outward(&self) -> Rect<i32> {
        let (x0, x1) = (self.min.x.min_of(self.max.x), self.min.x.max_of(self.max.x));
        let (y0, y1) = (self.min.y.min_of(self.max.y), self.min.y.max_of(self.max.y));
        Rect::from_xy(
            (x0.to_f64() + ROUND_EPSILON).floor() as i32,
            (y0.to_f64() + ROUND_EPSILON).floor() as i32,
            (x1.to_f64() - ROUND_EPSILON).ceil() as i32,
            (y1.to_f64() - ROUND_EPSILON).ceil() as i32,
        )
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.min, self.size())
    }
}

/// Convenient aliases
pub type PointI = Point<i32>;
pub type PointD = Point<f64>;
pub type SizeI = Size<i32>;
pub type SizeD = Size<f64>;
pub type RectI = Rect<i32>;
pub type RectD = Rect<f64>;
