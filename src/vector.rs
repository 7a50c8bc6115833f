//! Conversions between the geometry types and `glam` vectors.

use glam::{DVec2, IVec2, Vec2};

use crate::scalar::Scalar;
use crate::types::{Point, Rect, Size};

macro_rules! impl_vec_conversions {
    ($($t:ty => $v:ty),+ $(,)?) => {
        $(
            impl From<Point<$t>> for $v {
                fn from(p: Point<$t>) -> Self {
                    <$v>::new(p.x, p.y)
                }
            }

            impl From<$v> for Point<$t> {
                fn from(v: $v) -> Self {
                    Point::new(v.x, v.y)
                }
            }

            impl From<Size<$t>> for $v {
                fn from(s: Size<$t>) -> Self {
                    <$v>::new(s.dx, s.dy)
                }
            }

            impl From<$v> for Size<$t> {
                fn from(v: $v) -> Self {
                    Size::new(v.x, v.y)
                }
            }
        )+
    };
}

impl_vec_conversions! {
    f32 => Vec2,
    f64 => DVec2,
    i32 => IVec2,
}

impl<T: Scalar> Rect<T> {
    /// Rectangle from its min and max corners, taken verbatim.
    pub fn from_min_max<V: Into<Point<T>>>(min: V, max: V) -> Self {
        Rect {
            min: min.into(),
            max: max.into(),
        }
    }

    /// The min and max corners as vectors.
    pub fn min_max<V: From<Point<T>>>(&self) -> (V, V) {
        (self.min.into(), self.max.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{dvec2, ivec2, vec2};

    #[test]
    fn point_vec_round_trip() {
        let v: DVec2 = Point::new(1.5f64, -2.0).into();
        assert_eq!(v, dvec2(1.5, -2.0));
        assert_eq!(Point::<i32>::from(ivec2(3, 4)), Point::new(3, 4));
        assert_eq!(Vec2::from(Point::new(0.25f32, 8.0)), vec2(0.25, 8.0));
    }

    #[test]
    fn size_to_vec() {
        let v: IVec2 = Size::new(640i32, 480).into();
        assert_eq!(v, ivec2(640, 480));
        assert_eq!(Size::<f64>::from(dvec2(2.0, 3.0)), Size::new(2.0, 3.0));
    }

    #[test]
    fn rect_min_max_vectors() {
        let r: Rect<f64> = Rect::from_min_max(dvec2(1.0, 2.0), dvec2(4.0, 8.0));
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 6.0));

        let (lo, hi): (DVec2, DVec2) = r.min_max();
        assert_eq!(hi - lo, dvec2(3.0, 6.0));
    }
}
