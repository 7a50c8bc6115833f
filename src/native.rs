//! Adapters to the host window system's plain rectangle/point/size records.
//!
//! These are field-for-field copies of what a windowing API hands out
//! (`RECT`, `POINT`, `SIZE` on Win32). The geometry types never depend on
//! this module; callers that talk to a window system convert at the edge.

use crate::errors::GeomError;
use crate::scalar::Scalar;
use crate::types::{Point, Rect, Size};

/// Left/top/right/bottom rectangle record, laid out like Win32 `RECT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct NativeRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Laid out like Win32 `POINT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct NativePoint {
    pub x: i32,
    pub y: i32,
}

/// Width/height in pixels, laid out like Win32 `SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct PixelSize {
    pub cx: i32,
    pub cy: i32,
}

impl<T: Scalar> Rect<T> {
    /// Round to integers with [`Rect::round_to_nearest_int`], then copy the
    /// corners into left/top/right/bottom.
    pub fn to_native_rect(&self) -> NativeRect {
        let r = self.round_to_nearest_int();
        NativeRect {
            left: r.min.x,
            top: r.min.y,
            right: r.max.x,
            bottom: r.max.y,
        }
    }

    /// Like [`to_native_rect`](Self::to_native_rect) but the corners must
    /// already be representable as `i32`; nothing is rounded.
    pub fn try_to_native_rect(&self) -> Result<NativeRect, GeomError> {
        let min = self.min.try_convert::<i32>()?;
        let max = self.max.try_convert::<i32>()?;
        Ok(NativeRect {
            left: min.x,
            top: min.y,
            right: max.x,
            bottom: max.y,
        })
    }
}

impl Rect<i32> {
    /// Corners are copied as-is: an inverted native rect stays inverted.
    pub fn from_native_rect(r: NativeRect) -> Self {
        Rect {
            min: Point::new(r.left, r.top),
            max: Point::new(r.right, r.bottom),
        }
    }
}

impl From<NativeRect> for Rect<i32> {
    fn from(r: NativeRect) -> Self {
        Rect::from_native_rect(r)
    }
}

impl<T: Scalar> Point<T> {
    pub fn to_native_point(&self) -> NativePoint {
        let p = self.round_to_nearest_int();
        NativePoint { x: p.x, y: p.y }
    }
}

impl Point<i32> {
    pub fn from_native_point(p: NativePoint) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<NativePoint> for Point<i32> {
    fn from(p: NativePoint) -> Self {
        Point::from_native_point(p)
    }
}

impl<T: Scalar> Size<T> {
    pub fn to_pixel_size(&self) -> PixelSize {
        let s = self.round_to_nearest_int();
        PixelSize { cx: s.dx, cy: s.dy }
    }
}

impl From<PixelSize> for Size<i32> {
    fn from(s: PixelSize) -> Self {
        Size::new(s.cx, s.cy)
    }
}

#[cfg(all(windows, feature = "winapi"))]
mod win32 {
    use super::{NativePoint, NativeRect, PixelSize};
    use winapi::shared::windef::{POINT, RECT, SIZE};

    impl From<NativeRect> for RECT {
        fn from(r: NativeRect) -> Self {
            RECT {
                left: r.left,
                top: r.top,
                right: r.right,
                bottom: r.bottom,
            }
        }
    }

    impl From<RECT> for NativeRect {
        fn from(r: RECT) -> Self {
            NativeRect {
                left: r.left,
                top: r.top,
                right: r.right,
                bottom: r.bottom,
            }
        }
    }

    impl From<NativePoint> for POINT {
        fn from(p: NativePoint) -> Self {
            POINT { x: p.x, y: p.y }
        }
    }

    impl From<POINT> for NativePoint {
        fn from(p: POINT) -> Self {
            NativePoint { x: p.x, y: p.y }
        }
    }

    impl From<PixelSize> for SIZE {
        fn from(s: PixelSize) -> Self {
            SIZE { cx: s.cx, cy: s.cy }
        }
    }

    impl From<SIZE> for PixelSize {
        fn from(s: SIZE) -> Self {
            PixelSize { cx: s.cx, cy: s.cy }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PointD, RectD, RectI, SizeD};

    fn native(left: i32, top: i32, right: i32, bottom: i32) -> NativeRect {
        NativeRect {
            left,
            top,
            right,
            bottom,
        }
    }

    #[test]
    fn to_native_rect_maps_corners() {
        let r = RectI::new(10, 20, 30, 40);
        assert_eq!(r.to_native_rect(), native(10, 20, 40, 60));
    }

    #[test]
    fn to_native_rect_rounds_floats() {
        let r = RectD::new(0.5, 1.25, 9.5, 2.5);
        assert_eq!(r.to_native_rect(), native(1, 1, 11, 4));
    }

    #[test]
    fn to_native_rect_saturates_huge_floats() {
        let r = RectD::new(1e10, -1e10, 1e10, 5.0);
        assert_eq!(r.to_native_rect(), native(i32::MAX, i32::MIN, i32::MAX, i32::MIN + 5));
    }

    #[test]
    fn from_native_rect_does_not_normalize() {
        let r = RectI::from_native_rect(native(10, 10, 0, 5));
        assert_eq!(r.width(), -10);
        assert_eq!(r.height(), -5);
        assert_eq!(r.to_native_rect(), native(10, 10, 0, 5));
    }

    #[test]
    fn try_to_native_rect_rejects_out_of_range() {
        let r = RectD::new(0.0, 0.0, 3e9, 10.0);
        assert_eq!(
            r.try_to_native_rect(),
            Err(GeomError::OutOfRange { value: 3e9, kind: "i32" })
        );

        let r = RectD::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.try_to_native_rect(), Ok(native(1, 2, 4, 6)));
    }

    #[test]
    fn pixel_size_and_point() {
        assert_eq!(
            SizeD::new(99.5, 0.4).to_pixel_size(),
            PixelSize { cx: 100, cy: 0 }
        );
        assert_eq!(Size::from(PixelSize { cx: 3, cy: 4 }), Size::new(3, 4));

        let p = PointD::new(-0.5, 7.49).to_native_point();
        assert_eq!(p, NativePoint { x: 0, y: 7 });
        assert_eq!(Point::from(p), Point::new(0, 7));
    }
}
