#![forbid(unsafe_code)]

//! Geometric primitives in pixel space.
//!
//! All engine math runs in pixels with `f64` coordinates, matching the
//! host's pointer precision. Percent serialization happens at the surface
//! boundary, never here.

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle for panel bounds, handle bands, and hit testing.
///
/// Stored as origin plus size; `right`/`bottom` are derived.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Right edge.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Offset of a viewport-space point relative to this rectangle's origin.
    #[inline]
    pub fn offset_of(&self, p: Point) -> Point {
        Point::new(p.x - self.left, p.y - self.top)
    }

    /// Symmetric inward inset on all sides.
    ///
    /// Dimensions clamp at zero rather than going negative.
    #[must_use]
    pub fn inset(&self, margin: f64) -> Rect {
        Rect::new(
            self.left + margin,
            self.top + margin,
            (self.width - margin * 2.0).max(0.0),
            (self.height - margin * 2.0).max(0.0),
        )
    }

    /// A rectangle of the given size centered in a viewport.
    #[must_use]
    pub fn centered(size: Size, viewport: Size) -> Rect {
        Rect::new(
            (viewport.width - size.width) / 2.0,
            (viewport.height - size.height) / 2.0,
            size.width,
            size.height,
        )
    }
}
