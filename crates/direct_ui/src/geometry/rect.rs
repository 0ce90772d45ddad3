//! Rectangle, point and size value types
//!
//! `Rect` stores only `x`, `y`, `width` and `height`. Right and bottom edges
//! are always derived on read. Edge arithmetic wraps on `i32` overflow.

use serde::{Deserialize, Serialize};

/// Integer point, also used as a translation vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Origin point
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Integer size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if either extent is zero or negative
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned integer rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width, may be zero or negative
    pub width: i32,
    /// Height, may be zero or negative
    pub height: i32,
}

impl Rect {
    /// The all-zero rectangle
    pub const EMPTY: Self = Self { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from its four edges
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.wrapping_sub(left), bottom.wrapping_sub(top))
    }

    /// Right edge (`x + width`)
    pub const fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    /// Bottom edge (`y + height`)
    pub const fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    /// Top-left corner
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the top-left corner, keeping the size
    pub fn set_location(&mut self, location: Point) {
        self.x = location.x;
        self.y = location.y;
    }

    /// Width and height
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Resize, keeping the top-left corner
    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    /// True if `width <= 0` or `height <= 0`
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }

    /// Containment of a whole rectangle
    pub const fn contains_rect(&self, other: &Self) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    /// Grow every edge outward by `dw` horizontally and `dh` vertically
    pub fn inflate(&mut self, dw: i32, dh: i32) {
        self.x = self.x.wrapping_sub(dw);
        self.y = self.y.wrapping_sub(dh);
        self.width = self.width.wrapping_add(dw.wrapping_mul(2));
        self.height = self.height.wrapping_add(dh.wrapping_mul(2));
    }

    /// Intersection of two rectangles
    ///
    /// Returns [`Rect::EMPTY`] when they are disjoint. Rectangles that only
    /// touch produce a zero-extent rectangle on the shared edge.
    pub fn intersection(&self, other: &Self) -> Self {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right >= left && bottom >= top {
            Self::from_ltrb(left, top, right, bottom)
        } else {
            Self::EMPTY
        }
    }

    /// Replace this rectangle with its intersection with `other`
    pub fn intersect(&mut self, other: &Self) {
        *self = self.intersection(other);
    }

    /// True if the rectangles overlap with a non-zero area
    pub const fn intersects_with(&self, other: &Self) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ltrb(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Translate by `(dx, dy)`
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_edges() {
        let rect = Rect::new(3, 4, 10, 20);
        assert_eq!(rect.right(), 13);
        assert_eq!(rect.bottom(), 24);
        assert_eq!(Rect::from_ltrb(3, 4, 13, 24), rect);
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 9));
        assert!(!rect.contains(10, 10));
        assert!(!rect.contains(10, 5));
        assert!(!rect.contains(-1, 5));
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::EMPTY.is_empty());
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, -1).is_empty());
        assert!(!Rect::new(-5, -5, 1, 1).is_empty());
    }

    #[test]
    fn test_inflate() {
        let mut rect = Rect::new(10, 20, 30, 40);
        rect.inflate(5, 2);
        assert_eq!(rect, Rect::new(5, 18, 40, 44));

        rect.inflate(-5, -2);
        assert_eq!(rect, Rect::new(10, 20, 30, 40));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Rect::new(5, 5, 5, 5));

        let far = Rect::new(50, 50, 5, 5);
        assert_eq!(a.intersection(&far), Rect::EMPTY);

        // Shared edge gives a zero-width strip
        let touching = Rect::new(10, 0, 5, 10);
        assert_eq!(a.intersection(&touching), Rect::new(10, 0, 0, 10));
        assert!(!a.intersects_with(&touching));
    }

    #[test]
    fn test_intersects_with() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects_with(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects_with(&Rect::new(10, 10, 5, 5)));
        assert!(!a.intersects_with(&Rect::new(-5, 0, 5, 10)));
    }

    #[test]
    fn test_union_and_offset() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, -5, 5, 5);
        assert_eq!(a.union(&b), Rect::new(0, -5, 25, 15));

        let mut c = a;
        c.offset(-3, 7);
        assert_eq!(c, Rect::new(-3, 7, 10, 10));
    }

    #[test]
    fn test_location_and_size() {
        let mut rect = Rect::new(1, 2, 3, 4);
        rect.set_location(Point::new(7, 8));
        rect.set_size((9, 10).into());
        assert_eq!(rect, Rect::new(7, 8, 9, 10));
        assert_eq!(rect.location(), Point::new(7, 8));
        assert_eq!(rect.size(), Size::new(9, 10));
        assert!(rect.contains_rect(&Rect::new(8, 9, 2, 2)));
    }

    #[test]
    fn test_edges_wrap_past_i32_max() {
        let rect = Rect::new(i32::MAX - 5, 0, 10, 10);
        assert_eq!(rect.right(), i32::MIN + 4);
        assert_eq!(rect.bottom(), 10);
        // Wrapped right edge lies left of x, so nothing is inside
        assert!(!rect.contains(i32::MAX - 1, 1));
        assert!(!rect.intersects_with(&Rect::new(i32::MAX - 2, 0, 1, 1)));

        let mut moved = rect;
        moved.offset(10, 0);
        assert_eq!(moved.x, i32::MIN + 4);
    }

    #[test]
    fn test_inflate_wraps() {
        let mut rect = Rect::new(0, 0, 10, 10);
        rect.inflate(i32::MAX / 2 + 1, 0);
        assert_eq!(rect.x, -(i32::MAX / 2 + 1));
        assert_eq!(rect.width, i32::MIN + 10);
        assert_eq!(rect.height, 10);
        assert!(rect.is_empty());
    }
}
