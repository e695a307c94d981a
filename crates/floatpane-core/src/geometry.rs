#![forbid(unsafe_code)]

//! Geometric primitives.

/// Panel placement: top-left position and size.
///
/// Uses device-independent pixels (origin at the viewport's top-left,
/// y growing downward). Values are `f64` because pointer deltas are
/// fractional on scaled displays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// This rectangle moved by `(dx, dy)` with the size unchanged.
    #[inline]
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// True if every field is a finite number.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Available viewport dimensions, read from the host.
///
/// A snapshot, not a live handle: the policy re-reads it on every
/// operation and sanitizes degenerate values itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    /// Available width in pixels.
    pub width: f64,
    /// Available height in pixels.
    pub height: f64,
}

impl ViewportSize {
    /// Create a new viewport size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 300.0, 400.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 310.0);
        assert_eq!(r.bottom(), 420.0);
    }

    #[test]
    fn rect_from_size_sits_at_origin() {
        let r = Rect::from_size(100.0, 50.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
    }

    #[test]
    fn rect_translated_keeps_size() {
        let r = Rect::new(5.0, 5.0, 30.0, 40.0).translated(10.0, -2.5);
        assert_eq!(r, Rect::new(15.0, 2.5, 30.0, 40.0));
    }

    #[test]
    fn rect_finiteness() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, f64::INFINITY, 1.0, 1.0).is_finite());
    }
}
