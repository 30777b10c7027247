//! Window and viewport sizing structs.
use serde::{Deserialize, Serialize};

/// Pixel size of a tab-area viewport or a sub-window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Rectangle of a sub-window. `left`/`top` are measured from the top-left
/// corner of the parent area; all fields are clamped to be non-negative.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowRect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl WindowRect {
    #[must_use]
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left: left.max(0),
            top: top.max(0),
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left
    }
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.left + self.width
    }
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.left <= x && x <= self.right() && self.top <= y && y <= self.bottom()
    }

    /// Move the rect flush against the left edge of the parent.
    #[must_use]
    pub fn align_left(&self) -> Self {
        Self::new(0, self.top, self.width, self.height)
    }

    /// Move the rect flush against the right edge of the parent.
    #[must_use]
    pub fn align_right(&self, parent: Size) -> Self {
        Self::new(parent.width - self.width, self.top, self.width, self.height)
    }

    /// Move the rect flush against the top edge of the parent.
    #[must_use]
    pub fn align_top(&self, _parent: Size) -> Self {
        Self::new(self.left, 0, self.width, self.height)
    }

    /// Move the rect flush against the bottom edge of the parent.
    #[must_use]
    pub fn align_bottom(&self, parent: Size) -> Self {
        Self::new(
            self.left,
            parent.height - self.height,
            self.width,
            self.height,
        )
    }

    /// Center the rect inside the parent, keeping its size.
    #[must_use]
    pub fn align_center(&self, parent: Size) -> Self {
        Self::new(
            (parent.width - self.width) / 2,
            (parent.height - self.height) / 2,
            self.width,
            self.height,
        )
    }

    /// Scale position and size by the given factors, anchored at the parent
    /// origin. Used when a parent resize should stretch its children
    /// proportionally.
    #[must_use]
    pub fn resize_relative(&self, fx: f64, fy: f64) -> Self {
        Self::new(
            (f64::from(self.left) * fx) as i32,
            (f64::from(self.top) * fy) as i32,
            (f64::from(self.width) * fx) as i32,
            (f64::from(self.height) * fy) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_should_clamp_negative_fields() {
        let rect = WindowRect::new(-10, -5, -100, 40);
        assert_eq!(rect, WindowRect::new(0, 0, 0, 40));
    }

    #[test]
    fn right_and_bottom_are_derived() {
        let rect = WindowRect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn align_ops_keep_the_size() {
        let parent = Size::new(800, 600);
        let rect = WindowRect::new(100, 100, 200, 100);
        assert_eq!(rect.align_left(), WindowRect::new(0, 100, 200, 100));
        assert_eq!(rect.align_right(parent), WindowRect::new(600, 100, 200, 100));
        assert_eq!(rect.align_top(parent), WindowRect::new(100, 0, 200, 100));
        assert_eq!(
            rect.align_bottom(parent),
            WindowRect::new(100, 500, 200, 100)
        );
        assert_eq!(
            rect.align_center(parent),
            WindowRect::new(300, 250, 200, 100)
        );
    }

    #[test]
    fn resize_relative_scales_everything() {
        let rect = WindowRect::new(10, 20, 100, 50);
        assert_eq!(
            rect.resize_relative(2.0, 0.5),
            WindowRect::new(20, 10, 200, 25)
        );
    }

    #[test]
    fn contains_point_includes_edges() {
        let rect = WindowRect::new(10, 10, 100, 100);
        assert!(rect.contains_point(10, 10));
        assert!(rect.contains_point(110, 110));
        assert!(!rect.contains_point(111, 50));
    }
}
