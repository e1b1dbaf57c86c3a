//! Host-supplied box metrics.
//!
//! Layout itself is out of scope for this environment; hosts (and tests)
//! assign each element its box, and widgets read the snapshot back through
//! [`crate::Document::offset`] and friends.

/// Absolute box metrics for one element, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge of the box.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Document-relative position of an element's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}
