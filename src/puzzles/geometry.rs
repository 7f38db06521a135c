//! Plain geometric data objects.
//!
//! These are the crate's JSON-facing data types; all of them round-trip
//! through serde without custom code.

use serde::{Deserialize, Serialize};

/// A rectangle described by its dimensions alone.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::Rectangle;
///
/// let r = Rectangle { width: 10.0, height: 20.0 };
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// An axis-aligned region positioned by its top-left corner.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    /// Distance from the top edge of the coordinate space.
    pub top: f64,
    /// Distance from the left edge of the coordinate space.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Whether this region and `other` share any point, edges included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use selectra::puzzles::Bounds;
    ///
    /// let a = Bounds { top: 0.0, left: 0.0, width: 10.0, height: 10.0 };
    /// let b = Bounds { top: 5.0, left: 5.0, width: 20.0, height: 20.0 };
    /// let c = Bounds { top: 20.0, left: 20.0, width: 20.0, height: 20.0 };
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left <= other.left + other.width
            && other.left <= self.left + self.width
            && self.top <= other.top + other.height
            && other.top <= self.top + self.height
    }
}

/// A point in the plane.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A circle given by center and radius.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
}

impl Circle {
    /// Whether `point` lies strictly inside the circle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use selectra::puzzles::{Circle, Point};
    ///
    /// let circle = Circle { center: Point { x: 0.0, y: 0.0 }, radius: 10.0 };
    /// assert!(circle.contains(&Point { x: 0.0, y: 0.0 }));
    /// assert!(!circle.contains(&Point { x: 10.0, y: 10.0 }));
    /// ```
    pub fn contains(&self, point: &Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx.hypot(dy) < self.radius
    }
}
