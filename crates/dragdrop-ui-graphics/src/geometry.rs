//! Geometric primitives: Point, Orientation

use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean length, used for touch slop checks.
    pub fn distance(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Scroll axis of a list.
///
/// A vertical list scrolls along `y`; a horizontal list is the mirror image
/// and scrolls along `x`. Everything that measures "along the list" goes
/// through [`Orientation::main_axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Component of `point` along the scroll axis.
    #[inline]
    pub fn main_axis(self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    /// Builds a point from main/cross axis components.
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Orientation::Vertical => Point::new(cross, main),
            Orientation::Horizontal => Point::new(main, cross),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_projects_main_axis() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Orientation::Vertical.main_axis(p), 7.0);
        assert_eq!(Orientation::Horizontal.main_axis(p), 3.0);
    }

    #[test]
    fn orientation_point_places_main_component_on_scroll_axis() {
        assert_eq!(Orientation::Vertical.point(12.0, -4.0), Point::new(-4.0, 12.0));
        assert_eq!(Orientation::Horizontal.point(12.0, -4.0), Point::new(12.0, -4.0));
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            assert_eq!(orientation.main_axis(orientation.point(12.0, -4.0)), 12.0);
        }
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!((b - a).distance(), 5.0);
    }
}
