//! .
//!
//! The origin of coordinate system is in top-left corner, units are pixels.
//! All predicates work on axis-aligned bounding boxes: a circle is tested through the square
//! around it, never through its curvature.

use {
  std::{fmt::Debug, ops::Range},
  euclid::{Box2D, Point2D, Vector2D as V2}
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type Point = Point2D<f64, PixelSpace>;
pub type Vector = V2<f64, PixelSpace>;
/// Rectangle represented by its min and max corners.
/// Inverted rectangles (`min > max`) are valid and simply never enclose anything.
pub type Rect = Box2D<f64, PixelSpace>;

pub trait BoundingBox {
  fn bounding_box(&self) -> Rect;
}

/// Something inside a rectangular area, with a readable form for logs.
pub trait Shape: BoundingBox + Debug {
  fn describe(&self) -> String;
}

impl BoundingBox for Point {
  fn bounding_box(&self) -> Rect {
    Rect::new(*self, *self)
  }
}

impl Shape for Point {
  fn describe(&self) -> String {
    format!("Point(x: {}, y: {})", self.x, self.y)
  }
}

impl BoundingBox for Rect {
  fn bounding_box(&self) -> Rect {
    *self
  }
}

impl Shape for Rect {
  fn describe(&self) -> String {
    format!("Rect(min: {}, max: {})", self.min.describe(), self.max.describe())
  }
}

/// Predicates of a rectangle against arbitrary shapes.
pub trait Region {
  /// False only when the shape's bounds lie strictly outside along either axis.
  /// Touching edges overlap.
  fn overlaps<S: BoundingBox + ?Sized>(&self, shape: &S) -> bool;
  /// Shape's bounds are fully inside, edges included.
  fn encloses<S: BoundingBox + ?Sized>(&self, shape: &S) -> bool;
  /// All four sides moved outward by `w`, inward when negative.
  fn grow(&self, w: f64) -> Rect;
  /// Truncating conversion to integer pixel coordinates.
  fn to_pixels(&self) -> Box2D<i64, PixelSpace>;
  /// Columns and rows of the pixel-converted rect inside a `width x height` image.
  fn pixel_ranges(&self, width: u32, height: u32) -> (Range<u32>, Range<u32>);
}

impl Region for Rect {
  fn overlaps<S: BoundingBox + ?Sized>(&self, shape: &S) -> bool {
    let b = shape.bounding_box();
    if b.max.x < self.min.x || self.max.x < b.min.x {
      return false;
    }
    if b.max.y < self.min.y || self.max.y < b.min.y {
      return false;
    }
    true
  }

  fn encloses<S: BoundingBox + ?Sized>(&self, shape: &S) -> bool {
    let b = shape.bounding_box();
    self.min.x <= b.min.x &&
    self.min.y <= b.min.y &&
    self.max.x >= b.max.x &&
    self.max.y >= b.max.y
  }

  fn grow(&self, w: f64) -> Rect {
    self.inflate(w, w)
  }

  fn to_pixels(&self) -> Box2D<i64, PixelSpace> {
    Box2D::new(
      Point2D::new(self.min.x as i64, self.min.y as i64),
      Point2D::new(self.max.x as i64, self.max.y as i64)
    )
  }

  fn pixel_ranges(&self, width: u32, height: u32) -> (Range<u32>, Range<u32>) {
    let r = self.to_pixels();
    let clip = |v: i64, max: u32| v.clamp(0, max as i64) as u32;
    (
      clip(r.min.x, width)..clip(r.max.x, width),
      clip(r.min.y, height)..clip(r.max.y, height)
    )
  }
}

pub fn point(x: f64, y: f64) -> Point {
  Point::new(x, y)
}

pub fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
  Rect::new(point(x_min, y_min), point(x_max, y_max))
}

/// Bounds of a `width x height` image, anchored at the origin.
pub fn image_bounds(width: u32, height: u32) -> Rect {
  rect(0.0, 0.0, width as f64, height as f64)
}
