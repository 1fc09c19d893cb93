use {
  super::{BoundingBox, Point, Rect, Shape, Vector},
  euclid::Vector2D as V2,
  std::fmt
};

/// Consists of a center point and a radius
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub r: f64
}

impl Circle {
  pub fn new(x: f64, y: f64, r: f64) -> Self {
    Self { center: Point::new(x, y), r }
  }

  /// Same radius, center moved by `offset`.
  pub fn translate(self, offset: Vector) -> Self {
    Self { center: self.center + offset, ..self }
  }
}

impl BoundingBox for Circle {
  fn bounding_box(&self) -> Rect {
    Rect::new(
      self.center - V2::splat(self.r),
      self.center + V2::splat(self.r)
    )}}

impl fmt::Display for Circle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Circle(x: {}, y: {}, r: {})", self.center.x, self.center.y, self.r)
  }
}

impl Shape for Circle {
  fn describe(&self) -> String {
    self.to_string()
  }
}
