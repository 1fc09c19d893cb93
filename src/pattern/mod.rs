//! Circle packing patterns.
//!
//! Every pattern walks a fixed step function from its starting point and stops at the first
//! cell whose bounding box no longer overlaps `bounds`. Cells are never tested against each
//! other: a negative spacing produces overlapping cells.

use {
  crate::geometry::{Circle, Point, Rect, Region, Vector},
  euclid::vec2
};


pub trait Pattern {
  /// All cells of the pattern, in generation order.
  fn circles(&self) -> Vec<Circle>;
}

/// A sequence of circles each offset by `(delta_x, delta_y)` from the previous one.
///
/// The walk must eventually leave `bounds`: with a zero delta and an overlapping start it
/// never terminates.
#[derive(Debug, Copy, Clone)]
pub struct Line {
  pub start: Point,
  pub radius: f64,
  pub delta_x: f64,
  pub delta_y: f64,
  pub bounds: Rect
}

impl Pattern for Line {
  fn circles(&self) -> Vec<Circle> {
    let step = vec2(self.delta_x, self.delta_y);
    let mut circle = Circle { center: self.start, r: self.radius };
    let mut circles = vec![];
    while self.bounds.overlaps(&circle) {
      circles.push(circle);
      circle = circle.translate(step);
    }
    circles
  }
}

/// Square grid, column-major.
///
/// `delta()` must be positive, otherwise the columns never leave `bounds`.
#[derive(Debug, Copy, Clone)]
pub struct Square {
  pub top_left: Point,
  pub bounds: Rect,
  pub radius: f64,
  pub spacing: f64
}

impl Square {
  pub fn delta(&self) -> f64 {
    2.0 * self.radius + self.spacing
  }
}

impl Pattern for Square {
  fn circles(&self) -> Vec<Circle> {
    let delta = self.delta();
    columns(self.top_left, self.bounds, vec2(delta, 0.0))
      .flat_map(|start| Line {
        start,
        radius: self.radius,
        delta_x: 0.0,
        delta_y: delta,
        bounds: self.bounds
      }.circles())
      .collect()
  }
}

/// Triangular (hexagonal) packing in vertical stripes: odd columns are shifted up by one
/// radius.
///
/// Requires `2 * radius + spacing > 0`, the same as [`Square`].
#[derive(Debug, Copy, Clone)]
pub struct TriangularV {
  pub top_left: Point,
  pub bounds: Rect,
  pub radius: f64,
  pub spacing: f64
}

impl TriangularV {
  /// Horizontal distance between adjacent column centers.
  pub fn delta_x(&self) -> f64 {
    triangle_height(self.radius, self.spacing)
  }
}

impl Pattern for TriangularV {
  fn circles(&self) -> Vec<Circle> {
    let delta_y = 2.0 * self.radius + self.spacing;
    columns(self.top_left, self.bounds, vec2(self.delta_x(), 0.0))
      .enumerate()
      .flat_map(|(column, start)| {
        let offset_y = if column % 2 == 0 { 0.0 } else { self.radius };
        Line {
          start: start - vec2(0.0, offset_y),
          radius: self.radius,
          delta_x: 0.0,
          delta_y,
          bounds: self.bounds
        }.circles()
      })
      .collect()
  }
}

/// Triangular (hexagonal) packing in horizontal stripes: odd rows are shifted left by one
/// radius.
///
/// Requires `2 * radius + spacing > 0`, the same as [`Square`].
#[derive(Debug, Copy, Clone)]
pub struct TriangularH {
  pub top_left: Point,
  pub bounds: Rect,
  pub radius: f64,
  pub spacing: f64
}

impl TriangularH {
  /// Vertical distance between adjacent row centers.
  pub fn delta_y(&self) -> f64 {
    triangle_height(self.radius, self.spacing)
  }
}

impl Pattern for TriangularH {
  fn circles(&self) -> Vec<Circle> {
    let delta_x = 2.0 * self.radius + self.spacing;
    columns(self.top_left, self.bounds, vec2(0.0, self.delta_y()))
      .enumerate()
      .flat_map(|(row, start)| {
        let offset_x = if row % 2 == 0 { 0.0 } else { self.radius };
        Line {
          start: start - vec2(offset_x, 0.0),
          radius: self.radius,
          delta_x,
          delta_y: 0.0,
          bounds: self.bounds
        }.circles()
      })
      .collect()
  }
}

/// Lattice patterns selectable at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LatticeKind {
  Square,
  TriangularV,
  TriangularH
}

#[derive(Debug, Copy, Clone)]
pub enum Layout {
  Line(Line),
  Square(Square),
  TriangularV(TriangularV),
  TriangularH(TriangularH)
}

impl Layout {
  pub fn lattice(kind: LatticeKind, top_left: Point, bounds: Rect, radius: f64, spacing: f64) -> Self {
    match kind {
      LatticeKind::Square => Layout::Square(Square { top_left, bounds, radius, spacing }),
      LatticeKind::TriangularV => Layout::TriangularV(TriangularV { top_left, bounds, radius, spacing }),
      LatticeKind::TriangularH => Layout::TriangularH(TriangularH { top_left, bounds, radius, spacing })
    }
  }
}

impl Pattern for Layout {
  fn circles(&self) -> Vec<Circle> {
    match self {
      Layout::Line(p) => p.circles(),
      Layout::Square(p) => p.circles(),
      Layout::TriangularV(p) => p.circles(),
      Layout::TriangularH(p) => p.circles()
    }
  }
}

/// Start points of successive stripes: the bare point (not a cell) has to overlap `bounds`.
fn columns(top_left: Point, bounds: Rect, step: Vector) -> impl Iterator<Item = Point> {
  std::iter::successors(Some(top_left), move |p| Some(*p + step))
    .take_while(move |p| bounds.overlaps(p))
}

/// Height of the equilateral triangle joining three touching cells of radius
/// `radius + spacing / 2`.
fn triangle_height(radius: f64, spacing: f64) -> f64 {
  let r = radius + spacing / 2.0;
  ((2.0 * r).powi(2) - r.powi(2)).sqrt()
}
