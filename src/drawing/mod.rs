//! Raster output of a mosaic.

use {
  crate::{
    error::Result,
    geometry::{BoundingBox, Circle, Point, Rect, Region}
  },
  image::{imageops, Pixel, Rgba, RgbaImage},
  std::path::Path
};

#[cfg(test)] mod tests;

/// Image buffer addressed in the same pixel coordinates as the source image.
#[derive(Debug, Clone)]
pub struct Canvas {
  image: RgbaImage
}

impl Canvas {
  /// Canvas the size of `bounds`, filled with `background`. Inverted bounds give an empty
  /// canvas.
  pub fn new(bounds: Rect, background: Rgba<u8>) -> Self {
    let size = bounds.to_pixels();
    let side = |v: i64| v.clamp(0, u32::MAX as i64) as u32;
    Self {
      image: RgbaImage::from_pixel(side(size.width()), side(size.height()), background)
    }
  }

  /// Composite `image` over the canvas with its top-left corner at `at` (truncated),
  /// clipped at the canvas edges.
  pub fn draw_image_at(&mut self, image: &RgbaImage, at: Point) {
    imageops::overlay(&mut self.image, image, at.x as i64, at.y as i64);
  }

  /// Filled, antialiased disc.
  pub fn draw_circle(&mut self, circle: Circle, color: Rgba<u8>) {
    let (xs, ys) = circle.bounding_box()
      .grow(1.0)
      .pixel_ranges(self.image.width(), self.image.height());
    let image = &mut self.image;
    itertools::iproduct!(ys, xs).for_each(|(y, x)| {
      let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
      let sdf = (center - circle.center).length() - circle.r;
      let pixel = image.get_pixel_mut(x, y);
      *pixel = sdf_overlay_aa(sdf, *pixel, color);
    });
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }

  /// Encode by file extension.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    self.image.save(path)?;
    Ok(())
  }
}

/// Blend `col2` over `col1` by the pixel coverage of a signed distance (one pixel wide ramp).
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let coverage = (0.5 - sdf).clamp(0.0, 1.0);
  col2.0[3] = (col2.0[3] as f64 * coverage) as u8;
  col1.blend(&col2);
  col1
}
