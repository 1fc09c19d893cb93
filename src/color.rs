//! Color comparison and averaging.
//!
//! Colors are compared through their 16-bit, alpha-premultiplied channel magnitudes
//! (`v * 0x101`), so a fully transparent color sits at black.

use {
  crate::geometry::{image_bounds, Rect, Region},
  image::{Rgba, RgbaImage}
};

/// Average of a region without a single visible pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub fn is_transparent(color: Rgba<u8>) -> bool {
  color.0[3] == 0
}

/// `[r, g, b, a]`, each in `0..=0xffff`, color channels premultiplied by alpha.
pub fn magnitudes(color: Rgba<u8>) -> [u32; 4] {
  let [r, g, b, a] = color.0;
  let a = a as u32 * 0x101;
  let premultiply = |c: u8| c as u32 * 0x101 * a / 0xffff;
  [premultiply(r), premultiply(g), premultiply(b), a]
}

/// Euclidean distance over the r, g, b magnitudes. Alpha only matters through
/// premultiplication.
pub fn distance(c0: Rgba<u8>, c1: Rgba<u8>) -> f64 {
  let [r0, g0, b0, _] = magnitudes(c0);
  let [r1, g1, b1, _] = magnitudes(c1);
  let d = |a: u32, b: u32| a.abs_diff(b) as f64;
  (d(r0, r1).powi(2) + d(g0, g1).powi(2) + d(b0, b1).powi(2)).sqrt()
}

/// Average color of the whole image.
pub fn average_color(image: &RgbaImage) -> Rgba<u8> {
  average_color_in(image, image_bounds(image.width(), image.height()))
}

/// Uniform average of every pixel inside `region` (clipped to the image) with non-zero alpha.
/// Returns [`TRANSPARENT`] when there is no such pixel.
pub fn average_color_in(image: &RgbaImage, region: Rect) -> Rgba<u8> {
  let (xs, ys) = region.pixel_ranges(image.width(), image.height());

  let (sum, count) = itertools::iproduct!(ys, xs)
    .map(|(y, x)| *image.get_pixel(x, y))
    .filter(|px| !is_transparent(*px))
    .fold(([0u64; 3], 0u64), |(mut sum, count), px| {
      let m = magnitudes(px);
      sum.iter_mut().zip(m).for_each(|(s, m)| *s += m as u64);
      (sum, count + 1)
    });

  if count == 0 {
    return TRANSPARENT;
  }
  let [r, g, b] = sum.map(|s| ((s / count) >> 8) as u8);
  Rgba([r, g, b, 255])
}
