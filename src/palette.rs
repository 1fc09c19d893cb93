//! Palettes: prominent colors of an image, and fitting a palette to a number of elements.

use {
  crate::color::{is_transparent, TRANSPARENT},
  image::{
    imageops::{self, FilterType},
    Rgba, RgbaImage
  },
  palette::{FromColor, Oklab, Srgb},
  std::cmp::Reverse,
  tracing::debug
};

/// Images are reduced to fit this square before clustering.
pub const THUMBNAIL_SIZE: u32 = 80;
const TRIALS: u32 = 2;
const CONVERGENCE_THRESHOLD: f32 = 0.01;
const MAX_ITERATIONS: u32 = 64;
const SEED: u64 = 0;

/// Up to `k` representative colors of the visible pixels of `image`, most common first.
///
/// Clustering runs in Oklab. Fewer than `k` colors come back when the image has fewer
/// distinct colors, and at most 255 in any case. An image without a single visible pixel
/// yields the lone [`TRANSPARENT`] sentinel.
pub fn prominent_colors(image: &RgbaImage, k: usize) -> Vec<Rgba<u8>> {
  if k == 0 {
    return vec![];
  }
  let pixels = thumbnail(image)
    .pixels()
    .filter(|px| !is_transparent(**px))
    .map(|px| Srgb::<u8>::new(px[0], px[1], px[2]))
    .collect::<Vec<_>>();
  if pixels.is_empty() {
    return vec![TRANSPARENT];
  }

  let k = u8::try_from(k).unwrap_or(u8::MAX);
  let result = okolors::run(&okolors::OklabCounts::from_srgb(&pixels), TRIALS, k, CONVERGENCE_THRESHOLD, MAX_ITERATIONS, SEED);
  debug!(k, found = result.centroids.len(), "clustered colors");

  let mut clusters = result.centroids.into_iter()
    .zip(result.counts)
    .filter(|&(_, count)| count > 0)
    .collect::<Vec<_>>();
  clusters.sort_by_key(|&(_, count)| Reverse(count));
  clusters.into_iter()
    .map(|(centroid, _)| to_rgba(centroid))
    .collect()
}

/// Exactly `n` colors: truncated, or extended by cycling through the palette.
/// An empty palette stays empty.
pub fn fit(palette: Vec<Rgba<u8>>, n: usize) -> Vec<Rgba<u8>> {
  if palette.is_empty() || palette.len() == n {
    return palette;
  }
  palette.iter().copied().cycle().take(n).collect()
}

fn thumbnail(image: &RgbaImage) -> RgbaImage {
  let (width, height) = image.dimensions();
  let longest = width.max(height);
  if longest <= THUMBNAIL_SIZE {
    return image.clone();
  }
  let scale = |side: u32| ((side as f64 * THUMBNAIL_SIZE as f64 / longest as f64).round() as u32).max(1);
  imageops::resize(image, scale(width), scale(height), FilterType::Triangle)
}

fn to_rgba(color: Oklab) -> Rgba<u8> {
  let (r, g, b) = Srgb::<f32>::from_color(color).into_components();
  let [r, g, b] = [r, g, b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
  Rgba([r, g, b, 255])
}

#[cfg(test)]
mod tests {
  use super::*;

  const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
  const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

  fn quarter_blue(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
      if x < width / 2 && y < height / 2 { BLUE } else { RED }
    })
  }

  fn close(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a.0.iter().zip(b.0).all(|(&a, b)| a.abs_diff(b) <= 1)
  }

  #[test] fn most_common_first() {
    let colors = prominent_colors(&quarter_blue(8, 8), 2);
    assert_eq!(colors.len(), 2);
    assert!(close(colors[0], RED), "{:?}", colors);
    assert!(close(colors[1], BLUE), "{:?}", colors);
  }

  #[test] fn more_clusters_than_colors() {
    let colors = prominent_colors(&quarter_blue(8, 8), 4);
    assert!((2..=4).contains(&colors.len()), "{:?}", colors);
    assert!(close(colors[0], RED) && close(colors[1], BLUE), "{:?}", colors);
    assert!(colors.iter().all(|&c| close(c, RED) || close(c, BLUE)));
  }

  #[test] fn many_caps_are_capped() {
    let colors = prominent_colors(&quarter_blue(8, 8), 1000);
    assert!(!colors.is_empty() && colors.len() <= 255);
    assert_eq!(fit(colors, 1000).len(), 1000);
  }

  #[test] fn ignores_transparent_pixels() {
    let mut image = RgbaImage::from_pixel(6, 6, Rgba([0, 255, 0, 0]));
    image.put_pixel(2, 2, RED);
    let colors = prominent_colors(&image, 1);
    assert_eq!(colors.len(), 1);
    assert!(close(colors[0], RED), "{:?}", colors);
  }

  #[test] fn transparent_image_sentinel() {
    let image = RgbaImage::new(6, 6);
    assert_eq!(prominent_colors(&image, 5), vec![TRANSPARENT]);
    assert!(prominent_colors(&image, 0).is_empty());
  }

  #[test] fn large_images_are_reduced() {
    let colors = prominent_colors(&quarter_blue(400, 200), 2);
    assert_eq!(colors.len(), 2);
    let [reddish, blueish] = [colors[0], colors[1]];
    assert!(reddish[0] > 200 && reddish[2] < 55, "{:?}", reddish);
    assert!(blueish[2] > 200 && blueish[0] < 55, "{:?}", blueish);
  }

  #[test] fn fit_sizes() {
    let palette = vec![RED, BLUE, TRANSPARENT];
    assert_eq!(fit(palette.clone(), 2), vec![RED, BLUE]);
    assert_eq!(fit(palette.clone(), 3), palette);
    assert_eq!(fit(palette, 7), vec![RED, BLUE, TRANSPARENT, RED, BLUE, TRANSPARENT, RED]);
    assert!(fit(vec![], 4).is_empty());
  }
}
