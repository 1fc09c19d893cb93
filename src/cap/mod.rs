//! Bottle caps: the placeable elements of a mosaic.

use {
  crate::{
    assign::Element,
    color::average_color,
    error::{Error, Result}
  },
  image::{
    imageops::{self, FilterType},
    Rgba, RgbaImage
  },
  rand::{seq::SliceRandom, Rng},
  std::{
    ffi::OsStr,
    fmt, io,
    path::{Path, PathBuf}
  },
  tracing::{debug, info},
  walkdir::{DirEntry, WalkDir}
};

#[cfg(test)] mod tests;

/// A cap's image, already sized to a cell, and its current color.
#[derive(Debug, Clone)]
pub struct Cap {
  pub name: String,
  pub image: RgbaImage,
  pub color: Rgba<u8>
}

impl Cap {
  pub fn new(name: impl Into<String>, image: RgbaImage, color: Rgba<u8>) -> Self {
    Self { name: name.into(), image, color }
  }

  /// Read a cap image and resize it to fit a cell of `radius`.
  /// The color is the average of the full-size image.
  pub fn open(path: impl AsRef<Path>, radius: f64) -> Result<Self> {
    let path = path.as_ref();
    let image = image::open(path)
      .map_err(|source| Error::Open { path: path.to_owned(), source })?
      .to_rgba8();
    let size = cell_size(radius);
    debug!(?path, size, "read cap");
    Ok(Self {
      name: path.display().to_string(),
      color: average_color(&image),
      image: imageops::resize(&image, size, size, FilterType::Lanczos3)
    })
  }
}

impl Element for Cap {
  fn color(&self) -> Rgba<u8> {
    self.color
  }

  fn set_color(&mut self, color: Rgba<u8>) {
    self.color = color;
  }
}

impl fmt::Display for Cap {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Cap({})", self.name)
  }
}

/// Side of the square a cap image occupies, at least one pixel.
pub fn cell_size(radius: f64) -> u32 {
  ((2.0 * radius).round() as u32).max(1)
}

/// Read every png/jpeg directly inside `dir`, in natural file name order.
/// Fails on the first unreadable file.
pub fn read_dir(dir: impl AsRef<Path>, radius: f64) -> Result<Vec<Cap>> {
  let caps = find_images(dir.as_ref())?
    .iter()
    .map(|path| Cap::open(path, radius))
    .collect::<Result<Vec<_>>>()?;
  info!(count = caps.len(), dir = ?dir.as_ref(), "read caps");
  Ok(caps)
}

/// Shuffle the caps, which changes their priority in element-major assignment.
pub fn shuffle(caps: &mut [Cap], rng: &mut impl Rng) {
  caps.shuffle(rng);
}

fn find_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
  WalkDir::new(dir)
    .min_depth(1)
    .max_depth(1)
    .sort_by(|a, b| lexical_sort::lexical_cmp(
      &a.file_name().to_string_lossy(),
      &b.file_name().to_string_lossy()
    ))
    .into_iter()
    .filter(|entry| entry.as_ref()
      .map_or(true, |entry| entry.file_type().is_file() && is_image(entry.path())))
    .map(|entry| entry.map(DirEntry::into_path).map_err(io::Error::from))
    .collect()
}

fn is_image(path: &Path) -> bool {
  let extension = path.extension()
    .and_then(OsStr::to_str)
    .map(str::to_ascii_lowercase);
  matches!(extension.as_deref(), Some("png" | "jpg" | "jpeg"))
}
