//! .
//!
//! Every error is fatal for a mosaic run: nothing here is retried or recovered from.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error("unable to open {path:?}: {source}")]
  Open {
    path: PathBuf,
    source: image::ImageError
  },

  #[error("number of elements ({elements}) doesn't match number of colors ({colors})")]
  SizeMismatch {
    elements: usize,
    colors: usize
  },

  #[error("no elements to match against")]
  EmptyInput
}

pub type Result<T> = std::result::Result<T, Error>;
