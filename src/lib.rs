//! Bottle cap photo mosaics.
//!
//! A mosaic is built in two independent halves:
//! - [`pattern`] tiles a rectangle with circular cells (square or triangular packing),
//!   stopping at the bounds with the inclusive bounding-box test of [`geometry`];
//! - [`assign`] recolors the caps with a palette, one palette entry per cap, by greedy
//!   nearest-color matching.
//!
//! [`mosaic`] then samples the source image under every cell and places the cap whose
//! assigned color is nearest.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   cap_mosaic::{
//! #     assign::Strategy,
//! #     cap, palette,
//! #     drawing::Canvas,
//! #     geometry::{image_bounds, point},
//! #     mosaic::{self, RenderMode},
//! #     pattern::{Pattern, TriangularV}
//! #   },
//! #   image::Rgba,
//! #   rand::SeedableRng
//! # };
//! # fn main() -> anyhow::Result<()> {
//! let radius = 20.0;
//! let mut caps = cap::read_dir("images/caps", radius)?;
//! let source = image::open("images/source.png")?.to_rgba8();
//!
//! // one prominent color of the source per cap
//! let palette = palette::fit(palette::prominent_colors(&source, caps.len()), caps.len());
//! cap::shuffle(&mut caps, &mut rand_pcg::Pcg64::seed_from_u64(0));
//! Strategy::ElementMajor.assign(&mut caps, &palette)?;
//!
//! let bounds = image_bounds(source.width(), source.height());
//! let cells = TriangularV { top_left: point(40.0, 40.0), bounds, radius, spacing: 0.0 }.circles();
//!
//! let placements = mosaic::plan(&source, &cells, &caps, -5.0)?;
//! let mut canvas = Canvas::new(bounds, Rgba([255, 255, 255, 255]));
//! mosaic::render(&mut canvas, &placements, RenderMode::Caps);
//! canvas.save("out.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod geometry;
pub mod pattern;
pub mod color;
pub mod assign;
pub mod cap;
pub mod palette;
pub mod drawing;
pub mod mosaic;
pub mod cli;
mod util;

#[doc(hidden)]
pub use tracing as __tracing;
