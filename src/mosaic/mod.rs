//! Composition: which cap goes into which cell, and drawing the result.
//!
//! Planning samples the source under every cell in parallel. It only reads the source and
//! the caps, so colors must be assigned to the caps before.

use {
  crate::{
    assign::best_match,
    cap::Cap,
    color::{average_color_in, is_transparent},
    drawing::Canvas,
    error::Result,
    geometry::{BoundingBox, Circle, Region}
  },
  image::{Rgba, RgbaImage},
  rayon::prelude::*,
  tracing::debug
};


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
  /// Cap images, top-left corner on the cell's bounding box.
  Caps,
  /// Discs filled with the caps' assigned colors.
  Circles
}

#[derive(Debug, Copy, Clone)]
pub struct Placement<'a> {
  pub cell: Circle,
  /// Average source color under the cell.
  pub sample: Rgba<u8>,
  pub cap: &'a Cap
}

/// Best cap for every cell of `cells`, in cell order.
///
/// The source is sampled over each cell's bounding box grown by `padding` (shrunk when
/// negative). Cells without a single visible source pixel are left out.
pub fn plan<'a>(
  source: &RgbaImage,
  cells: &[Circle],
  caps: &'a [Cap],
  padding: f64
) -> Result<Vec<Placement<'a>>> {
  let placements = cells.par_iter()
    .map(|&cell| -> Result<Option<Placement<'a>>> {
      let sample = average_color_in(source, cell.bounding_box().grow(padding));
      if is_transparent(sample) {
        return Ok(None);
      }
      let cap = best_match(sample, caps)?;
      Ok(Some(Placement { cell, sample, cap }))
    })
    .collect::<Result<Vec<_>>>()?
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
  debug!(cells = cells.len(), placed = placements.len(), "planned mosaic");
  Ok(placements)
}

pub fn render(canvas: &mut Canvas, placements: &[Placement<'_>], mode: RenderMode) {
  for placement in placements {
    match mode {
      RenderMode::Caps => canvas.draw_image_at(
        &placement.cap.image,
        placement.cell.bounding_box().min
      ),
      RenderMode::Circles => canvas.draw_circle(placement.cell, placement.cap.color)
    }
  }
}
