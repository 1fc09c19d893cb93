//! Greedy nearest-color matching between elements and a palette.
//!
//! Both assignment strategies are bijective and greedy per step: each step takes the
//! nearest candidate still available, the first one on ties. Nothing is optimized globally,
//! so the order of the driving sequence decides who gets the close colors.

use {
  crate::{
    color::distance,
    error::{Error, Result}
  },
  image::Rgba,
  tracing::debug
};


/// Something that carries a color and can be recolored.
pub trait Element {
  fn color(&self) -> Rgba<u8>;
  fn set_color(&mut self, color: Rgba<u8>);
}

/// Which side of the matching drives the greedy iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
  /// Elements in order pick their nearest remaining color.
  ElementMajor,
  /// Colors in palette order pick their nearest unused element.
  PaletteMajor
}

impl Strategy {
  pub fn assign<E: Element>(self, elements: &mut [E], palette: &[Rgba<u8>]) -> Result<()> {
    match self {
      Strategy::ElementMajor => assign_best_colors(elements, palette),
      Strategy::PaletteMajor => assign_best_colors_by_palette(elements, palette)
    }
  }
}

/// Element whose color is nearest to `target`.
pub fn best_match<E: Element>(target: Rgba<u8>, elements: &[E]) -> Result<&E> {
  nearest(target, elements.iter().map(Element::color).enumerate())
    .map(|index| &elements[index])
    .ok_or(Error::EmptyInput)
}

/// Element-major assignment: the order of `elements` decides the priority.
///
/// A removed color is replaced by the last one of the pool, so later scans see the
/// remaining colors in a different order than `palette`.
pub fn assign_best_colors<E: Element>(elements: &mut [E], palette: &[Rgba<u8>]) -> Result<()> {
  ensure_same_size(elements.len(), palette.len())?;
  let mut pool = palette.to_vec();
  for element in elements.iter_mut() {
    let best = nearest(element.color(), pool.iter().copied().enumerate())
      .ok_or(Error::EmptyInput)?;
    element.set_color(pool.swap_remove(best));
  }
  debug!(count = palette.len(), "assigned colors element-major");
  Ok(())
}

/// Palette-major assignment: the order of `palette` decides the priority.
/// Elements keep their positions.
pub fn assign_best_colors_by_palette<E: Element>(elements: &mut [E], palette: &[Rgba<u8>]) -> Result<()> {
  ensure_same_size(elements.len(), palette.len())?;
  let mut used = vec![false; elements.len()];
  for &color in palette {
    let candidates = elements.iter()
      .enumerate()
      .filter(|(index, _)| !used[*index])
      .map(|(index, element)| (index, element.color()));
    let best = nearest(color, candidates).ok_or(Error::EmptyInput)?;
    elements[best].set_color(color);
    used[best] = true;
  }
  debug!(count = palette.len(), "assigned colors palette-major");
  Ok(())
}

fn ensure_same_size(elements: usize, colors: usize) -> Result<()> {
  if elements != colors {
    return Err(Error::SizeMismatch { elements, colors });
  }
  Ok(())
}

/// Index of the candidate nearest to `target`. The first candidate seeds the search and
/// only a strictly smaller distance replaces it.
fn nearest(target: Rgba<u8>, candidates: impl Iterator<Item = (usize, Rgba<u8>)>) -> Option<usize> {
  candidates
    .fold(None, |best: Option<(usize, f64)>, (index, color)| {
      let dist = distance(target, color);
      match best {
        Some((_, best_dist)) if best_dist <= dist => best,
        _ => Some((index, dist))
      }
    })
    .map(|(index, _)| index)
}
