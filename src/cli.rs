//! Command line driver for the whole batch pipeline:
//! caps -> palette -> assignment -> tiling -> placement -> output file.

use {
  crate::{
    assign::Strategy,
    cap,
    drawing::Canvas,
    geometry::{image_bounds, point},
    mosaic::{self, RenderMode},
    palette,
    pattern::{LatticeKind, Layout, Pattern},
    profile
  },
  anyhow::{bail, Context, Result},
  clap::{Parser, ValueEnum},
  humansize::{file_size_opts as options, FileSize},
  image::Rgba,
  rand::SeedableRng,
  std::path::PathBuf,
  tracing::{info, warn}
};

pub const DEFAULT_RADIUS: f64 = 20.0;
pub const DEFAULT_PADDING: f64 = -5.0;
/// Default `left` and `top` of the first cell center.
pub const DEFAULT_OFFSET: f64 = 40.0;
pub const DEFAULT_SEED: u64 = 0;
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Parser, Debug)]
#[command(name = "cap-mosaic", version, about = "Approximate an image with a mosaic of bottle caps")]
pub struct Cli {
  /// Directory of cap images (png, jpeg)
  #[arg(value_name = "CAPS_DIR")]
  pub caps: PathBuf,

  /// Image to approximate
  #[arg(value_name = "SOURCE")]
  pub source: PathBuf,

  /// Output image, encoded by extension
  #[arg(short, long, default_value = "out.png")]
  pub output: PathBuf,

  /// Cell radius in pixels
  #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
  pub radius: f64,

  /// Gap between the edges of neighbouring cells
  #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
  pub spacing: f64,

  /// Grows the area sampled under each cell, shrinks it when negative
  #[arg(long, default_value_t = DEFAULT_PADDING, allow_hyphen_values = true)]
  pub padding: f64,

  /// X of the first cell center
  #[arg(long, default_value_t = DEFAULT_OFFSET, allow_hyphen_values = true)]
  pub left: f64,

  /// Y of the first cell center
  #[arg(long, default_value_t = DEFAULT_OFFSET, allow_hyphen_values = true)]
  pub top: f64,

  /// Packing of the cells
  #[arg(short, long, value_enum, default_value_t = PatternArg::TriangularV)]
  pub pattern: PatternArg,

  /// Which side of the color assignment gets priority
  #[arg(long, value_enum, default_value_t = StrategyArg::ElementMajor)]
  pub strategy: StrategyArg,

  /// Draw cap images, or plain discs of the assigned colors
  #[arg(long, value_enum, default_value_t = RenderArg::Caps)]
  pub render: RenderArg,

  /// Seed of the cap shuffle
  #[arg(short, long, default_value_t = DEFAULT_SEED)]
  pub seed: u64,

  /// Open the result in the default viewer
  #[arg(long)]
  pub open: bool
}

impl Cli {
  /// Rejects layouts whose walk would never leave the image: the step between cell
  /// centers has to be positive and every coordinate finite.
  pub fn validate(&self) -> Result<()> {
    if !self.radius.is_finite() || self.radius <= 0.0 {
      bail!("radius must be a positive number, got {}", self.radius);
    }
    let step = 2.0 * self.radius + self.spacing;
    if !step.is_finite() || step <= 0.0 {
      bail!("spacing {} leaves no room between cells of radius {}", self.spacing, self.radius);
    }
    if !(self.left.is_finite() && self.top.is_finite() && self.padding.is_finite()) {
      bail!("offsets and padding must be finite");
    }
    Ok(())
  }
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PatternArg {
  Square,
  TriangularV,
  TriangularH
}

impl From<PatternArg> for LatticeKind {
  fn from(arg: PatternArg) -> Self {
    match arg {
      PatternArg::Square => LatticeKind::Square,
      PatternArg::TriangularV => LatticeKind::TriangularV,
      PatternArg::TriangularH => LatticeKind::TriangularH
    }
  }
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StrategyArg {
  ElementMajor,
  PaletteMajor
}

impl From<StrategyArg> for Strategy {
  fn from(arg: StrategyArg) -> Self {
    match arg {
      StrategyArg::ElementMajor => Strategy::ElementMajor,
      StrategyArg::PaletteMajor => Strategy::PaletteMajor
    }
  }
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderArg {
  Caps,
  Circles
}

impl From<RenderArg> for RenderMode {
  fn from(arg: RenderArg) -> Self {
    match arg {
      RenderArg::Caps => RenderMode::Caps,
      RenderArg::Circles => RenderMode::Circles
    }
  }
}

/// Build the mosaic described by `cli` and write it to `cli.output`.
/// Nothing is written unless every step before encoding succeeded.
pub fn run(cli: &Cli) -> Result<()> {
  cli.validate()?;
  let mut caps = profile!("caps", cap::read_dir(&cli.caps, cli.radius))
    .with_context(|| format!("reading caps from {:?}", cli.caps))?;
  if caps.is_empty() {
    bail!("no cap images in {:?}", cli.caps);
  }

  let source = image::open(&cli.source)
    .with_context(|| format!("reading {:?}", cli.source))?
    .to_rgba8();

  // one color per cap
  let palette = profile!("palette", palette::prominent_colors(&source, caps.len()));
  let palette = palette::fit(palette, caps.len());

  let mut rng = rand_pcg::Pcg64::seed_from_u64(cli.seed);
  cap::shuffle(&mut caps, &mut rng);
  Strategy::from(cli.strategy).assign(&mut caps, &palette)?;

  let bounds = image_bounds(source.width(), source.height());
  let cells = Layout::lattice(
    cli.pattern.into(),
    point(cli.left, cli.top),
    bounds,
    cli.radius,
    cli.spacing
  ).circles();
  info!(cells = cells.len(), pattern = ?cli.pattern, "generated cells");

  let placements = profile!("plan", mosaic::plan(&source, &cells, &caps, cli.padding))?;
  info!("drawing {} caps", placements.len());
  let mut canvas = Canvas::new(bounds, BACKGROUND);
  mosaic::render(&mut canvas, &placements, cli.render.into());
  canvas.save(&cli.output)
    .with_context(|| format!("writing {:?}", cli.output))?;

  let size = std::fs::metadata(&cli.output)?.len();
  info!(
    output = ?cli.output,
    size = %size.file_size(options::CONVENTIONAL).unwrap_or_else(|e| e),
    "saved mosaic"
  );

  if cli.open {
    let status = open::that(&cli.output)?;
    if !status.success() {
      warn!(?status, "viewer exited with an error");
    }
  }
  Ok(())
}
