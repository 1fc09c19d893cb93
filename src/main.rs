use {
  cap_mosaic::cli::{self, Cli},
  clap::Parser,
  tracing_subscriber::EnvFilter
};

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();
  cli::run(&cli)
}
