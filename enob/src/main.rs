use analyzer::*;
use anyhow::Context;
use clap::Parser;
use config::*;
use log::info;

mod config;

fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  init_logger();

  let config = Config::read(Cli::parse())?;
  info!(
    "Analyzing {} at {} SPS",
    config.filename.display(),
    config.sampling_rate
  );

  let pipeline = Pipeline::new(PipelineConfig {
    sampling_rate: config.sampling_rate,
  });
  let Analysis { spectrum, result } = pipeline
    .analyze_file(&config.filename)
    .with_context(|| format!("Failed to analyze {}", config.filename.display()))?;

  println!("{}", result);

  if let Some(plot_file) = &config.plot_file {
    Plot::spectrum(&spectrum, plot_file)?;
    info!("Spectrum plot written to {}", plot_file.display());
  }

  Ok(())
}
