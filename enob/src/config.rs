use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "adc_values.txt";
pub const DEFAULT_PLOT_FILE: &str = "fft_analysis.png";

/// Estimate the effective number of bits of an ADC capture.
#[derive(Debug, Default, Parser)]
#[command(name = "enob", version)]
pub struct Cli {
  /// Capture with one integer ADC code per line [env: ADC_FILE]
  #[arg(long)]
  pub file: Option<PathBuf>,
  /// Samples per second [env: SAMPLING_RATE]
  #[arg(long)]
  pub sampling_rate: Option<f64>,
  /// Where to write the spectrum plot [env: PLOT_FILE]
  #[arg(long)]
  pub plot: Option<PathBuf>,
  /// Skip rendering the spectrum plot
  #[arg(long)]
  pub no_plot: bool,
  /// YAML config, defaults to config.yaml in this crate
  #[arg(long)]
  pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
  pub filename: Option<PathBuf>,
  pub sampling_rate: Option<f64>,
  pub plot_file: Option<PathBuf>,
}

impl YamlConfig {
  fn read(path: &Path) -> anyhow::Result<Self> {
    let contents = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config {}", path.display()))?;
    let yaml: YamlConfig = serde_yaml::from_str(&contents)
      .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(yaml)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub filename: PathBuf,
  pub sampling_rate: f64,
  /// `None` when plotting is disabled.
  pub plot_file: Option<PathBuf>,
}

impl Config {
  /// CLI flags win over environment variables, which win over the YAML file.
  pub fn read(cli: Cli) -> anyhow::Result<Self> {
    let yaml = match &cli.config {
      Some(path) => YamlConfig::read(path)?,
      None => {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.yaml");
        if path.exists() {
          YamlConfig::read(&path)?
        } else {
          YamlConfig::default()
        }
      }
    };
    Self::resolve(cli, |key| std::env::var(key).ok(), yaml)
  }

  fn resolve<F: Fn(&str) -> Option<String>>(
    cli: Cli,
    env: F,
    yaml: YamlConfig,
  ) -> anyhow::Result<Self> {
    let filename = cli
      .file
      .or_else(|| env("ADC_FILE").map(PathBuf::from))
      .or(yaml.filename)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));

    let env_rate = match env("SAMPLING_RATE") {
      Some(rate) => Some(
        rate
          .trim()
          .parse::<f64>()
          .with_context(|| format!("SAMPLING_RATE is not a number: {:?}", rate))?,
      ),
      None => None,
    };
    let sampling_rate = cli
      .sampling_rate
      .or(env_rate)
      .or(yaml.sampling_rate)
      .unwrap_or(analyzer::DEFAULT_SAMPLING_RATE);
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
      return Err(anyhow::anyhow!(
        "Sampling rate must be positive, got {}",
        sampling_rate
      ));
    }

    let plot_file = match cli.no_plot {
      true => None,
      false => Some(
        cli
          .plot
          .or_else(|| env("PLOT_FILE").map(PathBuf::from))
          .or(yaml.plot_file)
          .unwrap_or_else(|| PathBuf::from(DEFAULT_PLOT_FILE)),
      ),
    };

    Ok(Self {
      filename,
      sampling_rate,
      plot_file,
    })
  }
}
