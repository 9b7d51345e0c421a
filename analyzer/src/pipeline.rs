use crate::{calculate_enob, perform_fft, read_samples, read_samples_from_file, EnobResult, Result, Spectrum};
use log::info;
use std::io::BufRead;
use std::path::Path;

pub const DEFAULT_SAMPLING_RATE: f64 = 31_250.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
  /// Samples per second.
  pub sampling_rate: f64,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      sampling_rate: DEFAULT_SAMPLING_RATE,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Analysis {
  pub spectrum: Spectrum,
  pub result: EnobResult,
}

/// Loader -> spectrum -> ENOB, run once per capture.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
  config: PipelineConfig,
}

impl Pipeline {
  pub fn new(config: PipelineConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &PipelineConfig {
    &self.config
  }

  pub fn analyze(&self, samples: &[i64]) -> Result<Analysis> {
    let spectrum = perform_fft(samples, self.config.sampling_rate)?;
    let result = calculate_enob(&spectrum.amplitudes)?;
    if let Some(peak) = spectrum.peak() {
      info!(
        "Fundamental at {:.2} Hz (bin {} of {}), amplitude {:.4}",
        peak.frequency,
        peak.index,
        spectrum.len(),
        peak.amplitude
      );
    }
    Ok(Analysis { spectrum, result })
  }

  pub fn analyze_reader<R: BufRead>(&self, reader: R) -> Result<Analysis> {
    let samples = read_samples(reader)?;
    self.analyze(&samples)
  }

  pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Analysis> {
    let samples = read_samples_from_file(path.as_ref())?;
    info!(
      "Loaded {} samples from {}",
      samples.len(),
      path.as_ref().display()
    );
    self.analyze(&samples)
  }
}
