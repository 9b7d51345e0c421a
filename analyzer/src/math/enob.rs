use crate::{AnalyzerError, EnobResult, Result};
use log::debug;

/// Unit compensation for the `|X| / N` magnitude normalization. It is not a
/// general constant: changing the normalization invalidates it.
pub const SNR_SCALE: f64 = 1e20;
pub const ENOB_OFFSET: f64 = 1.76;
pub const BITS_PER_STEP: f64 = 6.02;

pub fn snr_from_powers(signal_power: f64, noise_power: f64) -> Result<f64> {
  if noise_power <= 0.0 {
    return Err(AnalyzerError::DegenerateSpectrum { signal_power });
  }
  Ok((signal_power / noise_power) * SNR_SCALE)
}

pub fn enob_from_snr(snr: f64) -> f64 {
  (snr.log2() - ENOB_OFFSET) / BITS_PER_STEP
}

/// Estimates ENOB from a one-sided amplitude spectrum.
///
/// The strongest bin is taken as the fundamental and every other bin, DC
/// included, counts as noise. A capture whose largest bin is a DC offset or a
/// spur is therefore misread.
pub fn calculate_enob(amplitudes: &[f64]) -> Result<EnobResult> {
  if amplitudes.is_empty() {
    return Err(AnalyzerError::InvalidInput(
      "cannot estimate ENOB from an empty spectrum".to_string(),
    ));
  }

  let peak = amplitudes.iter().copied().fold(f64::MIN, f64::max);
  let signal_power = peak.powi(2);
  let total_power: f64 = amplitudes.iter().map(|a| a.powi(2)).sum();
  let noise_power = total_power - signal_power;

  let snr = snr_from_powers(signal_power, noise_power)?;
  let enob = enob_from_snr(snr);
  debug!(
    "signal power: {}, noise power: {}, snr: {}, enob: {}",
    signal_power, noise_power, snr, enob
  );

  Ok(EnobResult {
    signal_power,
    noise_power,
    snr,
    enob,
  })
}
