use crate::{AnalyzerError, Result, Spectrum};
use log::debug;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Sample frequencies of an `n` point DFT with sample spacing `d`, in fft order
/// (non-negative half first, then the negative half).
pub fn fft_frequencies(n: usize, d: f64) -> Vec<f64> {
  let val = 1.0 / (n as f64 * d);
  let mut result = Vec::with_capacity(n);
  let m = if n % 2 == 0 { n / 2 } else { n / 2 + 1 };
  for i in 0..m {
    result.push(i as f64 * val);
  }
  for i in -(n as i64 / 2)..0 {
    result.push(i as f64 * val);
  }
  result
}

/// One-sided amplitude spectrum of an ADC capture.
///
/// No window is applied. Bins `[0, N/2)` are kept, which drops the Nyquist bin
/// for even `N`, and each amplitude is `|X[k]| / N`.
pub fn perform_fft(samples: &[i64], sampling_rate: f64) -> Result<Spectrum> {
  let n = samples.len();
  if n < 2 {
    return Err(AnalyzerError::InvalidInput(format!(
      "at least 2 samples are required for a one-sided spectrum, got {}",
      n
    )));
  }
  if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
    return Err(AnalyzerError::InvalidInput(format!(
      "sampling rate must be positive, got {}",
      sampling_rate
    )));
  }

  let mut planner = FftPlanner::<f64>::new();
  let fft = planner.plan_fft_forward(n);
  let mut buffer: Vec<Complex<f64>> = samples
    .iter()
    .map(|&x| Complex::new(x as f64, 0.0))
    .collect();
  fft.process(&mut buffer);

  let half = n / 2;
  let frequencies: Vec<f64> = fft_frequencies(n, 1.0 / sampling_rate)
    .into_iter()
    .take(half)
    .collect();
  let amplitudes: Vec<f64> = buffer
    .iter()
    .take(half)
    .map(|x| x.norm() / n as f64)
    .collect();
  debug!(
    "FFT of {} samples at {} SPS, {} bins",
    n,
    sampling_rate,
    amplitudes.len()
  );

  Ok(Spectrum {
    frequencies,
    amplitudes,
    sample_count: n,
    sampling_rate,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn frequencies_match_fftfreq() {
    // numpy.fft.fftfreq(8, d=0.1)
    let freqs = fft_frequencies(8, 0.1);
    let expected = [0.0, 1.25, 2.5, 3.75, -5.0, -3.75, -2.5, -1.25];
    assert_eq!(freqs.len(), expected.len());
    for (f, e) in freqs.iter().zip(expected.iter()) {
      assert!((f - e).abs() < 1e-12, "{} != {}", f, e);
    }

    // numpy.fft.fftfreq(5, d=1.0)
    let freqs = fft_frequencies(5, 1.0);
    let expected = [0.0, 0.2, 0.4, -0.4, -0.2];
    for (f, e) in freqs.iter().zip(expected.iter()) {
      assert!((f - e).abs() < 1e-12, "{} != {}", f, e);
    }
  }

  #[test]
  fn too_few_samples() {
    assert!(matches!(
      perform_fft(&[], 8.0),
      Err(AnalyzerError::InvalidInput(_))
    ));
    assert!(matches!(
      perform_fft(&[42], 8.0),
      Err(AnalyzerError::InvalidInput(_))
    ));
  }

  #[test]
  fn bad_sampling_rate() {
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
      assert!(matches!(
        perform_fft(&[1, 2, 3, 4], rate),
        Err(AnalyzerError::InvalidInput(_))
      ));
    }
  }

  #[test]
  fn two_samples_give_dc_bin() -> anyhow::Result<()> {
    let spectrum = perform_fft(&[3, 5], 10.0)?;
    assert_eq!(spectrum.frequencies, vec![0.0]);
    assert!((spectrum.amplitudes[0] - 4.0).abs() < 1e-12);
    Ok(())
  }

  #[test]
  fn odd_length_keeps_floor_half() -> anyhow::Result<()> {
    let samples: Vec<i64> = (0..7).map(|i| (i * 13 % 5) - 2).collect();
    let spectrum = perform_fft(&samples, 7.0)?;
    assert_eq!(spectrum.len(), 3);
    assert_eq!(spectrum.frequencies[0], 0.0);
    assert!(*spectrum.frequencies.last().unwrap() < 3.5);
    Ok(())
  }

  #[test]
  fn alternating_tone_peaks_at_quarter_rate() -> anyhow::Result<()> {
    let samples = [0, 100, 0, -100, 0, 100, 0, -100];
    let spectrum = perform_fft(&samples, 8.0)?;
    assert_eq!(spectrum.frequencies, vec![0.0, 1.0, 2.0, 3.0]);
    let peak = spectrum.peak().unwrap();
    assert_eq!(peak.index, 2);
    assert_eq!(peak.frequency, 2.0);
    assert!((peak.amplitude - 50.0).abs() < 1e-9);
    for (k, a) in spectrum.amplitudes.iter().enumerate() {
      if k != 2 {
        assert!(*a < 1e-9, "bin {} = {}", k, a);
      }
    }
    Ok(())
  }
}
