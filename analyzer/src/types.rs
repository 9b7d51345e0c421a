use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Data {
  pub x: f64,
  pub y: f64,
}

/// Strongest bin of a one-sided spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
  pub index: usize,
  pub frequency: f64,
  pub amplitude: f64,
}

/// One-sided amplitude spectrum. Both vectors hold `sample_count / 2` bins and
/// amplitudes are `|X[k]| / N`, a magnitude rather than an RMS value.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
  pub frequencies: Vec<f64>,
  pub amplitudes: Vec<f64>,
  pub sample_count: usize,
  pub sampling_rate: f64,
}

impl Spectrum {
  pub fn len(&self) -> usize {
    self.amplitudes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.amplitudes.is_empty()
  }

  /// First bin holding the largest amplitude.
  pub fn peak(&self) -> Option<Peak> {
    let mut peak: Option<Peak> = None;
    for (index, (&frequency, &amplitude)) in self
      .frequencies
      .iter()
      .zip(self.amplitudes.iter())
      .enumerate()
    {
      match peak {
        Some(p) if p.amplitude >= amplitude => {}
        _ => {
          peak = Some(Peak {
            index,
            frequency,
            amplitude,
          })
        }
      }
    }
    peak
  }

  /// Bin spacing in Hz.
  pub fn resolution(&self) -> f64 {
    self.sampling_rate / self.sample_count as f64
  }

  pub fn nyquist(&self) -> f64 {
    self.sampling_rate / 2.0
  }

  pub fn points(&self) -> Vec<Data> {
    self
      .frequencies
      .iter()
      .zip(self.amplitudes.iter())
      .map(|(&x, &y)| Data { x, y })
      .collect()
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnobResult {
  pub signal_power: f64,
  pub noise_power: f64,
  pub snr: f64,
  pub enob: f64,
}

impl fmt::Display for EnobResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "snr: {:.2}", self.snr)?;
    write!(f, "ENOB: {:.2} bits", self.enob)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn spectrum(amplitudes: Vec<f64>) -> Spectrum {
    let n = amplitudes.len() * 2;
    Spectrum {
      frequencies: (0..amplitudes.len()).map(|k| k as f64).collect(),
      amplitudes,
      sample_count: n,
      sampling_rate: n as f64,
    }
  }

  #[test]
  fn peak_prefers_first_of_ties() {
    let s = spectrum(vec![1.0, 3.0, 2.0, 3.0]);
    let peak = s.peak().unwrap();
    assert_eq!(peak.index, 1);
    assert_eq!(peak.frequency, 1.0);
    assert_eq!(peak.amplitude, 3.0);
  }

  #[test]
  fn empty_spectrum_has_no_peak() {
    assert!(spectrum(vec![]).peak().is_none());
  }

  #[test]
  fn resolution_and_nyquist() {
    let s = spectrum(vec![0.0; 4]);
    assert_eq!(s.resolution(), 1.0);
    assert_eq!(s.nyquist(), 4.0);
    assert_eq!(s.points().len(), 4);
  }

  #[test]
  fn report_lines() {
    let result = EnobResult {
      signal_power: 4.0,
      noise_power: 0.0004,
      snr: 1234.5678,
      enob: 12.951,
    };
    assert_eq!(result.to_string(), "snr: 1234.57\nENOB: 12.95 bits");
  }
}
