use std::num::ParseIntError;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
  #[error("Failed to read samples from {}", source_name(.path.as_deref()))]
  Io {
    path: Option<PathBuf>,
    source: std::io::Error,
  },
  #[error("Line {line} is not an integer: {content:?}")]
  Parse {
    line: usize,
    content: String,
    source: ParseIntError,
  },
  #[error("Invalid input: {0}")]
  InvalidInput(String),
  /// Every bin but the peak is zero, so the SNR is undefined.
  #[error("Degenerate spectrum: noise power is zero (signal power {signal_power})")]
  DegenerateSpectrum { signal_power: f64 },
  #[error("Failed to plot: {0}")]
  Plot(String),
}

fn source_name(path: Option<&Path>) -> String {
  match path {
    Some(path) => path.display().to_string(),
    None => "input".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn io_error_names_path() {
    let err = AnalyzerError::Io {
      path: Some(PathBuf::from("adc_values.txt")),
      source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.to_string(), "Failed to read samples from adc_values.txt");

    let err = AnalyzerError::Io {
      path: None,
      source: std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
    };
    assert_eq!(err.to_string(), "Failed to read samples from input");
  }

  #[test]
  fn parse_error_keeps_line() {
    let source = "abc".parse::<i64>().unwrap_err();
    let err = AnalyzerError::Parse {
      line: 3,
      content: "abc".to_string(),
      source,
    };
    assert_eq!(err.to_string(), "Line 3 is not an integer: \"abc\"");
    assert!(std::error::Error::source(&err).is_some());
  }
}
