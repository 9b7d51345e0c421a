use crate::{AnalyzerError, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one ADC code per line. Surrounding whitespace is trimmed and any line that
/// is not an integer aborts the whole load.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<i64>> {
  let mut samples = Vec::new();
  for (i, line) in reader.lines().enumerate() {
    let line = line.map_err(|source| AnalyzerError::Io { path: None, source })?;
    let trimmed = line.trim();
    let sample = trimmed
      .parse::<i64>()
      .map_err(|source| AnalyzerError::Parse {
        line: i + 1,
        content: trimmed.to_string(),
        source,
      })?;
    samples.push(sample);
  }
  debug!("Read {} samples", samples.len());
  Ok(samples)
}

pub fn read_samples_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| AnalyzerError::Io {
    path: Some(path.to_path_buf()),
    source,
  })?;
  read_samples(BufReader::new(file)).map_err(|e| match e {
    AnalyzerError::Io { path: None, source } => AnalyzerError::Io {
      path: Some(path.to_path_buf()),
      source,
    },
    other => other,
  })
}
