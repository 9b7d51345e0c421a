use crate::{AnalyzerError, Data, Result, Spectrum};
use plotters::prelude::*;
use plotters::style::full_palette::*;
use plotters::style::{BLACK, WHITE};
use std::ops::Range;
use std::path::Path;

const LINE: RGBColor = BLUE_A700;
const GRID: RGBColor = GREY_400;
const SUB_GRID: RGBColor = GREY_200;

pub struct Plot;

impl Plot {
  /// Amplitude against frequency, from DC up to the Nyquist frequency.
  pub fn spectrum(spectrum: &Spectrum, out_file: &Path) -> Result<()> {
    Self::plot(
      &spectrum.points(),
      out_file,
      "FFT Analysis",
      "Frequency (Hz)",
      "Amplitude",
      0.0..spectrum.nyquist(),
    )
  }

  pub fn plot(
    data: &[Data],
    out_file: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    x_range: Range<f64>,
  ) -> Result<()> {
    let y_range = y_range(data);

    let root = BitMapBackend::new(out_file, (2048, 1024)).into_drawing_area();
    root
      .fill(&WHITE)
      .map_err(|e| AnalyzerError::Plot(format!("Failed to fill drawing area with white: {}", e)))?;
    let mut chart = ChartBuilder::on(&root)
      .margin_top(20)
      .margin_bottom(20)
      .margin_left(30)
      .margin_right(30)
      .set_all_label_area_size(150)
      .caption(title, ("sans-serif", 40.0).into_font())
      .build_cartesian_2d(x_range, y_range)
      .map_err(|e| AnalyzerError::Plot(format!("Failed to build cartesian 2d: {}", e)))?;

    chart
      .configure_mesh()
      .bold_line_style(GRID)
      .light_line_style(SUB_GRID)
      .label_style(("sans-serif", 30, &BLACK).into_text_style(&root))
      .x_desc(x_label)
      .y_desc(y_label)
      .y_labels(10)
      .draw()
      .map_err(|e| AnalyzerError::Plot(format!("Failed to draw mesh: {}", e)))?;

    chart
      .draw_series(LineSeries::new(
        data.iter().map(|d| (d.x, d.y)),
        ShapeStyle {
          color: RGBAColor::from(LINE),
          filled: true,
          stroke_width: 2,
        },
      ))
      .map_err(|e| AnalyzerError::Plot(format!("Failed to draw series: {}", e)))?;

    root
      .present()
      .map_err(|e| AnalyzerError::Plot(format!("Failed to present root: {}", e)))?;

    Ok(())
  }
}

/// Zero up to the largest value, padded so a flat series still has a drawable range.
fn y_range(data: &[Data]) -> Range<f64> {
  let max_y = data.iter().map(|d| d.y).fold(0.0, f64::max);
  if max_y > 0.0 {
    0.0..max_y * 1.05
  } else {
    0.0..1.0
  }
}
