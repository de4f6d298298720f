//! Static Chart Renderer
//! Draws the frequency-sweep charts as PNG files with the plotters bitmap
//! backend.
//!
//! Charts:
//! 1. Moduli: G' and G" against frequency, log-log, with legend
//! 2. Viscosity: |eta*| against frequency, log-log, y fixed to 10..1000 Pa·s

use crate::config::artifact_path;
use crate::data::StatisticsMatrix;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MODULI_SUFFIX: &str = "moduli.png";
pub const VISCOSITY_SUFFIX: &str = "viscosity.png";

/// Display range of the viscosity axis.
pub const VISCOSITY_RANGE: Range<f64> = 10.0..1000.0;

const CHART_SIZE: (u32, u32) = (640, 480);

// Marker colors ('bo' / 'go')
const ELASTIC_COLOR: RGBColor = RGBColor(0, 0, 255);
const VISCOUS_COLOR: RGBColor = RGBColor(0, 128, 0);
const MARKER_SIZE: i32 = 4;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Paths of the images written by [`StaticChartRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCharts {
    pub moduli: PathBuf,
    pub viscosity: PathBuf,
}

pub struct StaticChartRenderer {
    size: (u32, u32),
}

impl Default for StaticChartRenderer {
    fn default() -> Self {
        Self::new(CHART_SIZE)
    }
}

impl StaticChartRenderer {
    pub fn new(size: (u32, u32)) -> Self {
        Self { size }
    }

    /// Write `<base>moduli.png` and `<base>viscosity.png`, overwriting any
    /// existing files.
    pub fn render(&self, base: &Path, stats: &StatisticsMatrix) -> Result<RenderedCharts> {
        if stats.samples() == 0 {
            return Err(PlotError::InvalidData(
                "statistics matrix has no samples".to_string(),
            ));
        }

        let moduli = artifact_path(base, MODULI_SUFFIX);
        self.draw_moduli(&moduli, stats)?;
        println!("Wrote file: {}", moduli.display());

        let viscosity = artifact_path(base, VISCOSITY_SUFFIX);
        self.draw_viscosity(&viscosity, stats)?;
        println!("Wrote file: {}", viscosity.display());

        Ok(RenderedCharts { moduli, viscosity })
    }

    fn draw_moduli(&self, output_path: &Path, stats: &StatisticsMatrix) -> Result<()> {
        let elastic = log_points(stats.frequency(), stats.elastic_modulus());
        let viscous = log_points(stats.frequency(), stats.viscous_modulus());

        let x_range = padded_log_range(elastic.iter().chain(&viscous).map(|p| p.0));
        let y_range = padded_log_range(elastic.iter().chain(&viscous).map(|p| p.1));
        log::debug!(
            "Moduli chart: {} G' / {} G\" points, x {:?}, y {:?}",
            elastic.len(),
            viscous.len(),
            x_range,
            y_range
        );

        let root = BitMapBackend::new(output_path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("f [Hz]")
            .y_desc("Modulus (G', G'') [Pa]")
            .label_style(tick_font())
            .axis_desc_style(axis_font())
            .x_label_formatter(&tick_label)
            .y_label_formatter(&tick_label)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(
                elastic
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_SIZE, ELASTIC_COLOR.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label("G'")
            .legend(|(x, y)| Circle::new((x + 10, y), MARKER_SIZE, ELASTIC_COLOR.filled()));

        chart
            .draw_series(
                viscous
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_SIZE, VISCOUS_COLOR.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label("G\"")
            .legend(|(x, y)| Circle::new((x + 10, y), MARKER_SIZE, VISCOUS_COLOR.filled()));

        // opaque frame
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.filled())
            .border_style(&BLACK)
            .label_font(tick_font())
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }

    fn draw_viscosity(&self, output_path: &Path, stats: &StatisticsMatrix) -> Result<()> {
        let points: Vec<(f64, f64)> = log_points(stats.frequency(), stats.complex_viscosity())
            .into_iter()
            .filter(|(_, y)| (VISCOSITY_RANGE.start..=VISCOSITY_RANGE.end).contains(y))
            .collect();
        let x_range = padded_log_range(stats.frequency().iter().copied());
        log::debug!(
            "Viscosity chart: {} of {} points in range, x {:?}",
            points.len(),
            stats.samples(),
            x_range
        );

        let root = BitMapBackend::new(output_path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range.log_scale(), VISCOSITY_RANGE.log_scale())
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("f [Hz]")
            .y_desc("|η*| [Pa·s]")
            .label_style(tick_font())
            .axis_desc_style(axis_font())
            .x_label_formatter(&tick_label)
            .y_label_formatter(&tick_label)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_SIZE, ELASTIC_COLOR.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }
}

fn tick_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Bold)
}

fn axis_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Bold)
}

/// Pair `x` with `y` and drop points a log axis cannot show
/// (non-positive or non-finite in either coordinate).
pub fn log_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .map(|(&x, &y)| (x, y))
        .filter(|&(x, y)| is_loggable(x) && is_loggable(y))
        .collect()
}

fn is_loggable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Log-axis range covering the positive values, padded by 5% of the span in
/// decades (half a decade when all values coincide). Falls back to 1..10.
pub fn padded_log_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| is_loggable(*v))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 1.0..10.0;
    }

    let (lo, hi) = (min.log10(), max.log10());
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    10f64.powf(lo - pad)..10f64.powf(hi + pad)
}

/// Tick text: plain decimals for moderate magnitudes, scientific otherwise.
fn tick_label(value: &f64) -> String {
    let v = *value;
    let magnitude = v.abs();
    if magnitude == 0.0 {
        return "0".to_string();
    }
    if (0.01..10_000.0).contains(&magnitude) {
        let text = format!("{:.3}", v);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{:.0e}", v)
    }
}
