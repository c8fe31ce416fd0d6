//! Predicted-productivity time series rendering

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::PredictedPoint;

const CANVAS_SIZE: (u32, u32) = (1200, 600);

/// Tick label stride: roughly ten evenly spaced labels, never zero.
fn tick_stride(n_points: usize) -> usize {
    (n_points / 10).max(1)
}

/// Render the predicted-productivity line chart to `output`.
///
/// The backend follows the file extension: `.svg` renders vector output,
/// anything else goes through the bitmap backend (png/jpeg/bmp inferred by
/// plotters from the extension).
pub fn render_series(points: &[PredictedPoint], output: &Path) -> Result<()> {
    if points.is_empty() {
        return Err(Error::InvalidData(
            "no aggregated buckets to plot".to_string(),
        ));
    }

    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("svg") {
        draw(points, SVGBackend::new(output, CANVAS_SIZE).into_drawing_area())?;
    } else {
        draw(points, BitMapBackend::new(output, CANVAS_SIZE).into_drawing_area())?;
    }

    debug!(
        "rendered {} buckets to {}",
        points.len(),
        output.display()
    );
    Ok(())
}

fn draw<DB: DrawingBackend>(
    points: &[PredictedPoint],
    root: DrawingArea<DB, plotters::coord::Shift>,
) -> Result<()> {
    let n = points.len();
    let stride = tick_stride(n);
    let labels: Vec<String> = points.iter().map(|p| p.bucket.label()).collect();

    let (y_min, y_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.predicted), hi.max(p.predicted))
        });
    // Keep a visible span even when every prediction is identical
    let pad = ((y_max - y_min) * 0.05).max(1.0);

    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Time Series Analysis of Predicted Productivity",
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n as i32, (y_min - pad)..(y_max + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (Day-Hour)")
        .y_desc("Predicted Productivity")
        .x_labels(n)
        .x_label_formatter(&|idx: &i32| {
            let idx = *idx as usize;
            if idx % stride == 0 {
                labels.get(idx).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(plot_err)?;

    let series: Vec<(i32, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as i32, p.predicted))
        .collect();

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
        .map_err(plot_err)?
        .label("Predicted Productivity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}
