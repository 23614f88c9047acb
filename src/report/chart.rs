use super::Bar;
use crate::error::{OrghistError, Result};
use plotters::prelude::*;
use std::path::Path;

/// 4x4 inches at 96 dpi.
pub const CHART_SIZE: (u32, u32) = (384, 384);

#[derive(Debug, Clone)]
pub struct ChartLayout<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub size: (u32, u32),
}

impl Default for ChartLayout<'static> {
    fn default() -> Self {
        Self {
            title: "Histogram",
            x_desc: "Time range",
            y_desc: "# of commits",
            size: CHART_SIZE,
        }
    }
}

pub fn render_histogram(bars: &[Bar], path: &Path, layout: &ChartLayout) -> Result<()> {
    let root = BitMapBackend::new(path, layout.size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let slots = bars.len().max(1);
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(layout.title, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(48)
        .y_label_area_size(40)
        .build_cartesian_2d((0..slots).into_segmented(), 0u32..max + 1)
        .map_err(render_error)?;

    let label_of = |v: &SegmentValue<usize>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            bars.get(*i).map(|b| b.label.clone()).unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&label_of)
        .x_desc(layout.x_desc)
        .y_desc(layout.y_desc)
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.8).filled())
                .margin(2)
                .data(bars.iter().enumerate().map(|(i, b)| (i, b.count))),
        )
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    tracing::info!(path = %path.display(), bars = bars.len(), "rendered histogram chart");
    Ok(())
}

fn render_error<E: std::fmt::Display>(err: E) -> OrghistError {
    OrghistError::Render(err.to_string())
}
