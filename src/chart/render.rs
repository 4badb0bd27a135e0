use std::path::Path;

use anyhow::{anyhow, Result};
use log::debug;
use plotters::prelude::*;

use crate::color::ColorMap;
use crate::data::model::RentalRecord;

/// Canvas width in pixels.
pub const CHART_WIDTH: u32 = 1200;
/// Canvas height in pixels.
pub const CHART_HEIGHT: u32 = 700;

// ---------------------------------------------------------------------------
// Bar chart rendering
// ---------------------------------------------------------------------------

/// Render one year's subset as a categorical bar chart and save it as a PNG,
/// overwriting any existing file at `output_path`.
///
/// One bar per subset row, in subset order; duplicate categories produce
/// duplicate bars. An empty subset still produces a chart with axes and
/// title but no bars.
pub fn render_year_chart(
    rows: &[&RentalRecord],
    year: i32,
    colors: &ColorMap,
    output_path: &Path,
) -> Result<()> {
    let n_bars = rows.len();
    debug!("rendering {n_bars} bars for {year} into {}", output_path.display());

    let root =
        BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("filling chart background: {e}"))?;

    // The x axis is segmented per bar; keep at least one segment so an empty
    // subset still yields a drawable coordinate range.
    let n_segments = n_bars.max(1) as i32;
    let max_count = rows
        .iter()
        .map(|r| r.number_of_rentals)
        .max()
        .unwrap_or(0)
        .max(1);
    // 5% headroom so the tallest bar does not touch the frame.
    let y_top = max_count + (max_count / 20).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Number of Film Rentals by Category in {year}"),
            ("sans-serif", 32),
        )
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(70)
        .build_cartesian_2d((0..n_segments).into_segmented(), 0u64..y_top)
        .map_err(|e| anyhow!("building chart axes: {e}"))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Film Category")
        .y_desc("Number of Rentals")
        .axis_desc_style(("sans-serif", 20))
        .x_labels(n_bars.max(1))
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|value: &SegmentValue<i32>| {
            let idx = match value {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i,
                SegmentValue::Last => return String::new(),
            };
            rows.get(idx as usize)
                .map(|r| r.category_name.clone())
                .unwrap_or_default()
        })
        .y_label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| anyhow!("drawing chart mesh: {e}"))?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            let i = i as i32;
            let style = colors.color_for(&row.category_name).filled();
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0u64),
                    (SegmentValue::Exact(i + 1), row.number_of_rentals),
                ],
                style,
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(|e| anyhow!("drawing bars: {e}"))?;

    root.present()
        .map_err(|e| anyhow!("saving chart to {}: {e}", output_path.display()))?;

    Ok(())
}
