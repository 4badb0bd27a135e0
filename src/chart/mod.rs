//! Chart layer: turns a yearly subset into a PNG bar chart on disk.

mod render;

pub use render::{render_year_chart, CHART_HEIGHT, CHART_WIDTH};
