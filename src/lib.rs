//! Batch generator of per-year film rental bar charts.
//!
//! Reads a CSV of per-category rental counts, filters it once per target
//! year, and writes one `rentals_<year>.png` bar chart per year. The whole
//! pipeline is synchronous: load → filter → render → save.

pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod report;

pub use error::ReportError;
pub use report::ReportGenerator;
