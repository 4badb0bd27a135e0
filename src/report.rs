use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::chart;
use crate::color::ColorMap;
use crate::data::{filter, loader};
use crate::error::ReportError;

// ---------------------------------------------------------------------------
// Report generator
// ---------------------------------------------------------------------------

/// Generates one bar chart PNG per target year from a CSV source.
///
/// The output directory is held explicitly rather than relying on any
/// process-global drawing state; each chart render gets its own canvas.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    /// A generator that writes its charts into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ReportGenerator {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the chart image for a given year.
    pub fn output_path(&self, year: i32) -> PathBuf {
        self.output_dir.join(format!("rentals_{year}.png"))
    }

    /// Load the dataset once, then render and save one chart per year, in
    /// order. Each saved chart is announced on stdout.
    ///
    /// The first failure aborts the remaining years; files already written
    /// stay in place. A missing source file is distinguished from every
    /// other failure, and in that case no output is produced at all.
    pub fn generate(&self, file_path: &Path, years: &[i32]) -> Result<(), ReportError> {
        let dataset = loader::load_csv(file_path)?;
        debug!(
            "dataset: {} rows, years present: {:?}",
            dataset.len(),
            dataset.years
        );

        // One colour per distinct category across the whole dataset, so a
        // category keeps its colour in every year's chart.
        let colors =
            ColorMap::from_categories(dataset.records.iter().map(|r| r.category_name.as_str()));

        for &year in years {
            let subset = filter::rows_for_year(&dataset, year);
            info!("year {year}: {} matching rows", subset.len());

            let output_path = self.output_path(year);
            chart::render_year_chart(&subset, year, &colors, &output_path)?;

            println!(
                "Chart for {year} successfully saved to {}",
                output_path.display()
            );
        }

        Ok(())
    }
}
