use std::path::Path;

use rental_report::{ReportError, ReportGenerator};

/// Fixed input file, resolved against the working directory.
const SOURCE_FILE: &str = "per_year.csv";
/// The two years this report covers.
const TARGET_YEARS: [i32; 2] = [2005, 2006];

fn main() {
    env_logger::init();

    let generator = ReportGenerator::new(".");
    match generator.generate(Path::new(SOURCE_FILE), &TARGET_YEARS) {
        Ok(()) => {}
        Err(ReportError::SourceNotFound(path)) => {
            eprintln!("Error: The file '{}' was not found.", path.display());
        }
        Err(ReportError::Failure(err)) => {
            eprintln!("An error occurred: {err:#}");
        }
    }
    // The error is reported, not propagated: the process exits normally
    // either way, matching the report's batch contract.
}
