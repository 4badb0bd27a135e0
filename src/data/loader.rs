use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use log::debug;

use super::model::{RentalDataset, RentalRecord};
use crate::error::ReportError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the rental dataset from a CSV file.
///
/// Expected layout: a header row naming at least `rental_year`,
/// `category_name` and `number_of_rentals`; columns are looked up by name,
/// so header order does not matter. Extra columns are ignored.
///
/// A path that does not resolve to a readable file is reported as
/// [`ReportError::SourceNotFound`]; every other problem (missing column,
/// unparseable cell, I/O error mid-read) becomes a generic failure carrying
/// the underlying message.
pub fn load_csv(path: &Path) -> Result<RentalDataset, ReportError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ReportError::SourceNotFound(path.to_path_buf())
        } else {
            ReportError::Failure(
                anyhow::Error::new(e)
                    .context(format!("opening {}", path.display())),
            )
        }
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RentalRecord>().enumerate() {
        let record = result
            .with_context(|| format!("CSV row {row_no} of {}", path.display()))?;
        records.push(record);
    }

    debug!(
        "loaded {} rows from {}",
        records.len(),
        path.display()
    );

    Ok(RentalDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_in_source_order() {
        let file = write_csv(
            "rental_year,category_name,number_of_rentals\n\
             2005,Action,1112\n\
             2005,Animation,1166\n\
             2006,Action,154\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].category_name, "Action");
        assert_eq!(ds.records[1].category_name, "Animation");
        assert_eq!(ds.records[1].number_of_rentals, 1166);
        assert_eq!(ds.records[2].rental_year, 2006);
    }

    #[test]
    fn header_order_does_not_matter() {
        let file = write_csv(
            "number_of_rentals,rental_year,category_name\n\
             42,2005,Comedy\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].rental_year, 2005);
        assert_eq!(ds.records[0].category_name, "Comedy");
        assert_eq!(ds.records[0].number_of_rentals, 42);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv(
            "rental_year,category_name,number_of_rentals,store_id\n\
             2006,Drama,7,3\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].category_name, "Drama");
    }

    #[test]
    fn missing_file_is_reported_distinctly() {
        let err = load_csv(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ReportError::SourceNotFound(_)));
    }

    #[test]
    fn missing_column_is_a_generic_failure() {
        let file = write_csv(
            "rental_year,number_of_rentals\n\
             2005,10\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Failure(_)));
    }

    #[test]
    fn negative_count_is_rejected() {
        let file = write_csv(
            "rental_year,category_name,number_of_rentals\n\
             2005,Action,-3\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Failure(_)));
    }

    #[test]
    fn duplicate_categories_are_preserved() {
        let file = write_csv(
            "rental_year,category_name,number_of_rentals\n\
             2005,Action,10\n\
             2005,Action,20\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].number_of_rentals, 10);
        assert_eq!(ds.records[1].number_of_rentals, 20);
    }
}
