use super::model::{RentalDataset, RentalRecord};

// ---------------------------------------------------------------------------
// Per-year subset selection
// ---------------------------------------------------------------------------

/// Return the rows whose `rental_year` equals `year`, in source order.
///
/// Exact match only; an empty result is valid and simply yields an empty
/// chart downstream. Duplicate categories within a year are kept as-is
/// (they become duplicate bars, not a summed one).
pub fn rows_for_year(dataset: &RentalDataset, year: i32) -> Vec<&RentalRecord> {
    dataset
        .records
        .iter()
        .filter(|r| r.rental_year == year)
        .collect()
}
