use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// RentalRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation: how many rentals one film category had in one year.
///
/// Field names match the CSV headers so `csv` + serde can deserialize rows
/// by header name regardless of column order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RentalRecord {
    pub rental_year: i32,
    pub category_name: String,
    /// Non-negative by construction; a negative value in the source fails
    /// deserialization.
    pub number_of_rentals: u64,
}

// ---------------------------------------------------------------------------
// RentalDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once, immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct RentalDataset {
    /// All rows, in source order.
    pub records: Vec<RentalRecord>,
    /// Sorted set of distinct years present in the data.
    pub years: BTreeSet<i32>,
}

impl RentalDataset {
    /// Build the year index from the loaded rows.
    pub fn from_records(records: Vec<RentalRecord>) -> Self {
        let years = records.iter().map(|r| r.rental_year).collect();
        RentalDataset { records, years }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
