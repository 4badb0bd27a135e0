//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!      .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → RentalDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ RentalDataset  │  Vec<RentalRecord>, year index
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  select rows for one year → subset
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
