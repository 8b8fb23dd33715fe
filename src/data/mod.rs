/// Data layer: listing types, catalog loading, and query filtering.
///
/// Architecture:
/// ```text
///   Used_Bikes.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file once → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<Listing>, brand → models index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply Query predicates → matching rows
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
