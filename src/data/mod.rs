/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  csv/pendulum_<method>_<scenario>.csv   (up to six files)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SampleTable (or "no data" when missing)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ CombinedDataset │  row-union of all tables, method order index
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  select by method / scenario → plot series
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
