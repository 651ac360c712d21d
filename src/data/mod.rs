/// Data layer: point types and file loading.
///
/// Architecture:
/// ```text
///  points.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → PointDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PointDataset │  Vec<Point>, source row order
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
