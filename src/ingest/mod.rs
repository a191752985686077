/// Data ingestion for the water quality monitoring service.
///
/// Submodules:
/// - `sheet` — historical snapshot retrieval from the spreadsheet CSV
///   export, including header normalization.

pub mod sheet;
