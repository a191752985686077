//! Water quality trend-prediction and classification service.
//!
//! The engine (`analysis`, `report`) is a pure function of a live sensor
//! reading and a historical snapshot; the adapter modules (`ingest::sheet`,
//! `sync`) do the bounded-timeout I/O against the external spreadsheet
//! store before the engine runs.

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod parameters;
pub mod report;
pub mod sync;
