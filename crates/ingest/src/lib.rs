//! Table loading and export for the four campaign CSV files.

pub mod export;
pub mod loader;

pub use export::export_tracking;
pub use loader::{load_dataset, load_table, DataSources};
