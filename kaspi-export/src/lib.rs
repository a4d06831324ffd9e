//! kaspi-export: CSV export of parsed statement transactions

pub mod csv_export;

pub use csv_export::{ExportRecord, default_output_path, export_csv, write_csv};
