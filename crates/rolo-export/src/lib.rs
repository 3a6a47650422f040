//! Spreadsheet export for contact sets.
//!
//! Pure formatting transforms — no I/O, no network, no mutation.

mod csv;

pub use csv::{render_csv, render_csv_with_created};
