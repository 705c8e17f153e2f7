//! Export core modules shared across front ends.

pub mod csv_core;

#[cfg(feature = "excel")]
pub mod excel_core;

pub use csv_core::{generate_csv_buffer, UTF8_BOM};
