//! CSV出力（CLI版）

use crate::error::Result;
use resume_match_common::export::generate_csv_buffer;
use resume_match_common::ReportTable;
use std::path::Path;

pub fn write_csv(table: &ReportTable, output_path: &Path) -> Result<()> {
    let buffer = generate_csv_buffer(table)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
