//! CSV生成（共通ライブラリ）
//!
//! 表計算ソフトが文字コードを自動判定できるよう、先頭にBOMを付けたUTF-8で出力する。

use crate::error::Result;
use crate::types::{ReportTable, HEADER};

/// UTF-8 BOM
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSVをバッファに生成
///
/// ヘッダ `option,value` + 1行1レコード。改行はLFで固定。
pub fn generate_csv_buffer(table: &ReportTable) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();

    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        writer.write_record(HEADER)?;
        for row in table {
            writer.write_record([row.label.as_str(), row.value.as_str()])?;
        }
        writer.flush()?;
    }

    Ok(buffer)
}
