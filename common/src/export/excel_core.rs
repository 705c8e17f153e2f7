//! Excel生成（共通ライブラリ）
//!
//! 1シート2列（項目・内容）の分析結果表を生成

use crate::error::{Error, Result};
use crate::types::{ReportTable, HEADER};
use rust_xlsxwriter::*;

/// シート名
pub const SHEET_NAME: &str = "匹配分析";

const LABEL_COL_WIDTH: f64 = 22.0;
const VALUE_COL_WIDTH: f64 = 80.0;

/// Excelをバッファに生成
pub fn generate_excel_buffer(table: &ReportTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let label_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| Error::Excel(format!("シート名設定エラー: {}", e)))?;
    worksheet
        .set_column_width(0, LABEL_COL_WIDTH)
        .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
    worksheet
        .set_column_width(1, VALUE_COL_WIDTH)
        .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;

    for (col, title) in HEADER.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(|e| Error::Excel(format!("ヘッダ書き込みエラー: {}", e)))?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let excel_row = (i + 1) as u32;
        worksheet
            .write_string_with_format(excel_row, 0, &row.label, &label_format)
            .map_err(|e| Error::Excel(format!("ラベル書き込みエラー: {}", e)))?;
        worksheet
            .write_string_with_format(excel_row, 1, &row.value, &value_format)
            .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("Excel保存エラー: {}", e)))
}
