//! 抽出項目リストの読み込み
//!
//! 受け付ける形式:
//! - JSON文字列配列: `["姓名", "年龄"]`
//! - 1行1項目のテキスト（空行と `#` 始まりの行は無視）

use crate::error::{Error, Result};
use crate::prompts::DEFAULT_FIELDS;

/// 組み込みの項目リスト
pub fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|s| s.to_string()).collect()
}

/// 項目リストをパース
///
/// 順序はそのまま保持する。重複は除去しない。
pub fn parse_field_list(content: &str) -> Result<Vec<String>> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();

    let fields: Vec<String> = if trimmed.starts_with('[') {
        let raw: Vec<String> = serde_json::from_str(trimmed)?;
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    } else {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect()
    };

    if fields.is_empty() {
        return Err(Error::Config("抽出項目が1つもありません".into()));
    }

    Ok(fields)
}
