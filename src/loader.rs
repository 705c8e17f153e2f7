//! 入力文書（職位説明・简历）の読み込み

use crate::error::{ResumeMatchError, Result};
use std::path::Path;

/// テキストファイルを読み込む（UTF-8前提、先頭BOMは除去）
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ResumeMatchError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ResumeMatchError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content.trim_start_matches('\u{feff}').to_string())
}
