//! 分析結果の型定義
//!
//! - FieldRecord: 1項目分の (ラベル, 値) ペア
//! - ReportTable: 1回の実行で作られる FieldRecord の順序付き列

use serde::{Deserialize, Serialize};

/// 概要行のラベル（抽出項目の後ろに追加）
pub const SUMMARY_LABEL: &str = "综合概要";

/// 得点行のラベル（概要行の後ろに追加）
pub const SCORE_LABEL: &str = "匹配得分";

/// テーブルのヘッダ（CSV・テキスト表示共通）
pub const HEADER: [&str; 2] = ["option", "value"];

/// 抽出結果 1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "option")]
    pub label: String,
    pub value: String,
}

impl FieldRecord {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// レポートテーブル
///
/// 挿入順がそのまま出力順になる。ラベルの重複チェックは行わない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportTable {
    rows: Vec<FieldRecord>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(rows: Vec<FieldRecord>) -> Self {
        Self { rows }
    }

    /// 末尾に1行追加
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(FieldRecord::new(label, value));
    }

    pub fn rows(&self) -> &[FieldRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// ラベルで最初に一致した行の値
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    pub fn summary(&self) -> Option<&str> {
        self.value_of(SUMMARY_LABEL)
    }

    pub fn score(&self) -> Option<&str> {
        self.value_of(SCORE_LABEL)
    }

    /// 2列のテキスト表に変換
    ///
    /// プロンプト埋め込みとコンソール表示の両方で使う。
    /// ラベル列は最長ラベルの表示幅に揃え、値の改行はスペースに畳む。
    pub fn to_text(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|r| display_width(&r.label))
            .chain(std::iter::once(display_width(HEADER[0])))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format!("{}  {}", pad(HEADER[0], label_width), HEADER[1]));
        for row in &self.rows {
            lines.push(format!(
                "{}  {}",
                pad(&row.label, label_width),
                fold_lines(&row.value)
            ));
        }
        lines.join("\n")
    }
}

impl<'a> IntoIterator for &'a ReportTable {
    type Item = &'a FieldRecord;
    type IntoIter = std::slice::Iter<'a, FieldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// 端末上の表示幅（全角文字は2）
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| if (c as u32) >= 0x2E80 { 2 } else { 1 })
        .sum()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

fn fold_lines(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
