//! マッチング得点の解釈
//!
//! 得点行はモデルの自由記述なので、数値として使えるかを判定する。
//! テーブル上の値は書き換えない。

use crate::prompts::FAILURE_SENTINEL;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// 得点の上限
pub const MAX_SCORE: f64 = 100.0;

/// 得点行の解釈結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MatchScore {
    /// 0-100 の数値
    Numeric(f64),
    /// 数値だが範囲外
    OutOfRange(f64),
    /// 数値を特定できない（数値なし・複数の異なる数値）
    Unparsed(String),
    /// API呼び出し失敗
    Failed,
}

impl MatchScore {
    /// 得点行の値を解釈
    ///
    /// 返答に含まれる数値が1種類だけなら採用する（"82分"、"得分：82" 等）。
    /// 全角数字は半角に揃えてから判定する。
    pub fn parse(reply: &str) -> Self {
        lazy_static! {
            static ref NUMBER_RE: Regex = Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").unwrap();
        }

        let reply = reply.trim();
        if reply == FAILURE_SENTINEL {
            return MatchScore::Failed;
        }

        let normalized = to_half_width(reply);
        let mut values: Vec<f64> = NUMBER_RE
            .find_iter(&normalized)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();

        match values.as_slice() {
            [value] if (0.0..=MAX_SCORE).contains(value) => MatchScore::Numeric(*value),
            [value] => MatchScore::OutOfRange(*value),
            _ => MatchScore::Unparsed(reply.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, MatchScore::Numeric(_))
    }
}

/// 全角の数字・小数点・マイナスを半角に変換
fn to_half_width(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            '．' => '.',
            '－' => '-',
            _ => c,
        })
        .collect()
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchScore::Numeric(v) => write!(f, "{}", v),
            MatchScore::OutOfRange(v) => write!(f, "{} (範囲外)", v),
            MatchScore::Unparsed(raw) => write!(f, "解釈不能: {}", raw),
            MatchScore::Failed => write!(f, "取得失敗"),
        }
    }
}
