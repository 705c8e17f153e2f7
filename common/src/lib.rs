//! Resume Match Common Library
//!
//! 简历解析CLIと将来のフロントエンドで共有される型とユーティリティ

pub mod types;
pub mod prompts;
pub mod fields;
pub mod score;
pub mod error;
pub mod export;

pub use types::{FieldRecord, ReportTable, SCORE_LABEL, SUMMARY_LABEL};
pub use prompts::{
    build_field_prompt, build_score_prompt, build_summary_prompt,
    DEFAULT_FIELDS, FAILURE_SENTINEL, NOT_PROVIDED, SCORING_RUBRIC, SYSTEM_PERSONA,
};
pub use fields::{default_fields, parse_field_list};
pub use score::MatchScore;
pub use error::{Error, Result};
