//! プロンプト生成モジュール
//!
//! 3種類のプロンプトを生成する:
//! - build_field_prompt: 項目抽出（简历から1項目）
//! - build_summary_prompt: 職位とのマッチング概要
//! - build_score_prompt: 採点基準つきのマッチング得点
//!
//! 埋め込む文書はエスケープせずそのまま挿入する。

/// システムプロンプト（招聘分析師ペルソナ）
pub const SYSTEM_PERSONA: &str =
    "你是一个专业的招聘分析师，擅长从简历中提取关键信息并评估与职位的匹配度。";

/// 項目が見つからない場合にモデルへ返させる値
pub const NOT_PROVIDED: &str = "未提供";

/// API呼び出し失敗時に代入する値
pub const FAILURE_SENTINEL: &str = "获取信息失败";

/// 項目抽出の回答上限（文字数）
pub const FIELD_ANSWER_LIMIT: usize = 250;

/// 概要の回答上限（文字数）
pub const SUMMARY_ANSWER_LIMIT: usize = 200;

/// 採点基準
pub const SCORING_RUBRIC: &str = "国内top10大学+3分，985大学+2分，211大学+1分，头部企业经历+2分，知名企业+1分，海外背景+3分，外企背景+1分。";

/// デフォルトの抽出項目（この順で抽出・出力）
pub const DEFAULT_FIELDS: &[&str] = &[
    "姓名",
    "联系号码",
    "性别",
    "年龄",
    "工作年数（数字）",
    "最高学历",
    "本科学校名称",
    "硕士学校名称",
    "是否在职",
    "当前职务",
    "历史任职公司列表",
    "技术能力",
    "经验程度",
    "管理能力",
];

/// 項目抽出プロンプト
///
/// # Arguments
/// * `label` - 抽出する項目名
/// * `resume` - 简历本文
pub fn build_field_prompt(label: &str, resume: &str) -> String {
    format!(
        r#"请从以下简历中提取"{label}"信息：
简历内容：{resume}
要求：精简返回答案，最多不超过{FIELD_ANSWER_LIMIT}字，如果查找不到，则返回'{NOT_PROVIDED}'"#
    )
}

/// マッチング概要プロンプト
///
/// # Arguments
/// * `job_description` - 職位説明（JD）本文
/// * `table_text` - ここまでの抽出結果（ReportTable::to_text）
pub fn build_summary_prompt(job_description: &str, table_text: &str) -> String {
    format!(
        r#"职位要求：{job_description}
简历概要：{table_text}
请基于以上信息，返回该候选人与应聘岗位的匹配度概要（控制在{SUMMARY_ANSWER_LIMIT}字以内）。"#
    )
}

/// マッチング得点プロンプト
///
/// `table_text` は概要行を追加した後のテーブルであること。
pub fn build_score_prompt(job_description: &str, table_text: &str) -> String {
    format!(
        r#"职位要求：{job_description}
简历概要：{table_text}
打分要求：{SCORING_RUBRIC}
请基于以上信息和打分要求，返回该候选人的匹配分数（0-100），只需返回数字分数，不需要其他内容，以便与其他候选人对比排序。"#
    )
}
