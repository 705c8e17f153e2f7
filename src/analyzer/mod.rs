//! 简历解析パイプライン
//!
//! 項目抽出（N回）→ マッチング概要（1回）→ 得点（1回）の順に実行する。
//! 概要行を追加してから得点を依頼すること（得点プロンプトは概要込みのテーブルを使う）。

use crate::client::{complete_or_sentinel, CompletionClient};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use resume_match_common::{
    build_field_prompt, build_score_prompt, build_summary_prompt, FieldRecord, MatchScore,
    ReportTable, SCORE_LABEL, SUMMARY_LABEL,
};
use tracing::info;

/// パイプラインのオプション
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    /// 項目抽出の同時実行数（1で逐次）
    pub concurrency: usize,
    /// 進捗表示
    pub show_progress: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            concurrency: 1,
            show_progress: true,
        }
    }
}

/// 1回分の解析結果
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub table: ReportTable,
    /// FAILURE_SENTINEL に置き換えた呼び出しの数
    pub failed_calls: usize,
    pub score: MatchScore,
}

impl AnalysisReport {
    /// 得点行の生の値
    pub fn raw_score(&self) -> &str {
        self.table.score().unwrap_or_default()
    }
}

/// 項目抽出
///
/// 項目ごとに1回呼び出し、入力順のまま FieldRecord を返す。
/// 戻り値の2つ目は失敗した呼び出し数。
pub async fn extract_fields<C>(
    client: &C,
    fields: &[String],
    resume: &str,
    concurrency: usize,
    progress: &ProgressBar,
) -> (Vec<FieldRecord>, usize)
where
    C: CompletionClient + ?Sized,
{
    let results: Vec<(FieldRecord, bool)> = stream::iter(fields.iter())
        .map(|label| async move {
            progress.set_message(label.clone());
            let prompt = build_field_prompt(label, resume);
            let completion = complete_or_sentinel(client, &prompt).await;
            progress.inc(1);
            (FieldRecord::new(label.as_str(), completion.text), completion.failed)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let failed = results.iter().filter(|(_, failed)| *failed).count();
    let records = results.into_iter().map(|(record, _)| record).collect();
    (records, failed)
}

/// マッチング概要を追加。失敗したら true
pub async fn append_summary<C>(client: &C, job_description: &str, table: &mut ReportTable) -> bool
where
    C: CompletionClient + ?Sized,
{
    let prompt = build_summary_prompt(job_description, &table.to_text());
    let completion = complete_or_sentinel(client, &prompt).await;
    table.push(SUMMARY_LABEL, completion.text);
    completion.failed
}

/// マッチング得点を追加。失敗したら true
pub async fn append_score<C>(client: &C, job_description: &str, table: &mut ReportTable) -> bool
where
    C: CompletionClient + ?Sized,
{
    let prompt = build_score_prompt(job_description, &table.to_text());
    let completion = complete_or_sentinel(client, &prompt).await;
    table.push(SCORE_LABEL, completion.text);
    completion.failed
}

/// 全段階を実行
pub async fn analyze_resume<C>(
    client: &C,
    job_description: &str,
    resume: &str,
    fields: &[String],
    options: AnalyzeOptions,
) -> AnalysisReport
where
    C: CompletionClient + ?Sized,
{
    let progress = new_progress_bar(fields.len() as u64, options.show_progress);

    let (records, mut failed_calls) =
        extract_fields(client, fields, resume, options.concurrency, &progress).await;
    progress.finish_and_clear();
    info!(fields = records.len(), failed = failed_calls, "extraction finished");

    let mut table = ReportTable::from_records(records);
    if options.show_progress {
        println!("✔ {}項目を抽出\n", table.len());
        println!("[3/4] 综合匹配度分析中...");
    }
    if append_summary(client, job_description, &mut table).await {
        failed_calls += 1;
    }

    if options.show_progress {
        println!("[4/4] 匹配得分計算中...");
    }
    if append_score(client, job_description, &mut table).await {
        failed_calls += 1;
    }

    let score = MatchScore::parse(table.score().unwrap_or_default());
    info!(score = %score, failed = failed_calls, "analysis finished");

    AnalysisReport {
        table,
        failed_calls,
        score,
    }
}

fn new_progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len);
    let style = ProgressStyle::with_template("  信息提取中 [{bar:30}] {pos}/{len}项 {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiError;
    use async_trait::async_trait;
    use resume_match_common::FAILURE_SENTINEL;
    use std::sync::Mutex;

    /// 受け取ったプロンプトを記録し、呼び出し回数に応じた返答を返す
    struct Recording {
        prompts: Mutex<Vec<String>>,
        fail_on: Option<usize>,
    }

    impl Recording {
        fn new(fail_on: Option<usize>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                fail_on,
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionClient for Recording {
        async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
            let mut prompts = self.prompts.lock().unwrap();
            let n = prompts.len();
            prompts.push(prompt.to_string());
            if self.fail_on == Some(n) {
                return Err(ApiError::EmptyContent);
            }
            Ok(format!("reply-{}", n))
        }
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn quiet() -> AnalyzeOptions {
        AnalyzeOptions {
            concurrency: 1,
            show_progress: false,
        }
    }

    #[tokio::test]
    async fn test_extract_fields_in_order() {
        let client = Recording::new(None);
        let fields = labels(&["姓名", "年龄", "性别"]);
        let (records, failed) =
            extract_fields(&client, &fields, "简历", 1, &ProgressBar::hidden()).await;

        assert_eq!(failed, 0);
        assert_eq!(
            records,
            vec![
                FieldRecord::new("姓名", "reply-0"),
                FieldRecord::new("年龄", "reply-1"),
                FieldRecord::new("性别", "reply-2"),
            ]
        );
        let prompts = client.prompts();
        assert!(prompts[0].contains("\"姓名\""));
        assert!(prompts[2].contains("\"性别\""));
    }

    #[tokio::test]
    async fn test_score_prompt_sees_summary_row() {
        let client = Recording::new(None);
        let report = analyze_resume(&client, "JD文本", "简历", &labels(&["姓名"]), quiet()).await;

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 3);
        // 概要プロンプトには概要行がまだない
        assert!(!prompts[1].contains(SUMMARY_LABEL));
        assert!(prompts[1].contains("reply-0"));
        // 得点プロンプトには概要行が含まれる
        assert!(prompts[2].contains(SUMMARY_LABEL));
        assert!(prompts[2].contains("reply-1"));
        assert!(prompts[2].contains("职位要求：JD文本"));

        assert_eq!(report.raw_score(), "reply-2");
        assert_eq!(report.score, MatchScore::Numeric(2.0));
    }

    #[tokio::test]
    async fn test_failed_field_becomes_sentinel_and_pipeline_completes() {
        let client = Recording::new(Some(1));
        let report =
            analyze_resume(&client, "JD", "简历", &labels(&["姓名", "年龄", "性别"]), quiet()).await;

        assert_eq!(report.table.len(), 5);
        assert_eq!(report.table.rows()[1].value, FAILURE_SENTINEL);
        assert_eq!(report.table.rows()[3].label, SUMMARY_LABEL);
        assert_eq!(report.table.rows()[4].label, SCORE_LABEL);
        assert_eq!(report.failed_calls, 1);
    }

    #[tokio::test]
    async fn test_failed_score_call() {
        // 呼び出し順: 0=姓名, 1=概要, 2=得点
        let client = Recording::new(Some(2));
        let report = analyze_resume(&client, "JD", "简历", &labels(&["姓名"]), quiet()).await;

        assert_eq!(report.raw_score(), FAILURE_SENTINEL);
        assert_eq!(report.score, MatchScore::Failed);
        assert_eq!(report.failed_calls, 1);
    }
}
