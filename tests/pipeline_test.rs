//! 解析パイプラインの統合テスト
//!
//! 決定的なスタブクライアントで行数・順序・縮退動作・出力の再現性を検証

use async_trait::async_trait;
use resume_match::analyzer::{analyze_resume, AnalyzeOptions};
use resume_match::client::{ApiError, CompletionClient};
use resume_match::export::csv::write_csv;
use resume_match_common::{
    default_fields, FieldRecord, MatchScore, FAILURE_SENTINEL, SCORE_LABEL, SCORING_RUBRIC,
    SUMMARY_LABEL,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::tempdir;

/// プロンプトの種類で返答を切り替えるスタブ
struct StubClient {
    field_reply: &'static str,
    fail_label: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubClient {
    fn new(field_reply: &'static str) -> Self {
        Self {
            field_reply,
            fail_label: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing_on(field_reply: &'static str, label: &'static str) -> Self {
        Self {
            fail_label: Some(label),
            ..Self::new(field_reply)
        }
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if prompt.contains(SCORING_RUBRIC) {
            return Ok("<stub score>".to_string());
        }
        if prompt.starts_with("职位要求") {
            return Ok("<stub summary>".to_string());
        }
        if let Some(label) = self.fail_label {
            if prompt.contains(&format!("\"{}\"", label)) {
                return Err(ApiError::Api {
                    status: 500,
                    message: "internal error".into(),
                });
            }
        }
        Ok(self.field_reply.to_string())
    }
}

fn quiet(concurrency: usize) -> AnalyzeOptions {
    AnalyzeOptions {
        concurrency,
        show_progress: false,
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_stub_not_provided_example() {
    let client = StubClient::new("not provided");
    let fields = labels(&["name", "years_experience"]);

    let report = analyze_resume(&client, "JD", "resume", &fields, quiet(1)).await;

    assert_eq!(
        report.table.rows(),
        &[
            FieldRecord::new("name", "not provided"),
            FieldRecord::new("years_experience", "not provided"),
            FieldRecord::new(SUMMARY_LABEL, "<stub summary>"),
            FieldRecord::new(SCORE_LABEL, "<stub score>"),
        ]
    );
    assert_eq!(report.failed_calls, 0);
    assert!(matches!(report.score, MatchScore::Unparsed(_)));
    assert_eq!(client.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_table_length_is_fields_plus_two() {
    let client = StubClient::new("未提供");
    let fields = default_fields();

    let report = analyze_resume(&client, "JD", "resume", &fields, quiet(1)).await;

    assert_eq!(report.table.len(), fields.len() + 2);
    for (record, label) in report.table.rows().iter().zip(&fields) {
        assert_eq!(&record.label, label);
    }
    let rows = report.table.rows();
    assert_eq!(rows[rows.len() - 2].label, SUMMARY_LABEL);
    assert_eq!(rows[rows.len() - 1].label, SCORE_LABEL);
    assert_eq!(client.calls.load(Ordering::SeqCst), fields.len() + 2);
}

#[tokio::test]
async fn test_failed_field_keeps_sentinel_and_trailing_rows() {
    let client = StubClient::failing_on("ok", "年龄");
    let fields = labels(&["姓名", "年龄", "性别"]);

    let report = analyze_resume(&client, "JD", "resume", &fields, quiet(1)).await;

    assert_eq!(report.table.value_of("年龄"), Some(FAILURE_SENTINEL));
    assert_eq!(report.table.value_of("姓名"), Some("ok"));
    assert_eq!(report.table.summary(), Some("<stub summary>"));
    assert_eq!(report.table.score(), Some("<stub score>"));
    assert_eq!(report.failed_calls, 1);
}

#[tokio::test]
async fn test_identical_runs_write_identical_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let fields = default_fields();

    let mut outputs = Vec::new();
    for run in 0..2 {
        let client = StubClient::new("未提供");
        let report = analyze_resume(&client, "JD", "resume", &fields, quiet(1)).await;
        let path = dir.path().join(format!("run{}.csv", run));
        write_csv(&report.table, &path).expect("CSV保存失敗");
        outputs.push(std::fs::read(&path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

/// 項目ごとに遅延を変え、完了順が入力順と逆になるスタブ
struct SlowFirstClient;

#[async_trait]
impl CompletionClient for SlowFirstClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let delay = if prompt.contains("\"a\"") {
            30
        } else if prompt.contains("\"b\"") {
            15
        } else {
            0
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;

        let label = ["a", "b", "c"]
            .into_iter()
            .find(|l| prompt.contains(&format!("\"{}\"", l)))
            .unwrap_or("other");
        Ok(format!("value-{}", label))
    }
}

#[tokio::test]
async fn test_concurrent_extraction_preserves_order() {
    let fields = labels(&["a", "b", "c"]);

    let report = analyze_resume(&SlowFirstClient, "JD", "resume", &fields, quiet(3)).await;

    let values: Vec<&str> = report.table.rows()[..3]
        .iter()
        .map(|r| r.value.as_str())
        .collect();
    assert_eq!(values, vec!["value-a", "value-b", "value-c"]);
    assert_eq!(report.table.len(), 5);
}
