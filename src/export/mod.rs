pub mod csv;
pub mod excel;

use crate::analyzer::AnalysisReport;
use crate::cli::ExportFormat;
use crate::error::Result;
use resume_match_common::MatchScore;
use std::path::{Path, PathBuf};

/// デフォルトの出力ファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "resume_analysis_result.csv";

fn with_extension(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_OUTPUT_FILE).with_extension(extension)
    } else {
        output.with_extension(extension)
    }
}

/// 分析結果をファイルに保存（既存ファイルは上書き）
pub fn export_report(
    report: &AnalysisReport,
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let csv_path = with_extension(output, "csv");
        csv::write_csv(&report.table, &csv_path)?;
        written.push(csv_path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let excel_path = with_extension(output, "xlsx");
        excel::write_excel(&report.table, &excel_path)?;
        written.push(excel_path);
    }

    Ok(written)
}

/// 結果をコンソールに表示
pub fn print_report(report: &AnalysisReport) {
    println!("\n===== 分析结果 =====");
    println!("综合匹配得分：{}", report.raw_score());

    if let Some(warning) = score_warning(&report.score) {
        println!("{}", warning);
    }

    if report.failed_calls > 0 {
        println!("⚠ {}件のAPI呼び出しが失敗しました（値: 获取信息失败）", report.failed_calls);
    }

    println!("\n详细信息：");
    println!("{}", report.table.to_text());
}

/// 得点が数値として使えない場合の警告文
fn score_warning(score: &MatchScore) -> Option<String> {
    if score.is_numeric() {
        return None;
    }
    match score {
        MatchScore::Failed => Some("⚠ 得点を取得できませんでした".to_string()),
        other => Some(format!("⚠ 得点を数値として解釈できません ({})", other)),
    }
}
