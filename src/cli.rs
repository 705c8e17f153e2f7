use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(about = "简历信息抽出・職位マッチング分析ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 简历を解析して職位とのマッチング結果を出力
    Analyze {
        /// 職位説明(JD)ファイル（省略時は対話入力）
        #[arg(long)]
        jd: Option<PathBuf>,

        /// 简历ファイル（省略時は対話入力）
        #[arg(long)]
        resume: Option<PathBuf>,

        /// 出力ファイル（拡張子は出力形式に合わせて .csv / .xlsx に置き換える）
        #[arg(short, long, default_value = crate::export::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// 出力形式 (csv/excel/both)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// 抽出項目リスト（JSON配列 or 1行1項目）
        #[arg(long)]
        fields: Option<PathBuf>,

        /// 項目抽出の同時実行数
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=16))]
        concurrency: u16,
    },

    /// 組み込みの抽出項目を表示
    Fields,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
