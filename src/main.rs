use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use resume_match::analyzer::{self, AnalyzeOptions};
use resume_match::cli::{Cli, Commands};
use resume_match::client::OpenAiClient;
use resume_match::config::Config;
use resume_match::error::ResumeMatchError;
use resume_match::{export, loader};
use resume_match_common::{default_fields, parse_field_list};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("✖ {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze { jd, resume, output, format, fields, concurrency } => {
            println!("📄 resume-match - 简历匹配度分析\n");

            // APIキーは文書を読む前に確認
            let config = Config::load()?;
            let api_key = config.get_api_key()?;

            let fields = match fields {
                Some(path) => {
                    let content = loader::read_document(&path)
                        .with_context(|| format!("抽出項目リストを読み込めません: {}", path.display()))?;
                    parse_field_list(&content)?
                }
                None => default_fields(),
            };

            let jd_path = match jd {
                Some(path) => path,
                None => prompt_path("请输入职位描述(JD)文件路径")?,
            };
            let resume_path = match resume {
                Some(path) => path,
                None => prompt_path("请输入简历文件路径")?,
            };

            // 1. 読み込み
            println!("[1/4] 文書を読み込み中...");
            let jd_text = loader::read_document(&jd_path).context("職位説明(JD)を読み込めません")?;
            let resume_text = loader::read_document(&resume_path).context("简历を読み込めません")?;
            println!("✔ JD {}文字 / 简历 {}文字\n", jd_text.chars().count(), resume_text.chars().count());

            // 2-4. 解析
            let client = OpenAiClient::new(&config, api_key)?;
            println!("[2/4] 信息提取中... ({}項目, モデル: {})", fields.len(), client.model());
            let options = AnalyzeOptions {
                concurrency: concurrency as usize,
                show_progress: true,
            };
            let report =
                analyzer::analyze_resume(&client, &jd_text, &resume_text, &fields, options).await;

            export::print_report(&report);

            let written = export::export_report(&report, &format, &output)
                .with_context(|| format!("結果を保存できません: {}", output.display()))?;
            for path in written {
                println!("\n分析结果已保存到 {}", path.display());
            }

            println!("\n✅ 分析完了");
        }

        Commands::Fields => {
            println!("組み込みの抽出項目:");
            for (i, field) in default_fields().iter().enumerate() {
                println!("  {:>2}) {}", i + 1, field);
            }
        }

        Commands::Config { set_api_key, set_model, set_base_url, show } => {
            let mut config = Config::load()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.model = model;
                config.save()?;
                println!("✔ モデルを設定しました: {}", config.model);
            }

            if let Some(base_url) = set_base_url {
                config.base_url = base_url;
                config.save()?;
                println!("✔ APIベースURLを設定しました: {}", config.base_url);
            }

            if show {
                println!("設定 ({}):", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  APIベースURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn prompt_path(prompt: &str) -> Result<PathBuf, ResumeMatchError> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| ResumeMatchError::Prompt(e.to_string()))?;
    Ok(PathBuf::from(input.trim()))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
