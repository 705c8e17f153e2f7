//! モデルクライアント
//!
//! すべてのAPI呼び出しは `CompletionClient` 経由で行う。
//! 呼び出し失敗はここで捕捉し、固定値（FAILURE_SENTINEL）に置き換えて
//! パイプラインを止めない。

mod openai;

pub use openai::{OpenAiClient, MAX_TOKENS, TEMPERATURE};

use async_trait::async_trait;
use resume_match_common::FAILURE_SENTINEL;
use thiserror::Error;
use tracing::{debug, warn};

/// 1回のAPI呼び出しのエラー
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("model returned empty content")]
    EmptyContent,
}

/// プロンプトを送り、返答テキスト（trim済み）を返すクライアント
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

/// 縮退処理後の呼び出し結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub failed: bool,
}

impl Completion {
    fn ok(text: String) -> Self {
        Self { text, failed: false }
    }

    fn failed() -> Self {
        Self {
            text: FAILURE_SENTINEL.to_string(),
            failed: true,
        }
    }
}

/// 呼び出しを実行し、失敗時は FAILURE_SENTINEL を返す
pub async fn complete_or_sentinel<C>(client: &C, prompt: &str) -> Completion
where
    C: CompletionClient + ?Sized,
{
    debug!(prompt_chars = prompt.chars().count(), "sending prompt");

    match client.complete(prompt).await {
        Ok(text) => {
            debug!(reply_chars = text.chars().count(), "reply received");
            Completion::ok(text)
        }
        Err(e) => {
            warn!(error = %error_chain(&e), "API调用出错, using failure sentinel");
            Completion::failed()
        }
    }
}

/// エラーと source() の連鎖を1行にまとめる
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
