//! Gemini 客户端

use futures::{Stream, StreamExt};
use reqwest::Client;
use std::pin::Pin;
use std::time::Duration;
use tracing::info;

use super::gemini::stream_gemini;
use super::types::{ChatChunk, GenerateOptions, LlmError, StreamCollectResult};

/// 生成式语言 API 客户端
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// 创建新的客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// 流式生成
    pub fn stream_generate(
        &self,
        prompt: &str,
        model: &str,
        options: GenerateOptions,
    ) -> Pin<Box<dyn Stream<Item = Result<ChatChunk, LlmError>> + Send>> {
        info!("LLM request: model={}, prompt_len={}", model, prompt.len());
        stream_gemini(
            &self.client,
            &self.api_key,
            &self.base_url,
            prompt,
            model,
            &options,
        )
    }

    /// 流式请求并收集完整响应
    pub async fn stream_and_collect(
        &self,
        prompt: &str,
        model: &str,
        options: GenerateOptions,
    ) -> Result<StreamCollectResult, LlmError> {
        let mut stream = self.stream_generate(prompt, model, options);
        let mut result = StreamCollectResult::default();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            result.chunk_count += 1;

            if let Some(content) = chunk.content {
                result.content.push_str(&content);
            }
            if chunk.finish_reason.is_some() {
                result.finish_reason = chunk.finish_reason;
            }
        }

        Ok(result)
    }

    /// 单次生成，返回完整文本
    ///
    /// 没有任何文本内容时返回 [`LlmError::EmptyResponse`]
    pub async fn generate_text(
        &self,
        prompt: &str,
        model: &str,
        options: GenerateOptions,
    ) -> Result<String, LlmError> {
        let result = self.stream_and_collect(prompt, model, options).await?;
        if result.content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        info!(
            "LLM response: chunks={}, len={}, finish_reason={:?}",
            result.chunk_count,
            result.content.len(),
            result.finish_reason
        );
        Ok(result.content)
    }
}
