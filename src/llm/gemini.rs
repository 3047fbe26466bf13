//! Gemini streamGenerateContent 流式实现

use async_stream::try_stream;
use futures::Stream;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use tracing::{debug, error};

use super::format::build_gemini_stream_endpoint;
use super::types::{ChatChunk, GenerateOptions, LlmError};

/// Gemini 请求载荷
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini SSE 响应块
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiStreamChunk {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    error: Option<GeminiApiError>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeminiApiError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

impl GeminiCandidate {
    /// 拼接候选中的所有文本片段
    fn text(&self) -> Option<String> {
        let content = self.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// 从缓冲区取出一整行并解码
///
/// 没有换行时返回 None，未完成的字节留在缓冲区
fn take_line(buffer: &mut Vec<u8>) -> Option<String> {
    let pos = buffer.iter().position(|&b| b == b'\n')?;
    let line: Vec<u8> = buffer.drain(..=pos).collect();
    Some(String::from_utf8_lossy(&line).trim().to_string())
}

/// 流式调用 Gemini API
pub fn stream_gemini(
    client: &Client,
    api_key: &str,
    base_url: &str,
    prompt: &str,
    model: &str,
    options: &GenerateOptions,
) -> Pin<Box<dyn Stream<Item = Result<ChatChunk, LlmError>> + Send>> {
    let endpoint = build_gemini_stream_endpoint(base_url, model);
    let api_key = api_key.to_string();
    let model = model.to_string();
    let prompt = prompt.to_string();
    let options = options.clone();
    let client = client.clone();

    Box::pin(try_stream! {
        let generation_config = if options.temperature.is_some() || options.max_tokens.is_some() {
            Some(GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
            })
        } else {
            None
        };

        let payload = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt) }],
            }],
            generation_config,
        };

        debug!("Gemini API request: endpoint={}, model={}", endpoint, model);

        let response = client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &api_key)
            .json(&payload)
            .send()
            .await?;

        // 检查状态码
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            let preview: String = error_text.chars().take(500).collect();
            error!("Gemini API error: status={}, body={}", status_code, preview);
            Err::<(), LlmError>(LlmError::ApiError {
                status: status_code,
                message: error_text,
            })?;
            unreachable!();
        }

        // 处理 SSE 流
        // 按字节缓冲，多字节字符可能被拆到两个网络块里
        let mut buffer: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();

        use futures::StreamExt;
        while let Some(chunk_result) = stream.next().await {
            let bytes = chunk_result?;
            buffer.extend_from_slice(&bytes);

            // 按行处理
            while let Some(line) = take_line(&mut buffer) {
                if line.is_empty() {
                    continue;
                }

                if let Some(data) = line.strip_prefix("data:") {
                    let data = data.trim();
                    if data == "[DONE]" {
                        return;
                    }

                    match serde_json::from_str::<GeminiStreamChunk>(data) {
                        Ok(chunk) => {
                            if let Some(api_error) = chunk.error {
                                Err::<(), LlmError>(LlmError::ApiError {
                                    status: api_error.code.unwrap_or(500),
                                    message: api_error.message,
                                })?;
                            }
                            if let Some(candidate) = chunk.candidates.first() {
                                yield ChatChunk {
                                    content: candidate.text(),
                                    finish_reason: candidate.finish_reason.clone(),
                                };
                            }
                        }
                        Err(e) => {
                            // 单行解析失败不中断流
                            debug!("Failed to parse Gemini response: {}, data: {}", e, data);
                        }
                    }
                }
            }
        }
    })
}
