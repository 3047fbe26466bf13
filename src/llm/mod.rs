//! LLM 模块
//!
//! 提供 Gemini 生成式语言 API 的流式客户端。

mod client;
mod format;
mod gemini;
mod types;

pub use client::LlmClient;
pub use format::{build_gemini_stream_endpoint, mask_api_key};
pub use types::*;
