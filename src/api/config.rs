//! 配置与统计端点
//!
//! 只读：配置在启动时加载一次，运行期间不修改

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::config::{is_usable_api_key, AppConfig};
use crate::llm::{build_gemini_stream_endpoint, mask_api_key};
use crate::services::content::ServedMode;
use crate::state::AppState;
use crate::utils::GenerationStats;

/// 配置响应（隐藏 api_key 的实际值）
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    /// 是否已设置 API 密钥
    pub api_key_set: bool,
    /// 密钥是否可用于真实调用
    pub api_key_usable: bool,
    /// 掩码后的密钥
    pub api_key_masked: String,
    /// API 基础 URL
    pub base_url: String,
    /// 实际请求的端点
    pub endpoint: String,
    /// 模型名称
    pub model: String,
    /// 温度参数
    pub temperature: f64,
    /// 最大 token 数
    pub max_tokens: u32,
    /// 当前模式
    pub mode: ServedMode,
    /// mock 模式是否模拟延迟
    pub simulate_latency: bool,
}

impl ConfigResponse {
    fn new(config: &AppConfig, mode: ServedMode) -> Self {
        Self {
            api_key_set: config.api_key_set(),
            api_key_usable: is_usable_api_key(&config.api_key),
            api_key_masked: mask_api_key(config.api_key.trim()),
            base_url: config.base_url.clone(),
            endpoint: build_gemini_stream_endpoint(&config.base_url, &config.model),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            mode,
            simulate_latency: config.simulate_latency,
        }
    }
}

/// 获取当前配置
async fn get_config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse::new(&state.config, state.facade.mode()))
}

/// 获取生成统计
async fn get_stats_handler(State(state): State<Arc<AppState>>) -> Json<GenerationStats> {
    Json(state.journal.stats())
}

/// 创建配置路由
pub fn config_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/config", get(get_config_handler))
        .route("/api/stats", get(get_stats_handler))
}
