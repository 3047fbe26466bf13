//! 应用配置管理
//!
//! 启动时加载一次配置：`.env` → `config.json` → 环境变量覆盖。
//! 加载结果作为普通值传给各个服务，不使用全局单例。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::AppError;

/// 提交到仓库里的占位密钥
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

/// 有效密钥的最短长度（需严格大于该值）
const MIN_API_KEY_LEN: usize = 20;

/// 配置文件路径的环境变量
const CONFIG_PATH_ENV: &str = "HANDBOOK_CONFIG";

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gemini API 密钥
    pub api_key: String,

    /// API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// 温度参数 (0.0 - 2.0)
    pub temperature: f64,

    /// 最大输出 token 数
    pub max_tokens: u32,

    /// 请求超时（秒）
    pub request_timeout_secs: u64,

    /// 连接超时（秒）
    pub connect_timeout_secs: u64,

    /// mock 模式下是否模拟网络延迟
    pub simulate_latency: bool,

    /// HTTP 监听地址
    pub bind_addr: String,

    /// 生成日志目录，不设置则只记录到 tracing
    pub journal_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            request_timeout_secs: 120,
            connect_timeout_secs: 30,
            simulate_latency: true,
            bind_addr: "127.0.0.1:8765".to_string(),
            journal_dir: None,
        }
    }
}

/// 判断密钥是否可用于真实调用
///
/// 非空、不是占位值、长度大于 20
pub fn is_usable_api_key(api_key: &str) -> bool {
    let key = api_key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY && key.chars().count() > MIN_API_KEY_LEN
}

impl AppConfig {
    /// 加载配置
    ///
    /// 文件不存在时使用默认值；文件存在但无法解析时返回错误
    pub fn load() -> Result<Self, AppError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded environment from .env");
        }

        let path = get_config_path();
        let mut config = if path.exists() {
            info!("Loading config from {}", path.display());
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// 从 JSON 文件读取
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("读取配置文件失败: {}", e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("解析配置文件失败: {}", e)))
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 便于测试时替换环境来源
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.api_key = key;
        }
        if let Some(model) = lookup("HANDBOOK_MODEL").filter(|v| !v.trim().is_empty()) {
            self.model = model;
        }
        if let Some(base_url) = lookup("HANDBOOK_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url;
        }
        if let Some(addr) = lookup("HANDBOOK_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            self.bind_addr = addr;
        }
    }

    /// 密钥是否已设置（不论是否可用）
    pub fn api_key_set(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// 密钥是否可用于真实调用
    pub fn has_usable_api_key(&self) -> bool {
        let usable = is_usable_api_key(&self.api_key);
        if self.api_key_set() && !usable {
            warn!("Configured API key looks like a placeholder; AI features run in mock mode");
        }
        usable
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
