//! 配置模块

mod app_config;

pub use app_config::{is_usable_api_key, AppConfig};
