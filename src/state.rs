//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ContentFacade;
use crate::utils::GenerationJournal;

/// 应用共享状态
///
/// 构造后只读，使用 Arc 包裹以便在多个处理器之间共享
pub struct AppState {
    pub config: AppConfig,
    pub facade: ContentFacade,
    pub journal: Arc<GenerationJournal>,
}

impl AppState {
    /// 根据配置创建状态
    pub fn new(config: AppConfig) -> Self {
        let journal = Arc::new(GenerationJournal::new(config.journal_dir.clone()));
        let facade = ContentFacade::from_config(&config, Arc::clone(&journal));
        Self {
            config,
            facade,
            journal,
        }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Arc<AppState> {
    Arc::new(AppState::new(config))
}
