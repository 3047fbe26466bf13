//! 学科目录端点

use axum::{
    extract::Path,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::SubjectInfo;
use crate::services::Subject;
use crate::state::AppState;

/// 列出所有学科
async fn list_subjects() -> Json<Vec<SubjectInfo>> {
    Json(Subject::ALL.into_iter().map(SubjectInfo::from).collect())
}

/// 获取单个学科
async fn get_subject(Path(name): Path<String>) -> AppResult<Json<SubjectInfo>> {
    Subject::from_name(&name)
        .map(|subject| Json(subject.into()))
        .ok_or_else(|| AppError::NotFound(format!("学科不存在: {}", name)))
}

/// 创建学科路由
pub fn subject_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/subjects", get(list_subjects))
        .route("/api/subjects/:name", get(get_subject))
}
