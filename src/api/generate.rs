//! 内容生成端点
//!
//! 只做参数校验，生成结果总是来自门面（远程或 mock）

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

use super::require_non_blank;
use crate::error::{AppError, AppResult};
use crate::models::{
    GenerateContentRequest, GenerateContentResponse, GenerateQuestionsRequest,
    GenerateQuestionsResponse, ResearchRequest,
};
use crate::services::content::ResearchResult;
use crate::services::Subject;
use crate::state::AppState;

/// 默认题目数量
const DEFAULT_QUESTION_COUNT: usize = 5;
/// 单次最多题目数量
const MAX_QUESTION_COUNT: usize = 50;
/// 未知学科的默认主题
const FALLBACK_TOPIC: &str = "General";

/// 生成文本；空提示词也会得到回复
async fn generate_content(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateContentRequest>,
) -> Json<GenerateContentResponse> {
    let content = state.facade.generate_content(&req.prompt).await;
    Json(GenerateContentResponse { content })
}

/// 生成题目
async fn generate_questions(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateQuestionsRequest>,
) -> AppResult<Json<GenerateQuestionsResponse>> {
    let subject = require_non_blank(&req.subject, "subject")?;

    let count = req.count.unwrap_or(DEFAULT_QUESTION_COUNT);
    if !(1..=MAX_QUESTION_COUNT).contains(&count) {
        return Err(AppError::BadRequest(format!(
            "count must be between 1 and {}",
            MAX_QUESTION_COUNT
        )));
    }

    let topic = match req.topic.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(topic) => topic,
        None => Subject::from_name(subject)
            .map(Subject::default_topic)
            .unwrap_or(FALLBACK_TOPIC),
    };

    info!("Generating {} questions: subject={}, topic={}", count, subject, topic);
    let questions = state.facade.generate_questions(subject, topic, count).await;
    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// 生成研究摘要
async fn generate_research(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResearchRequest>,
) -> AppResult<Json<ResearchResult>> {
    let query = require_non_blank(&req.query, "query")?;
    Ok(Json(state.facade.generate_research_content(query).await))
}

/// 创建生成路由
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/generate/content", post(generate_content))
        .route("/api/generate/questions", post(generate_questions))
        .route("/api/generate/research", post(generate_research))
}
