//! AI 辅导与判题端点

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

use super::require_non_blank;
use crate::error::AppResult;
use crate::models::{CheckAnswerRequest, TutorAskRequest, TutorAskResponse};
use crate::services::content::AnswerCheck;
use crate::services::tutor::{TutorPromptService, EXPLAIN_MORE_MESSAGE};
use crate::state::AppState;

/// 针对当前题目向 AI 辅导提问
async fn ask_tutor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TutorAskRequest>,
) -> AppResult<Json<TutorAskResponse>> {
    let subject = require_non_blank(&req.subject, "subject")?;
    let message = if req.explain_more {
        EXPLAIN_MORE_MESSAGE
    } else {
        require_non_blank(&req.message, "message")?
    };

    let prompt = TutorPromptService::new().build_tutor_prompt(
        subject,
        req.topic.as_deref(),
        &req.question,
        &req.history,
        message,
    );
    let reply = state.facade.generate_content(&prompt).await;
    Ok(Json(TutorAskResponse { reply }))
}

/// 判题
async fn check_answer(Json(req): Json<CheckAnswerRequest>) -> Json<AnswerCheck> {
    Json(req.question.check(&req.selected))
}

/// 创建辅导路由
pub fn tutor_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tutor/ask", post(ask_tutor))
        .route("/api/questions/check", post(check_answer))
}
