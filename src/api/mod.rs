//! API 路由模块

mod config;
mod generate;
mod health;
mod subjects;
mod tutor;

pub use config::config_routes;
pub use generate::generate_routes;
pub use health::health_routes;
pub use subjects::subject_routes;
pub use tutor::tutor_routes;

use axum::Router;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(config_routes())
        .merge(subject_routes())
        .merge(generate_routes())
        .merge(tutor_routes())
        .with_state(state)
}

/// 校验必填文本字段，返回裁剪后的值
fn require_non_blank<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::BadRequest(format!("{} is required", field)))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::create_shared_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// mock 模式、无延迟的路由
    fn test_app() -> Router {
        let config = AppConfig {
            simulate_latency: false,
            ..AppConfig::default()
        };
        create_api_routes(create_shared_state(config))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn sample_question() -> Value {
        json!({
            "id": 1,
            "subject": "Physics",
            "text": "What is the SI unit of force?",
            "options": ["Newton", "Joule", "Watt", "Pascal"],
            "correct": "A",
            "explanation": "Force is measured in Newtons.",
            "followUp": "What is F = ma?"
        })
    }

    #[tokio::test]
    async fn test_health_reports_mock_mode() {
        let (status, body) = send(test_app(), Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "mode": "mock"}));
    }

    #[tokio::test]
    async fn test_config_hides_key() {
        let config = AppConfig {
            api_key: "your_gemini_api_key_here".to_string(),
            simulate_latency: false,
            ..AppConfig::default()
        };
        let app = create_api_routes(create_shared_state(config));
        let (status, body) = send(app, Method::GET, "/api/config", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["apiKeySet"], true);
        assert_eq!(body["apiKeyUsable"], false);
        assert_eq!(body["mode"], "mock");
        assert_eq!(body["model"], "gemini-1.5-flash");
        assert!(!body.to_string().contains("your_gemini_api_key_here"));
    }

    #[tokio::test]
    async fn test_subjects() {
        let (status, body) = send(test_app(), Method::GET, "/api/subjects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["name"], "Mathematics");

        let (status, body) = send(test_app(), Method::GET, "/api/subjects/biology", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["defaultTopic"], "Cell Biology");

        let (status, body) = send(test_app(), Method::GET, "/api/subjects/Economics", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_generate_questions_defaults_and_stats() {
        let app = test_app();
        let (status, body) = send(
            app.clone(),
            Method::POST,
            "/api/generate/questions",
            Some(json!({"subject": "Biology"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0]["subject"], "Biology");
        assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);

        let (_, stats) = send(app, Method::GET, "/api/stats", None).await;
        assert_eq!(stats["mockServed"], 1);
        assert_eq!(stats["configurationMissing"], 1);
    }

    #[tokio::test]
    async fn test_generate_questions_validation() {
        for body in [
            json!({"subject": "Biology", "count": 0}),
            json!({"subject": "Biology", "count": 51}),
            json!({"subject": "  "}),
        ] {
            let (status, response) = send(test_app(), Method::POST, "/api/generate/questions", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["success"], false);
        }
    }

    #[tokio::test]
    async fn test_generate_content_accepts_empty_prompt() {
        let (status, body) = send(
            test_app(),
            Method::POST,
            "/api/generate/content",
            Some(json!({"prompt": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["content"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_research() {
        let (status, body) = send(
            test_app(),
            Method::POST,
            "/api/generate/research",
            Some(json!({"query": "Photosynthesis"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyPoints"].as_array().unwrap().len(), 5);
        assert_eq!(body["relatedTopics"].as_array().unwrap().len(), 4);

        let (status, _) = send(
            test_app(),
            Method::POST,
            "/api/generate/research",
            Some(json!({"query": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tutor_ask() {
        let (status, body) = send(
            test_app(),
            Method::POST,
            "/api/tutor/ask",
            Some(json!({
                "subject": "Physics",
                "question": sample_question(),
                "history": [{"role": "student", "content": "Hi"}],
                "message": "Why is A correct?"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["reply"].as_str().unwrap().is_empty());

        let (status, _) = send(
            test_app(),
            Method::POST,
            "/api/tutor/ask",
            Some(json!({"subject": "Physics", "question": sample_question(), "message": " "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            test_app(),
            Method::POST,
            "/api/tutor/ask",
            Some(json!({"subject": "Physics", "question": sample_question(), "explainMore": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_check_answer() {
        let (status, body) = send(
            test_app(),
            Method::POST,
            "/api/questions/check",
            Some(json!({"question": sample_question(), "selected": "Newton"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"correct": true, "correctLetter": "A"}));

        let (_, body) = send(
            test_app(),
            Method::POST,
            "/api/questions/check",
            Some(json!({"question": sample_question(), "selected": "C"})),
        )
        .await;
        assert_eq!(body["correct"], false);
    }
}
