//! 内容生成门面
//!
//! 对外提供文本、题目、研究摘要三种生成操作，隐藏远程模型是否可用。
//! 远程调用的任何错误都只进入日志，调用方总能拿到可用的内容。

use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::mock::{mock_questions, mock_research, mock_response, MockDelay};
use super::parse::{parse_questions, parse_research};
use super::prompts::{build_questions_prompt, build_research_prompt};
use super::types::{GenerationError, Operation, Question, ResearchResult, ServedMode};
use crate::config::AppConfig;
use crate::llm::{GenerateOptions, LlmClient};
use crate::utils::{GenerationJournal, GenerationRecord};

/// 远程后端
struct LiveBackend {
    client: LlmClient,
    model: String,
    options: GenerateOptions,
}

enum Backend {
    Live(LiveBackend),
    Mock,
}

/// 内容生成门面
///
/// 构造时根据配置确定模式，进程生命周期内不再改变。
pub struct ContentFacade {
    backend: Backend,
    simulate_latency: bool,
    journal: Arc<GenerationJournal>,
}

impl ContentFacade {
    /// 根据配置创建门面
    ///
    /// 密钥不可用或 HTTP 客户端创建失败时进入 mock 模式
    pub fn from_config(config: &AppConfig, journal: Arc<GenerationJournal>) -> Self {
        let backend = if config.has_usable_api_key() {
            match LlmClient::new(
                config.api_key.trim(),
                &config.base_url,
                config.request_timeout(),
                config.connect_timeout(),
            ) {
                Ok(client) => {
                    info!("AI content generation is live: model={}", config.model);
                    Backend::Live(LiveBackend {
                        client,
                        model: config.model.clone(),
                        options: GenerateOptions {
                            temperature: Some(config.temperature),
                            max_tokens: Some(config.max_tokens),
                        },
                    })
                }
                Err(e) => {
                    warn!("Failed to create LLM client, falling back to mock mode: {}", e);
                    Backend::Mock
                }
            }
        } else {
            info!("No valid API key configured, AI content generation runs in mock mode");
            Backend::Mock
        };

        Self {
            backend,
            simulate_latency: config.simulate_latency,
            journal,
        }
    }

    /// 当前模式
    pub fn mode(&self) -> ServedMode {
        match self.backend {
            Backend::Live(_) => ServedMode::Live,
            Backend::Mock => ServedMode::Mock,
        }
    }

    /// 根据提示词生成文本
    pub async fn generate_content(&self, prompt: &str) -> String {
        self.serve(
            Operation::Content,
            prompt,
            self.remote_text(prompt),
            MockDelay::CONTENT,
            || mock_response(prompt).to_string(),
            |_| 1,
        )
        .await
    }

    /// 为学科/主题生成 `count` 道单选题
    ///
    /// mock 模式返回 min(count, 10) 道；远程模式最多 `count` 道
    pub async fn generate_questions(&self, subject: &str, topic: &str, count: usize) -> Vec<Question> {
        if count == 0 {
            return Vec::new();
        }

        let input = format!("{} / {} x{}", subject, topic, count);
        self.serve(
            Operation::Questions,
            &input,
            self.live_questions(subject, topic, count),
            MockDelay::QUESTIONS,
            || mock_questions(subject, count),
            Vec::len,
        )
        .await
    }

    /// 为查询生成研究摘要
    pub async fn generate_research_content(&self, query: &str) -> ResearchResult {
        self.serve(
            Operation::Research,
            query,
            self.live_research(query),
            MockDelay::RESEARCH,
            || mock_research(query),
            |_| 1,
        )
        .await
    }

    async fn live_questions(&self, subject: &str, topic: &str, count: usize) -> Result<Vec<Question>, GenerationError> {
        let raw = self.remote_text(&build_questions_prompt(subject, topic, count)).await?;
        parse_questions(&raw, subject, count)
    }

    async fn live_research(&self, query: &str) -> Result<ResearchResult, GenerationError> {
        let raw = self.remote_text(&build_research_prompt(query)).await?;
        parse_research(&raw)
    }

    /// 单次远程调用，不重试
    async fn remote_text(&self, prompt: &str) -> Result<String, GenerationError> {
        match &self.backend {
            Backend::Live(live) => Ok(live
                .client
                .generate_text(prompt, &live.model, live.options.clone())
                .await?),
            Backend::Mock => Err(GenerationError::ConfigurationMissing),
        }
    }

    /// 先尝试远程结果，失败时记录原因并返回 mock 内容
    async fn serve<T>(
        &self,
        operation: Operation,
        input: &str,
        live: impl Future<Output = Result<T, GenerationError>>,
        delay: MockDelay,
        mock: impl FnOnce() -> T,
        items: impl Fn(&T) -> usize,
    ) -> T {
        let (record, start) = GenerationRecord::start(operation, input);

        match live.await {
            Ok(value) => {
                self.journal
                    .record(record.finish(start, ServedMode::Live, None, items(&value)));
                value
            }
            Err(err) => {
                match &err {
                    GenerationError::ConfigurationMissing => {
                        debug!("Serving mock {:?} content (mock mode)", operation);
                    }
                    GenerationError::RemoteCallFailed(e) => {
                        warn!(
                            status = ?e.status_code(),
                            "AI {:?} request failed, serving mock content: {}", operation, e
                        );
                    }
                    GenerationError::ResponseParseFailed(msg) => {
                        warn!("AI {:?} response unusable, serving mock content: {}", operation, msg);
                    }
                }

                if self.simulate_latency {
                    delay.wait().await;
                }
                let value = mock();
                self.journal.record(record.finish(
                    start,
                    ServedMode::Mock,
                    Some((err.reason(), err.to_string())),
                    items(&value),
                ));
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::content::question_bank::bank_for;
    use crate::services::content::OptionLetter;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use axum::Router;
    use serde_json::json;
    use std::time::Duration;

    const TEST_KEY: &str = "test-key-abcdefghijklmnopqrstuvwxyz";

    fn mock_facade() -> (ContentFacade, Arc<GenerationJournal>) {
        let journal = Arc::new(GenerationJournal::in_memory());
        let config = AppConfig {
            simulate_latency: false,
            ..AppConfig::default()
        };
        (ContentFacade::from_config(&config, Arc::clone(&journal)), journal)
    }

    fn live_facade(base_url: String) -> (ContentFacade, Arc<GenerationJournal>) {
        let journal = Arc::new(GenerationJournal::in_memory());
        let config = AppConfig {
            api_key: TEST_KEY.to_string(),
            base_url,
            simulate_latency: false,
            ..AppConfig::default()
        };
        (ContentFacade::from_config(&config, Arc::clone(&journal)), journal)
    }

    /// 把文本切成多个 SSE 事件
    fn sse_body(chunks: &[&str]) -> String {
        chunks
            .iter()
            .map(|text| {
                let event = json!({
                    "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
                });
                format!("data: {}\r\n\r\n", event)
            })
            .collect()
    }

    /// 启动一个假的 Gemini 服务，所有请求返回同一响应
    async fn spawn_fake_gemini(status: StatusCode, body: String) -> String {
        let app = Router::new().fallback(move || {
            let body = body.clone();
            async move { (status, [(header::CONTENT_TYPE, "text/event-stream")], body) }
        });
        serve_app(app).await
    }

    /// 假的 Gemini 服务，把响应体分成多个网络块依次发送
    async fn spawn_chunked_gemini(parts: Vec<Vec<u8>>) -> String {
        let app = Router::new().fallback(move || {
            let parts = parts.clone();
            async move {
                let stream = async_stream::stream! {
                    for part in parts {
                        yield Ok::<_, std::io::Error>(part);
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                };
                ([(header::CONTENT_TYPE, "text/event-stream")], Body::from_stream(stream))
            }
        });
        serve_app(app).await
    }

    async fn serve_app(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn assert_well_formed(questions: &[Question], subject: &str) {
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert_eq!(q.subject, subject);
            assert_eq!(q.options.len(), 4);
        }
    }

    #[tokio::test]
    async fn test_mock_mode_biology_genetics() {
        let (facade, journal) = mock_facade();
        assert_eq!(facade.mode(), ServedMode::Mock);

        let questions = facade.generate_questions("Biology", "Genetics", 5).await;
        assert_eq!(questions.len(), 5);
        assert_well_formed(&questions, "Biology");
        assert!(questions.iter().all(|q| q.correct == OptionLetter::A));

        let stats = journal.stats();
        assert_eq!(stats.mock_served, 1);
        assert_eq!(stats.configuration_missing, 1);
    }

    #[tokio::test]
    async fn test_mock_mode_caps_at_bank_size() {
        let (facade, _) = mock_facade();
        let questions = facade.generate_questions("Physics", "Waves", 25).await;
        assert_eq!(questions.len(), 10);
        assert_well_formed(&questions, "Physics");
        assert!(facade.generate_questions("Physics", "Waves", 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_subject_uses_mathematics_bank() {
        let (facade, _) = mock_facade();
        let questions = facade.generate_questions("Economics", "Demand", 10).await;
        let maths: Vec<&str> = bank_for("Mathematics").iter().map(|q| q.text).collect();

        assert_eq!(questions.len(), 10);
        assert_well_formed(&questions, "Economics");
        assert!(questions.iter().all(|q| maths.contains(&q.text.as_str())));
    }

    #[tokio::test]
    async fn test_mock_content_never_fails() {
        let (facade, _) = mock_facade();
        assert!(!facade.generate_content("").await.is_empty());

        let text = facade.generate_content("Please EXPLAIN Photosynthesis").await;
        assert_eq!(
            text,
            "Photosynthesis is the process by which plants convert sunlight, water, and carbon dioxide into glucose and oxygen. The equation is: 6CO₂ + 6H₂O + light energy → C₆H₁₂O₆ + 6O₂. This happens in the chloroplasts, specifically using chlorophyll which gives plants their green color."
        );
    }

    #[tokio::test]
    async fn test_live_content_multibyte_split_across_chunks() {
        let expected = "Photosynthesis: 6CO₂ + 6H₂O → C₆H₁₂O₆ + 6O₂";
        let body = sse_body(&[expected]).into_bytes();
        // 在第一个 ₂ 的字节中间切开
        let split = body
            .windows("₂".len())
            .position(|w| w == "₂".as_bytes())
            .unwrap()
            + 1;
        let base_url = spawn_chunked_gemini(vec![body[..split].to_vec(), body[split..].to_vec()]).await;
        let (facade, journal) = live_facade(base_url);

        let text = facade.generate_content("Explain photosynthesis").await;
        assert_eq!(text, expected);
        assert_eq!(journal.stats().live_served, 1);
    }

    #[tokio::test]
    async fn test_mock_research() {
        let (facade, _) = mock_facade();
        let research = facade.generate_research_content("Erosion").await;
        assert!(research.summary.contains("Erosion"));
        assert_eq!(research.key_points.len(), 5);
    }

    #[test]
    fn test_placeholder_key_stays_mock() {
        let config = AppConfig {
            api_key: "your_gemini_api_key_here".to_string(),
            ..AppConfig::default()
        };
        let facade = ContentFacade::from_config(&config, Arc::new(GenerationJournal::in_memory()));
        assert_eq!(facade.mode(), ServedMode::Mock);
    }

    #[tokio::test]
    async fn test_live_questions_from_fenced_stream() {
        let body = sse_body(&[
            "```json\n[{\"id\": 5, \"text\": \"What is the capital of Nigeria?\", ",
            "\"options\": [\"Lagos\", \"Abuja\", \"Kano\", \"Ibadan\"], \"correct\": \"B\", ",
            "\"explanation\": \"Abuja became the capital in 1991.\"}]\n```",
        ]);
        let base_url = spawn_fake_gemini(StatusCode::OK, body).await;
        let (facade, journal) = live_facade(base_url);
        assert_eq!(facade.mode(), ServedMode::Live);

        let questions = facade.generate_questions("Government", "Federalism", 3).await;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].subject, "Government");
        assert_eq!(questions[0].correct, OptionLetter::B);
        assert_eq!(questions[0].follow_up, "Can you explain this further?");
        assert_eq!(journal.stats().live_served, 1);
    }

    #[tokio::test]
    async fn test_live_content() {
        let body = sse_body(&["Osmosis is ", "the movement of water."]);
        let base_url = spawn_fake_gemini(StatusCode::OK, body).await;
        let (facade, _) = live_facade(base_url);

        let text = facade.generate_content("What is osmosis?").await;
        assert_eq!(text, "Osmosis is the movement of water.");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let base_url = spawn_fake_gemini(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": {"code": 500, "message": "internal"}}"#.to_string(),
        )
        .await;
        let (facade, journal) = live_facade(base_url);

        let text = facade.generate_content("Hello").await;
        assert_eq!(text, mock_response("Hello"));

        let stats = journal.stats();
        assert_eq!(stats.mock_served, 1);
        assert_eq!(stats.remote_call_failed, 1);
    }

    #[tokio::test]
    async fn test_unparseable_questions_fall_back() {
        let body = sse_body(&["Sorry, I cannot help with that."]);
        let base_url = spawn_fake_gemini(StatusCode::OK, body).await;
        let (facade, journal) = live_facade(base_url);

        let questions = facade.generate_questions("Chemistry", "Atomic Structure", 4).await;
        assert_eq!(questions.len(), 4);
        assert_well_formed(&questions, "Chemistry");
        assert_eq!(journal.stats().response_parse_failed, 1);
    }

    #[tokio::test]
    async fn test_live_research_is_repaired() {
        let body = sse_body(&["```json\n{\"summary\": \"Soil erosion removes topsoil.\", \"keyPoints\": [\"Wind\", \"Water\"]}\n```"]);
        let base_url = spawn_fake_gemini(StatusCode::OK, body).await;
        let (facade, _) = live_facade(base_url);

        let research = facade.generate_research_content("Soil erosion").await;
        assert_eq!(research.summary, "Soil erosion removes topsoil.");
        assert_eq!(research.key_points, vec!["Wind", "Water"]);
        assert!(research.sources.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        // 绑定后立即释放端口，连接会被拒绝
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (facade, journal) = live_facade(format!("http://{}", addr));
        let research = facade.generate_research_content("Erosion").await;
        assert_eq!(research, mock_research("Erosion"));
        assert_eq!(journal.stats().remote_call_failed, 1);
    }
}
