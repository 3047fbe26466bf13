//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use crate::services::content::Question;
use crate::services::tutor::TutorTurn;
use crate::services::Subject;

/// 文本生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    pub prompt: String,
}

/// 文本生成响应
#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub content: String,
}

/// 题目生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub subject: String,
    pub topic: Option<String>,
    pub count: Option<usize>,
}

/// 题目生成响应
#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}

/// 研究摘要请求
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
}

/// 辅导提问请求
///
/// `explainMore` 为 true 时忽略 `message`，发送固定的详细讲解请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorAskRequest {
    pub subject: String,
    pub topic: Option<String>,
    pub question: Question,
    #[serde(default)]
    pub history: Vec<TutorTurn>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub explain_more: bool,
}

/// 辅导回复
#[derive(Debug, Serialize)]
pub struct TutorAskResponse {
    pub reply: String,
}

/// 判题请求
#[derive(Debug, Deserialize)]
pub struct CheckAnswerRequest {
    pub question: Question,
    pub selected: String,
}

/// 学科信息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInfo {
    pub name: &'static str,
    pub topics: &'static [&'static str],
    pub default_topic: &'static str,
}

impl From<Subject> for SubjectInfo {
    fn from(subject: Subject) -> Self {
        Self {
            name: subject.name(),
            topics: subject.topics(),
            default_topic: subject.default_topic(),
        }
    }
}
