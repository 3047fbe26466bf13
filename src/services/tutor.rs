//! AI 辅导提示词构建服务
//!
//! 负责把当前题目和对话历史组装成发送给模型的提示词

use serde::{Deserialize, Serialize};

use crate::services::content::{OptionLetter, Question};

/// 辅导开场白
const TUTOR_PREAMBLE: &str =
    "You are a helpful AI tutor for Nigerian secondary school students preparing for WAEC/JAMB.";

/// 回复要求
const RESPONSE_GUIDELINES: &str = r#"Please provide a clear, helpful response that:
1. Directly addresses the student's question
2. Uses simple language suitable for secondary school students
3. Provides examples where helpful
4. Encourages further learning"#;

/// "详细讲解" 按钮发送的固定消息
pub const EXPLAIN_MORE_MESSAGE: &str =
    "Can you explain this answer in more detail? I want to understand it better.";

/// 对话角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorRole {
    Student,
    Tutor,
}

impl TutorRole {
    fn label(self) -> &'static str {
        match self {
            TutorRole::Student => "Student",
            TutorRole::Tutor => "Tutor",
        }
    }
}

/// 一轮对话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorTurn {
    pub role: TutorRole,
    pub content: String,
}

/// 辅导提示词服务
pub struct TutorPromptService;

impl TutorPromptService {
    pub fn new() -> Self {
        Self
    }

    /// 构建辅导提示词
    pub fn build_tutor_prompt(
        &self,
        subject: &str,
        topic: Option<&str>,
        question: &Question,
        history: &[TutorTurn],
        message: &str,
    ) -> String {
        let mut parts = vec![TUTOR_PREAMBLE.to_string()];

        let mut context = vec![format!("Subject: {}", subject)];
        if let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) {
            context.push(format!("Topic: {}", topic));
        }
        context.push(format!("Current Question: \"{}\"", question.text));
        context.push(format!("Options: {}", Self::format_options(question)));
        context.push(format!(
            "Correct Answer: {}. {}",
            question.correct,
            question.correct_option()
        ));
        context.push(format!("Explanation: {}", question.explanation));
        parts.push(context.join("\n"));

        if !history.is_empty() {
            let lines: Vec<String> = history
                .iter()
                .map(|turn| format!("{}: {}", turn.role.label(), turn.content))
                .collect();
            parts.push(format!("Previous conversation:\n{}", lines.join("\n")));
        }

        parts.push(format!("Student's question: {}", message.trim()));
        parts.push(RESPONSE_GUIDELINES.to_string());

        parts.join("\n\n")
    }

    /// `A. x, B. y, ...`
    fn format_options(question: &Question) -> String {
        OptionLetter::ALL
            .iter()
            .zip(question.options.iter())
            .map(|(letter, option)| format!("{}. {}", letter, option))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TutorPromptService {
    fn default() -> Self {
        Self::new()
    }
}
