//! 内容生成类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::llm::LlmError;

/// 选项字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [OptionLetter::A, OptionLetter::B, OptionLetter::C, OptionLetter::D];

    pub fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 解析单个字母，忽略大小写和首尾空白
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(OptionLetter::A),
            "B" | "b" => Some(OptionLetter::B),
            "C" | "c" => Some(OptionLetter::C),
            "D" | "d" => Some(OptionLetter::D),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单选题
///
/// `options` 恒为 4 项，`correct` 恒指向其中之一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 批次内序号，从 1 开始
    pub id: u32,
    pub subject: String,
    pub text: String,
    pub options: [String; 4],
    pub correct: OptionLetter,
    pub explanation: String,
    pub follow_up: String,
}

/// 判题结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCheck {
    pub correct: bool,
    pub correct_letter: OptionLetter,
}

impl Question {
    /// 第 `index` 个选项是否正确
    pub fn is_correct(&self, index: usize) -> bool {
        OptionLetter::from_index(index) == Some(self.correct)
    }

    /// 正确选项的文本
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct.index()]
    }

    /// 解析学生的选择：选项原文优先，其次是字母
    pub fn resolve_selection(&self, selected: &str) -> Option<OptionLetter> {
        let selected = selected.trim();
        self.options
            .iter()
            .position(|o| o.trim() == selected)
            .and_then(OptionLetter::from_index)
            .or_else(|| OptionLetter::parse(selected))
    }

    /// 判题；无法识别的选择视为错误
    pub fn check(&self, selected: &str) -> AnswerCheck {
        let correct = self
            .resolve_selection(selected)
            .is_some_and(|letter| self.is_correct(letter.index()));
        AnswerCheck {
            correct,
            correct_letter: self.correct,
        }
    }

    /// 是否存在文本重复的选项
    pub fn has_duplicate_options(&self) -> bool {
        self.options.iter().enumerate().any(|(i, a)| {
            self.options[i + 1..]
                .iter()
                .any(|b| a.trim().eq_ignore_ascii_case(b.trim()))
        })
    }
}

/// 研究资料来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// 研究摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub sources: Vec<Source>,
    pub related_topics: Vec<String>,
}

/// 生成操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Content,
    Questions,
    Research,
}

/// 实际提供内容的一方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServedMode {
    Live,
    Mock,
}

impl ServedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ServedMode::Live => "live",
            ServedMode::Mock => "mock",
        }
    }
}

/// 回退到 mock 的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    ConfigurationMissing,
    RemoteCallFailed,
    ResponseParseFailed,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackReason::ConfigurationMissing => "configuration_missing",
            FallbackReason::RemoteCallFailed => "remote_call_failed",
            FallbackReason::ResponseParseFailed => "response_parse_failed",
        }
    }
}

/// 内容生成错误
///
/// 只在门面内部流转，公开方法总是把它转换成 mock 内容。
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("未配置可用的 API 密钥")]
    ConfigurationMissing,

    #[error("远程调用失败: {0}")]
    RemoteCallFailed(#[from] LlmError),

    #[error("响应解析失败: {0}")]
    ResponseParseFailed(String),
}

impl GenerationError {
    pub fn reason(&self) -> FallbackReason {
        match self {
            GenerationError::ConfigurationMissing => FallbackReason::ConfigurationMissing,
            GenerationError::RemoteCallFailed(_) => FallbackReason::RemoteCallFailed,
            GenerationError::ResponseParseFailed(_) => FallbackReason::ResponseParseFailed,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        GenerationError::ResponseParseFailed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: 1,
            subject: "Physics".to_string(),
            text: "What is the SI unit of force?".to_string(),
            options: [
                "Joule".to_string(),
                "Newton".to_string(),
                "Watt".to_string(),
                "Pascal".to_string(),
            ],
            correct: OptionLetter::B,
            explanation: "Force is measured in Newtons.".to_string(),
            follow_up: "What is F = ma?".to_string(),
        }
    }

    #[test]
    fn test_option_letter_parse() {
        assert_eq!(OptionLetter::parse(" c "), Some(OptionLetter::C));
        assert_eq!(OptionLetter::parse("E"), None);
        assert_eq!(OptionLetter::parse("AB"), None);
        assert_eq!(OptionLetter::from_index(3), Some(OptionLetter::D));
        assert_eq!(OptionLetter::from_index(4), None);
    }

    #[test]
    fn test_check_by_letter_or_text() {
        let q = sample();
        assert!(q.check("B").correct);
        assert!(q.check("Newton").correct);
        assert!(!q.check("Joule").correct);
        assert!(!q.check("Ohm").correct);
        assert_eq!(q.check("A").correct_letter, OptionLetter::B);
        assert_eq!(q.correct_option(), "Newton");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(!q.is_correct(7));
    }

    #[test]
    fn test_duplicate_options() {
        let mut q = sample();
        assert!(!q.has_duplicate_options());
        q.options[3] = "newton".to_string();
        assert!(q.has_duplicate_options());
    }

    #[test]
    fn test_question_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["correct"], "B");
        assert_eq!(value["followUp"], "What is F = ma?");
        assert_eq!(value["options"].as_array().unwrap().len(), 4);
    }
}
