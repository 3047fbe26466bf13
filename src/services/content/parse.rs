//! 远程响应解析
//!
//! 去掉 markdown 代码块标记后解析 JSON，并对字段做防御性修复：
//! 结构能解析的元素总是被修补，而不是整批拒绝。

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use super::types::{GenerationError, OptionLetter, Question, ResearchResult, Source};

/// 代码块标记：``` 或 ```json，连同其后的换行
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:json)?[ \t]*\r?\n?").expect("fence pattern is valid"));

/// 带修饰的选项字母：`B. Abuja`、`(B)`、`Option B`、`Answer: c`
static LEADING_LETTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:option|answer)\s*[:\-]?\s*)?[(\[]?([a-d])(?:[)\].:,\-\s]|$)")
        .expect("leading letter pattern is valid")
});

const DEFAULT_TEXT: &str = "Question not available";
const DEFAULT_EXPLANATION: &str = "No explanation available";
const DEFAULT_FOLLOW_UP: &str = "Can you explain this further?";
const DEFAULT_SUMMARY: &str = "No summary available";

/// 去掉所有代码块标记并裁剪首尾空白
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// 解析 JSON 负载
///
/// 先整体解析；失败时截取第一个 `open` 到最后一个 `close` 之间的部分再试，
/// 以容忍模型在 JSON 前后附加的说明文字。
fn parse_json_payload(raw: &str, open: char, close: char) -> Result<Value, GenerationError> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            let start = cleaned.find(open);
            let end = cleaned.rfind(close);
            match (start, end) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str(&cleaned[start..=end]).map_err(|e| GenerationError::parse(e.to_string()))
                }
                _ => Err(GenerationError::parse(first_err.to_string())),
            }
        }
    }
}

/// 非空字符串字段
fn text_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// 把任意 JSON 值转成选项文本；null 与空串视为缺失
fn value_to_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 规整为恰好 4 个选项，缺失位置用对应字母填充
fn repair_options(value: Option<&Value>) -> [String; 4] {
    let items = value.and_then(Value::as_array);
    OptionLetter::ALL.map(|letter| {
        items
            .and_then(|arr| arr.get(letter.index()))
            .and_then(value_to_text)
            .unwrap_or_else(|| letter.as_str().to_string())
    })
}

/// 开头的选项字母
fn leading_letter(raw: &str) -> Option<OptionLetter> {
    LEADING_LETTER_RE
        .captures(raw.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| OptionLetter::parse(m.as_str()))
}

/// 解析 `correct`：字母优先，其次匹配选项原文，再次取带修饰的开头字母，否则为 A
fn repair_correct(value: Option<&Value>, options: &[String; 4]) -> OptionLetter {
    let Some(raw) = value.and_then(Value::as_str) else {
        return OptionLetter::A;
    };
    let resolved = OptionLetter::parse(raw)
        .or_else(|| {
            options
                .iter()
                .position(|o| o == raw.trim())
                .and_then(OptionLetter::from_index)
        })
        .or_else(|| leading_letter(raw));

    resolved.unwrap_or_else(|| {
        warn!("Unrecognized correct answer {:?}, defaulting to A", raw);
        OptionLetter::A
    })
}

/// 修复单道题目；`id` 总是按位置重排
fn repair_question(item: &Value, id: u32, subject: &str) -> Question {
    let options = repair_options(item.get("options"));
    let correct = repair_correct(item.get("correct"), &options);

    let question = Question {
        id,
        subject: subject.to_string(),
        text: text_field(item, "text").unwrap_or(DEFAULT_TEXT).to_string(),
        correct,
        options,
        explanation: text_field(item, "explanation")
            .unwrap_or(DEFAULT_EXPLANATION)
            .to_string(),
        follow_up: text_field(item, "followUp")
            .unwrap_or(DEFAULT_FOLLOW_UP)
            .to_string(),
    };

    if question.has_duplicate_options() {
        warn!("Generated question {} has duplicate options: {:?}", id, question.options);
    }

    question
}

/// 解析题目批次
///
/// 顶层必须是非空数组；超出 `count` 的部分丢弃
pub fn parse_questions(raw: &str, subject: &str, count: usize) -> Result<Vec<Question>, GenerationError> {
    let value = parse_json_payload(raw, '[', ']')?;
    let items = value
        .as_array()
        .ok_or_else(|| GenerationError::parse("expected a JSON array of questions"))?;

    if items.is_empty() {
        return Err(GenerationError::parse("model returned an empty question list"));
    }

    Ok(items
        .iter()
        .take(count)
        .zip(1u32..)
        .map(|(item, id)| repair_question(item, id, subject))
        .collect())
}

/// 字符串列表；非数组视为空，非字符串元素丢弃
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// 来源列表；没有标题的条目丢弃，纯字符串视为标题
fn source_list(value: Option<&Value>) -> Vec<Source> {
    let Some(arr) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    arr.iter()
        .filter_map(|item| match item {
            Value::String(title) if !title.trim().is_empty() => Some(Source {
                title: title.trim().to_string(),
                url: String::new(),
            }),
            Value::Object(_) => text_field(item, "title").map(|title| Source {
                title: title.to_string(),
                url: text_field(item, "url").unwrap_or_default().to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// 解析研究摘要；顶层必须是对象
pub fn parse_research(raw: &str) -> Result<ResearchResult, GenerationError> {
    let value = parse_json_payload(raw, '{', '}')?;
    if !value.is_object() {
        return Err(GenerationError::parse("expected a JSON object for research content"));
    }

    Ok(ResearchResult {
        summary: text_field(&value, "summary").unwrap_or(DEFAULT_SUMMARY).to_string(),
        key_points: string_list(value.get("keyPoints")),
        sources: source_list(value.get("sources")),
        related_topics: string_list(value.get("relatedTopics")),
    })
}
