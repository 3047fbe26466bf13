//! 生成提示词模板

/// 题目生成提示词
///
/// 要求模型只返回 JSON 数组，字段与 [`super::Question`] 对应
pub fn build_questions_prompt(subject: &str, topic: &str, count: usize) -> String {
    format!(
        r#"You are an expert Nigerian educational content creator. Generate exactly {count} multiple-choice questions for {subject} on the topic of "{topic}".

IMPORTANT REQUIREMENTS:
1. Questions must be suitable for Nigerian secondary school students (SS1-SS3, WAEC/JAMB level)
2. Use Nigerian context and examples where appropriate
3. Each question must have exactly 4 options
4. Options should be the actual answer text, not just letters
5. The "correct" field should be the letter (A, B, C, or D) of the correct option
6. All 4 options of a question must be different from each other

Format your response as a valid JSON array with this exact structure:
[
  {{
    "id": 1,
    "text": "Clear question text here?",
    "options": ["First option text", "Second option text", "Third option text", "Fourth option text"],
    "correct": "A",
    "explanation": "Detailed explanation of why the correct answer is right",
    "followUp": "A follow-up question to test deeper understanding"
  }}
]

Subject: {subject}
Topic: {topic}
Number of questions: {count}

Return ONLY the JSON array, no additional text or markdown formatting."#
    )
}

/// 研究摘要提示词
pub fn build_research_prompt(query: &str) -> String {
    format!(
        r#"Research the following topic and provide educational content suitable for teachers and students: "{query}"

Format your response as JSON with this structure:
{{
  "summary": "A comprehensive 2-3 paragraph summary of the topic",
  "keyPoints": ["Key point 1", "Key point 2", "Key point 3", "Key point 4", "Key point 5"],
  "sources": [{{"title": "Source name", "url": "https://example.com"}}],
  "relatedTopics": ["Related topic 1", "Related topic 2", "Related topic 3"]
}}

Return ONLY the JSON object."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_prompt_embeds_request() {
        let prompt = build_questions_prompt("Biology", "Genetics", 5);
        assert!(prompt.contains("Generate exactly 5 multiple-choice questions for Biology"));
        assert!(prompt.contains("on the topic of \"Genetics\""));
        assert!(prompt.contains("\"followUp\""));
        // 相同输入得到相同提示词
        assert_eq!(prompt, build_questions_prompt("Biology", "Genetics", 5));
    }

    #[test]
    fn test_research_prompt_embeds_query() {
        let prompt = build_research_prompt("Soil erosion");
        assert!(prompt.contains("\"Soil erosion\""));
        assert!(prompt.contains("\"relatedTopics\""));
    }
}
