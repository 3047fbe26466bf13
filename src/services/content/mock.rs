//! mock 内容
//!
//! 没有可用的远程模型时使用的本地内容：关键字分类的固定回复、
//! 打乱后的题库题目、固定的研究摘要，以及模拟网络延迟。

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use super::question_bank::bank_for;
use super::types::{Question, ResearchResult, Source};

/// 模拟延迟
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockDelay {
    /// [min_ms, max_ms] 区间内随机
    Jitter { min_ms: u64, max_ms: u64 },
    /// 固定延迟
    Fixed(u64),
}

impl MockDelay {
    pub const CONTENT: MockDelay = MockDelay::Jitter { min_ms: 800, max_ms: 1500 };
    pub const QUESTIONS: MockDelay = MockDelay::Jitter { min_ms: 1000, max_ms: 1500 };
    pub const RESEARCH: MockDelay = MockDelay::Fixed(1200);

    pub fn sample(self) -> Duration {
        let ms = match self {
            MockDelay::Jitter { min_ms, max_ms } => rand::thread_rng().gen_range(min_ms..=max_ms),
            MockDelay::Fixed(ms) => ms,
        };
        Duration::from_millis(ms)
    }

    pub async fn wait(self) {
        tokio::time::sleep(self.sample()).await;
    }
}

/// 关键字回复规则：任一关键字命中即由 `respond` 生成回复
struct Responder {
    keywords: &'static [&'static str],
    respond: fn(&str) -> &'static str,
}

impl Responder {
    fn matches(&self, lower_prompt: &str) -> bool {
        self.keywords.iter().any(|k| lower_prompt.contains(k))
    }
}

/// 按顺序匹配，第一条命中的规则生效
static RESPONDERS: [Responder; 5] = [
    Responder {
        keywords: &["explain", "what is", "how"],
        respond: explain_topic,
    },
    Responder {
        keywords: &["solve", "calculate", "math"],
        respond: math_help,
    },
    Responder {
        keywords: &["correct answer", "why is"],
        respond: answer_justification,
    },
    Responder {
        keywords: &["study", "prepare", "exam"],
        respond: study_tips,
    },
    Responder {
        keywords: &["research", "academic", "paper"],
        respond: research_guidance,
    },
];

/// 概念讲解的主题词典（顺序即优先级）
static TOPIC_EXPLANATIONS: [(&str, &str); 5] = [
    (
        "photosynthesis",
        "Photosynthesis is the process by which plants convert sunlight, water, and carbon dioxide into glucose and oxygen. The equation is: 6CO₂ + 6H₂O + light energy → C₆H₁₂O₆ + 6O₂. This happens in the chloroplasts, specifically using chlorophyll which gives plants their green color.",
    ),
    (
        "algebra",
        "Algebra is a branch of mathematics that uses letters and symbols to represent numbers and quantities in equations. For example, in the equation 2x + 5 = 11, we solve for x by subtracting 5 from both sides (2x = 6) and then dividing by 2 (x = 3).",
    ),
    (
        "mitosis",
        "Mitosis is the process of cell division where a single cell divides to produce two identical daughter cells. It has four phases: Prophase, Metaphase, Anaphase, and Telophase (PMAT). This is how your body grows and repairs tissues.",
    ),
    (
        "newton",
        "Newton's Laws of Motion are three fundamental principles: 1) An object at rest stays at rest unless acted upon by a force. 2) Force equals mass times acceleration (F=ma). 3) For every action, there's an equal and opposite reaction.",
    ),
    (
        "democracy",
        "Democracy is a system of government where power is vested in the people, who exercise it directly or through elected representatives. Nigeria practices federal democracy with three tiers: Federal, State, and Local governments.",
    ),
];

const GENERIC_EXPLANATION: &str = "That's a great question! In education, understanding core concepts is key. Let me break this down: The topic you're asking about involves fundamental principles that build upon each other. I recommend studying the basics first, then working through practice problems to solidify your understanding. Would you like me to explain a specific aspect in more detail?";

const DEFAULT_RESPONSE: &str = "I'm your AI learning assistant! I can help you with:\n\n• Explaining difficult concepts in simple terms\n• Solving math and science problems step-by-step\n• Providing study tips for WAEC and JAMB\n• Answering questions about your subjects\n• Helping with research and essay writing\n\nJust ask me anything about your studies, and I'll do my best to help you understand!";

fn explain_topic(lower_prompt: &str) -> &'static str {
    TOPIC_EXPLANATIONS
        .iter()
        .find(|(topic, _)| lower_prompt.contains(topic))
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_EXPLANATION)
}

fn math_help(_: &str) -> &'static str {
    "To solve mathematical problems, follow these steps: 1) Identify what you're solving for. 2) Write down the given information. 3) Choose the appropriate formula or method. 4) Substitute values and solve step by step. 5) Check your answer by substituting back. Remember: practice makes perfect! Would you like me to walk through a specific example?"
}

fn answer_justification(_: &str) -> &'static str {
    "The correct answer relates to the fundamental concepts we've studied. When approaching such questions, first eliminate obviously wrong options, then analyze the remaining choices based on your knowledge of the subject. The key principle here involves understanding how the core concepts apply to this specific scenario."
}

fn study_tips(_: &str) -> &'static str {
    "Here are effective study strategies for WAEC/JAMB: 1) Create a study timetable and stick to it. 2) Practice with past questions - they reveal exam patterns. 3) Understand concepts rather than memorizing. 4) Use active recall by testing yourself. 5) Take regular breaks using the Pomodoro technique. 6) Form study groups for discussion. 7) Get enough sleep before exams!"
}

fn research_guidance(_: &str) -> &'static str {
    "For academic research, I recommend: 1) Start with a clear research question. 2) Use reputable sources like Google Scholar, JSTOR, and ResearchGate. 3) Take organized notes with proper citations. 4) Create an outline before writing. 5) Use the IMRaD structure for scientific papers. 6) Always cite your sources properly using APA or MLA format."
}

/// 按关键字分类生成固定回复
pub fn mock_response(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    RESPONDERS
        .iter()
        .find(|r| r.matches(&lower))
        .map(|r| (r.respond)(&lower))
        .unwrap_or(DEFAULT_RESPONSE)
}

/// 从题库随机抽取 `count` 道题（最多 10 道），序号从 1 重排
pub fn mock_questions(subject: &str, count: usize) -> Vec<Question> {
    let mut picked: Vec<_> = bank_for(subject).iter().collect();
    picked.shuffle(&mut rand::thread_rng());

    picked
        .into_iter()
        .take(count)
        .zip(1u32..)
        .map(|(bq, id)| bq.to_question(id, subject))
        .collect()
}

/// 固定的研究摘要，只有摘要文字引用查询内容
pub fn mock_research(query: &str) -> ResearchResult {
    ResearchResult {
        summary: format!(
            "The topic \"{query}\" is an important area of study in education. Understanding this concept helps students develop critical thinking skills and apply knowledge to real-world situations. This topic has significant relevance in the Nigerian educational curriculum, particularly for WAEC and JAMB examinations.\n\nResearch in this area has shown that effective learning requires both theoretical understanding and practical application. Teachers can enhance student comprehension by using interactive methods, visual aids, and real-life examples."
        ),
        key_points: [
            "Foundational concepts are essential for advanced understanding",
            "Regular practice improves retention and application skills",
            "Connecting theory to real-world examples enhances learning",
            "Group discussions promote deeper understanding",
            "Assessment should focus on comprehension, not just memorization",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        sources: [
            ("Nigerian Educational Research Council", "https://nerc.gov.ng"),
            ("WAEC Syllabus Guide", "https://waec.org.ng"),
            ("Khan Academy", "https://khanacademy.org"),
        ]
        .into_iter()
        .map(|(title, url)| Source {
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect(),
        related_topics: [
            "Teaching methodologies",
            "Student assessment strategies",
            "Curriculum development",
            "Educational technology",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_explain_topic_lookup() {
        assert_eq!(mock_response("Explain PHOTOSYNTHESIS to me"), TOPIC_EXPLANATIONS[0].1);
        assert_eq!(mock_response("what is mitosis?"), TOPIC_EXPLANATIONS[2].1);
        assert_eq!(mock_response("How does gravity work"), GENERIC_EXPLANATION);
    }

    #[test]
    fn test_category_order() {
        // "explain" 先于 "solve" 检查
        assert_eq!(mock_response("Explain how to solve algebra"), TOPIC_EXPLANATIONS[1].1);
        assert_eq!(mock_response("Solve 2x = 4"), math_help(""));
        assert_eq!(mock_response("Why is B the correct answer?"), answer_justification(""));
        assert_eq!(mock_response("Tips to prepare for my exam"), study_tips(""));
        assert_eq!(mock_response("Help with my research paper"), research_guidance(""));
    }

    #[test]
    fn test_default_response() {
        assert_eq!(mock_response(""), DEFAULT_RESPONSE);
        assert_eq!(mock_response("Hello there"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_mock_questions_count_and_ids() {
        for count in [1, 5, 10, 25] {
            let questions = mock_questions("Chemistry", count);
            assert_eq!(questions.len(), count.min(10));
            let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
            let expected: Vec<u32> = (1..=count.min(10) as u32).collect();
            assert_eq!(ids, expected);
        }
        assert!(mock_questions("Chemistry", 0).is_empty());
    }

    #[test]
    fn test_mock_questions_are_distinct() {
        let questions = mock_questions("English", 10);
        let texts: HashSet<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts.len(), 10);
    }

    #[test]
    fn test_mock_research_embeds_query() {
        let research = mock_research("Climate change");
        assert!(research.summary.contains("\"Climate change\""));
        assert_eq!(research.key_points.len(), 5);
        assert_eq!(research.sources.len(), 3);
        assert_eq!(research.related_topics.len(), 4);
    }

    #[test]
    fn test_delay_ranges() {
        for _ in 0..50 {
            let d = MockDelay::CONTENT.sample().as_millis();
            assert!((800..=1500).contains(&d));
        }
        assert_eq!(MockDelay::RESEARCH.sample(), Duration::from_millis(1200));
    }
}
