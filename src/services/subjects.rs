//! 学科目录
//!
//! WAEC/JAMB 五门核心学科及各自的主题列表。

use serde::Serialize;

/// 学科
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Mathematics,
    English,
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// 所有学科（按界面展示顺序）
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::English,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    /// 显示名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::English => "English",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }

    /// 按名称查找，忽略大小写和首尾空白
    pub fn from_name(name: &str) -> Option<Subject> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// 主题列表
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Subject::Mathematics => &["Algebra", "Geometry", "Trigonometry", "Statistics", "Calculus"],
            Subject::English => &["Grammar", "Comprehension", "Essay Writing", "Literature", "Vocabulary"],
            Subject::Physics => &["Mechanics", "Electricity", "Waves", "Optics", "Heat"],
            Subject::Chemistry => &[
                "Organic Chemistry",
                "Inorganic Chemistry",
                "Physical Chemistry",
                "Electrochemistry",
                "Atomic Structure",
            ],
            Subject::Biology => &["Cell Biology", "Genetics", "Ecology", "Human Physiology", "Plant Biology"],
        }
    }

    /// 默认主题（第一个）
    pub fn default_topic(self) -> &'static str {
        self.topics()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Subject::from_name("Biology"), Some(Subject::Biology));
        assert_eq!(Subject::from_name("  chemistry "), Some(Subject::Chemistry));
        assert_eq!(Subject::from_name("Economics"), None);
        assert_eq!(Subject::from_name(""), None);
    }

    #[test]
    fn test_every_subject_has_five_topics() {
        for subject in Subject::ALL {
            assert_eq!(subject.topics().len(), 5, "{}", subject.name());
        }
        assert_eq!(Subject::Physics.default_topic(), "Mechanics");
    }
}
