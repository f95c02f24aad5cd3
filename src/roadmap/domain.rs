use serde::{Deserialize, Serialize};
use std::fmt;

/// 目标所属领域 (固定的六个取值)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Cooking,
    Fitness,
    Programming,
    Language,
    Art,
    General,
}

// 按优先级排列: 先匹配到的领域胜出
const KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Cooking,
        &["cook", "recipe", "bake", "food", "kitchen", "chef", "ramen"],
    ),
    (
        Domain::Fitness,
        &["fit", "gym", "workout", "muscle", "weight", "exercise"],
    ),
    (
        Domain::Programming,
        &["code", "program", "python", "javascript", "app", "software"],
    ),
    (
        Domain::Language,
        &["language", "spanish", "french", "italian", "speak"],
    ),
    (Domain::Art, &["paint", "draw", "art", "sketch", "canvas"]),
];

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Cooking,
        Domain::Fitness,
        Domain::Programming,
        Domain::Language,
        Domain::Art,
        Domain::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Cooking => "cooking",
            Domain::Fitness => "fitness",
            Domain::Programming => "programming",
            Domain::Language => "language",
            Domain::Art => "art",
            Domain::General => "general",
        }
    }

    /// 严格解析: 只接受六个标签之一 (忽略大小写和首尾空白)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }

    /// 宽松解析: 无法识别的一律归为 general
    pub fn parse_or_general(value: &str) -> Self {
        Self::parse(value).unwrap_or(Domain::General)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 关键词分类器: 纯函数, 永不失败
pub fn classify_domain(goal_text: &str) -> Domain {
    let goal_lower = goal_text.to_lowercase();

    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| goal_lower.contains(w)))
        .map(|(domain, _)| *domain)
        .unwrap_or(Domain::General)
}
