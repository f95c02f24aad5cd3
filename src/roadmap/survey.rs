use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

// 已知字段: (camelCase, snake_case)
const KNOWN_KEYS: [(&str, &str); 5] = [
    ("skillLevel", "skill_level"),
    ("timePerDay", "time_per_day"),
    ("learningStyle", "learning_style"),
    ("timelinePreference", "timeline_preference"),
    ("specificInterests", "specific_interests"),
];

/// 问卷回答. 已知字段有名字, 其余原样保留在 `extra` 里
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponses {
    #[serde(default, alias = "skill_level", skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
    #[serde(default, alias = "time_per_day", skip_serializing_if = "Option::is_none")]
    pub time_per_day: Option<String>,
    #[serde(default, alias = "learning_style", skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(
        default,
        alias = "timeline_preference",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeline_preference: Option<String>,
    #[serde(
        default,
        alias = "specific_interests",
        skip_serializing_if = "Option::is_none"
    )]
    pub specific_interests: Option<Interests>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 兴趣既可能是一段文字, 也可能是列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Interests {
    Text(String),
    List(Vec<String>),
}

impl Interests {
    pub fn to_text(&self) -> String {
        match self {
            Interests::Text(text) => text.clone(),
            Interests::List(items) => items.join(", "),
        }
    }
}

/// 问卷里的技能等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    CompleteBeginner,
    SomeExperience,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Complete Beginner" => Some(SkillLevel::CompleteBeginner),
            "Some Experience" => Some(SkillLevel::SomeExperience),
            "Intermediate" => Some(SkillLevel::Intermediate),
            "Advanced" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }

    pub fn difficulty(&self) -> &'static str {
        match self {
            SkillLevel::CompleteBeginner | SkillLevel::SomeExperience => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

/// 每天可投入的时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePerDay {
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoPlusHours,
}

impl TimePerDay {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "15 minutes" => Some(TimePerDay::FifteenMinutes),
            "30 minutes" => Some(TimePerDay::ThirtyMinutes),
            "1 hour" => Some(TimePerDay::OneHour),
            "2+ hours" => Some(TimePerDay::TwoPlusHours),
            _ => None,
        }
    }

    pub fn hours(&self) -> f64 {
        match self {
            TimePerDay::FifteenMinutes => 0.25,
            TimePerDay::ThirtyMinutes => 0.5,
            TimePerDay::OneHour => 1.0,
            TimePerDay::TwoPlusHours => 2.5,
        }
    }
}

impl SurveyResponses {
    pub fn skill(&self) -> Option<SkillLevel> {
        self.skill_level.as_deref().and_then(SkillLevel::from_label)
    }

    pub fn time_budget(&self) -> Option<TimePerDay> {
        self.time_per_day.as_deref().and_then(TimePerDay::from_label)
    }

    /// 宽松解析: 已知字段类型不对就丢弃该字段, 不让整份问卷失败
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let mut dropped = Vec::new();
        for (camel, snake) in KNOWN_KEYS {
            // 两种写法同时出现时以 camelCase 为准
            if map.contains_key(camel) && map.remove(snake).is_some() {
                dropped.push(snake);
            }
            for key in [camel, snake] {
                let usable = match map.get(key) {
                    None => true,
                    Some(value) if key == "specificInterests" || key == "specific_interests" => {
                        serde_json::from_value::<Option<Interests>>(value.clone()).is_ok()
                    }
                    Some(value) => value.is_string() || value.is_null(),
                };
                if !usable {
                    map.remove(key);
                    dropped.push(key);
                }
            }
        }
        if !dropped.is_empty() {
            warn!(fields = ?dropped, "Ignoring malformed survey answers");
        }

        serde_json::from_value(Value::Object(map)).unwrap_or_else(|e| {
            warn!(error = %e, "Survey answers unreadable, using defaults");
            Self::default()
        })
    }
}

/// 未知或缺省时按每天半小时计
pub fn daily_hours(time_per_day: Option<TimePerDay>) -> f64 {
    time_per_day.map(|t| t.hours()).unwrap_or(0.5)
}

/// 无法识别或缺省时为 Intermediate
pub fn difficulty_for(skill: Option<SkillLevel>) -> &'static str {
    skill.map(|s| s.difficulty()).unwrap_or("Intermediate")
}

pub fn total_hours(time_per_day: Option<TimePerDay>, timeline_days: u32) -> u32 {
    (daily_hours(time_per_day) * f64::from(timeline_days)) as u32
}

/// 里程碑数量: 时间越少里程碑越多越小, 时间越多越少越大
pub fn milestone_count(timeline_days: u32, time_per_day: Option<TimePerDay>) -> usize {
    let days = timeline_days as usize;
    match time_per_day {
        Some(TimePerDay::FifteenMinutes) => (days / 4).clamp(3, 8),
        Some(TimePerDay::TwoPlusHours) => (days / 10).clamp(2, 6),
        _ => (days / 7).clamp(2, 6),
    }
}
