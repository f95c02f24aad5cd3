use serde::{Deserialize, Serialize};

use super::domain::Domain;

/// 路线图中的单个里程碑 (以 JSON 形式嵌在 roadmaps.milestones 列中)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub day: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

/// 生成结果 (AI 或模板兜底), 尚未持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRoadmap {
    pub domain: Domain,
    pub estimated_hours_total: u32,
    pub difficulty_level: String,
    pub milestones: Vec<Milestone>,
}
