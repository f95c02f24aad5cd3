//! 对外的 GraphQL 类型, 以及从数据库记录的转换

use async_graphql::{Enum, Json, SimpleObject};
use chrono::{DateTime, Utc};

use crate::models::{ProgressRecord, RoadmapRecord, SurveyRecord, UserRecord};
use crate::roadmap::{self, SurveyResponses};

#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            is_active: record.is_active,
            created_at: record.created_at,
            last_login: record.last_login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum RoadmapStatus {
    Active,
    Completed,
    Paused,
    Abandoned,
}

impl RoadmapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapStatus::Active => "active",
            RoadmapStatus::Completed => "completed",
            RoadmapStatus::Paused => "paused",
            RoadmapStatus::Abandoned => "abandoned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(RoadmapStatus::Active),
            "completed" => Some(RoadmapStatus::Completed),
            "paused" => Some(RoadmapStatus::Paused),
            "abandoned" => Some(RoadmapStatus::Abandoned),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Milestone {
    pub id: String,
    pub day: i32,
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
    pub resources: Vec<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Progress {
    pub id: String,
    pub roadmap_id: String,
    pub milestone_id: String,
    pub milestone_day: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProgressRecord> for Progress {
    fn from(record: ProgressRecord) -> Self {
        Self {
            id: record.id,
            roadmap_id: record.roadmap_id,
            milestone_id: record.milestone_id,
            milestone_day: record.milestone_day,
            completed: record.completed,
            completed_at: record.completed_at,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Roadmap {
    pub id: String,
    pub user_id: String,
    pub goal_text: String,
    pub domain: Option<String>,
    pub timeline_days: i32,
    pub milestones: Vec<Milestone>,
    pub estimated_hours_total: Option<i64>,
    pub difficulty_level: Option<String>,
    pub status: RoadmapStatus,
    pub progress: Vec<Progress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Roadmap {
    /// 里程碑的完成状态以进度表为准, 读取时合并
    pub fn from_record(record: RoadmapRecord, progress: Vec<ProgressRecord>) -> Self {
        let progress: Vec<ProgressRecord> = progress
            .into_iter()
            .filter(|p| p.roadmap_id == record.id)
            .collect();

        let milestones = record
            .milestones
            .0
            .into_iter()
            .map(|m| milestone_view(m, &progress))
            .collect();

        let status = RoadmapStatus::parse(&record.status).unwrap_or_else(|| {
            tracing::warn!(roadmap_id = %record.id, status = %record.status, "Unknown roadmap status");
            RoadmapStatus::Active
        });

        Self {
            id: record.id,
            user_id: record.user_id,
            goal_text: record.goal_text,
            domain: record.domain,
            timeline_days: record.timeline_days,
            milestones,
            estimated_hours_total: record.estimated_hours_total,
            difficulty_level: record.difficulty_level,
            status,
            progress: progress.into_iter().map(Progress::from).collect(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            completed_at: record.completed_at,
        }
    }
}

fn milestone_view(milestone: roadmap::Milestone, progress: &[ProgressRecord]) -> Milestone {
    let completed = progress
        .iter()
        .any(|p| p.milestone_id == milestone.id && p.completed);

    Milestone {
        id: milestone.id,
        day: milestone.day,
        title: milestone.title,
        description: milestone.description,
        tasks: milestone.tasks,
        resources: milestone.resources,
        completed,
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Survey {
    pub id: String,
    pub user_id: String,
    pub responses: Json<SurveyResponses>,
    pub goal_domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SurveyRecord> for Survey {
    fn from(record: SurveyRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            responses: Json(record.responses.0),
            goal_domain: record.goal_domain,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::build_fallback_roadmap;

    fn record() -> RoadmapRecord {
        let plan = build_fallback_roadmap("Learn to make ramen from scratch", 28, None);
        RoadmapRecord {
            id: "r1".into(),
            user_id: "u1".into(),
            goal_text: "Learn to make ramen from scratch".into(),
            domain: Some("cooking".into()),
            timeline_days: 28,
            milestones: sqlx::types::Json(plan.milestones),
            estimated_hours_total: Some(14),
            difficulty_level: Some("Intermediate".into()),
            status: "active".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
        }
    }

    fn progress(roadmap_id: &str, milestone_id: &str, completed: bool) -> ProgressRecord {
        ProgressRecord {
            id: format!("p-{milestone_id}"),
            roadmap_id: roadmap_id.into(),
            milestone_id: milestone_id.into(),
            milestone_day: 8,
            completed,
            completed_at: completed.then(Utc::now),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn completion_comes_from_progress() {
        let roadmap = Roadmap::from_record(
            record(),
            vec![
                progress("r1", "milestone_2", true),
                progress("r1", "milestone_3", false),
                progress("other", "milestone_1", true),
                progress("r1", "milestone_99", true),
            ],
        );

        let completed: Vec<bool> = roadmap.milestones.iter().map(|m| m.completed).collect();
        assert_eq!(completed, vec![false, true, false, false]);
        assert_eq!(roadmap.progress.len(), 3);
        assert_eq!(roadmap.status, RoadmapStatus::Active);
    }

    #[test]
    fn status_strings_round_trip() {
        for status in [
            RoadmapStatus::Active,
            RoadmapStatus::Completed,
            RoadmapStatus::Paused,
            RoadmapStatus::Abandoned,
        ] {
            assert_eq!(RoadmapStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RoadmapStatus::parse("archived"), None);
    }
}
