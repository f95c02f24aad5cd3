// src/models.rs
use async_graphql::{InputObject, Json};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use crate::roadmap::{Milestone, SurveyResponses};

// --- 1. User 模型 ---
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, InputObject, Validate)]
pub struct CreateUserInput {
    #[validate(email(message = "邮箱格式不正确"))]
    pub email: String,
    #[validate(length(min = 6, message = "密码至少需要 6 位"))]
    pub password: String,
}

#[derive(Debug, InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

// --- 2. Roadmap 模型 (里程碑整体存成 JSON) ---
#[derive(Debug, Clone, FromRow)]
pub struct RoadmapRecord {
    pub id: String,
    pub user_id: String,
    pub goal_text: String,
    pub domain: Option<String>,
    pub timeline_days: i32,
    pub milestones: sqlx::types::Json<Vec<Milestone>>,
    pub estimated_hours_total: Option<i64>,
    pub difficulty_level: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// 待写入的路线图 (生成和校验都已完成)
#[derive(Debug, Clone)]
pub struct NewRoadmap {
    pub user_id: String,
    pub goal_text: String,
    pub domain: String,
    pub timeline_days: i32,
    pub milestones: Vec<Milestone>,
    pub estimated_hours_total: i64,
    pub difficulty_level: String,
}

#[derive(Debug, InputObject, Validate)]
pub struct CreateRoadmapInput {
    #[validate(length(min = 1, max = 500, message = "目标不能为空, 且不超过 500 字"))]
    pub goal_text: String,
    #[graphql(default = 30)]
    #[validate(range(min = 1, max = 365, message = "周期需在 1-365 天之间"))]
    pub timeline_days: i32,
    /// 问卷回答 (可选), 必须是 JSON 对象
    pub survey: Option<Json<serde_json::Value>>,
}

// --- 3. Survey 模型 ---
#[derive(Debug, Clone, FromRow)]
pub struct SurveyRecord {
    pub id: String,
    pub user_id: String,
    pub responses: sqlx::types::Json<SurveyResponses>,
    pub goal_domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSurvey {
    pub responses: SurveyResponses,
    pub goal_domain: Option<String>,
}

#[derive(Debug, InputObject, Validate)]
pub struct CreateSurveyInput {
    pub responses: Json<serde_json::Value>,
    #[validate(length(max = 100))]
    pub goal_domain: Option<String>,
}

// --- 4. Progress 模型 ---
#[derive(Debug, Clone, FromRow)]
pub struct ProgressRecord {
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

#[derive(Debug, InputObject, Validate)]
pub struct UpdateProgressInput {
    #[validate(length(min = 1, max = 100))]
    pub milestone_id: String,
    pub completed: bool,
    #[validate(length(max = 2000, message = "笔记不能超过 2000 字"))]
    pub notes: Option<String>,
}
