use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{NewRoadmap, NewSurvey, ProgressRecord, RoadmapRecord, SurveyRecord, UserRecord};
use crate::roadmap::SurveyResponses;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// 所有 SQL 都在这里. 每个方法从连接池取连接, 用完自动归还
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // --- 1. 用户 ---

    pub async fn create_user(&self, email: &str, hashed_password: &str) -> AppResult<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (id, email, hashed_password, is_active, created_at)
             VALUES (?, ?, ?, 1, ?)
             RETURNING *",
        )
        .bind(new_id())
        .bind(email)
        .bind(hashed_password)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_user(&self, id: &str) -> AppResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn touch_last_login(&self, id: &str) -> AppResult<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            "UPDATE users SET last_login = ? WHERE id = ? RETURNING *",
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn count_users(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// 级联删除该用户的路线图、问卷和进度
    pub async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- 2. 路线图 ---

    /// 路线图和 (可选的) 问卷在同一个事务里提交
    pub async fn insert_roadmap(
        &self,
        roadmap: NewRoadmap,
        survey: Option<NewSurvey>,
    ) -> AppResult<RoadmapRecord> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        if let Some(survey) = survey {
            sqlx::query(
                "INSERT INTO surveys (id, user_id, responses, goal_domain, created_at)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(new_id())
            .bind(&roadmap.user_id)
            .bind(Json(&survey.responses))
            .bind(&survey.goal_domain)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        let record = sqlx::query_as::<_, RoadmapRecord>(
            "INSERT INTO roadmaps
                (id, user_id, goal_text, domain, timeline_days, milestones,
                 estimated_hours_total, difficulty_level, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'active', ?, ?)
             RETURNING *",
        )
        .bind(new_id())
        .bind(&roadmap.user_id)
        .bind(&roadmap.goal_text)
        .bind(&roadmap.domain)
        .bind(roadmap.timeline_days)
        .bind(Json(&roadmap.milestones))
        .bind(roadmap.estimated_hours_total)
        .bind(&roadmap.difficulty_level)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    pub async fn find_roadmap(&self, id: &str) -> AppResult<Option<RoadmapRecord>> {
        let roadmap = sqlx::query_as::<_, RoadmapRecord>("SELECT * FROM roadmaps WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(roadmap)
    }

    pub async fn roadmaps_for_user(&self, user_id: &str) -> AppResult<Vec<RoadmapRecord>> {
        let roadmaps = sqlx::query_as::<_, RoadmapRecord>(
            "SELECT * FROM roadmaps WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(roadmaps)
    }

    pub async fn update_roadmap_status(
        &self,
        id: &str,
        status: &str,
    ) -> AppResult<Option<RoadmapRecord>> {
        let now = Utc::now();
        let completed_at = (status == "completed").then_some(now);

        let roadmap = sqlx::query_as::<_, RoadmapRecord>(
            "UPDATE roadmaps SET
                status = ?,
                completed_at = ?,
                updated_at = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(status)
        .bind(completed_at)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(roadmap)
    }

    pub async fn delete_roadmap(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM roadmaps WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- 3. 问卷 ---

    pub async fn create_survey(
        &self,
        user_id: &str,
        responses: &SurveyResponses,
        goal_domain: Option<&str>,
    ) -> AppResult<SurveyRecord> {
        let survey = sqlx::query_as::<_, SurveyRecord>(
            "INSERT INTO surveys (id, user_id, responses, goal_domain, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(new_id())
        .bind(user_id)
        .bind(Json(responses))
        .bind(goal_domain)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(survey)
    }

    pub async fn surveys_for_user(&self, user_id: &str) -> AppResult<Vec<SurveyRecord>> {
        let surveys = sqlx::query_as::<_, SurveyRecord>(
            "SELECT * FROM surveys WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(surveys)
    }

    // --- 4. 进度 ---

    pub async fn progress_for_roadmap(&self, roadmap_id: &str) -> AppResult<Vec<ProgressRecord>> {
        let progress = sqlx::query_as::<_, ProgressRecord>(
            "SELECT * FROM progress WHERE roadmap_id = ? ORDER BY milestone_day, milestone_id",
        )
        .bind(roadmap_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(progress)
    }

    /// 某个用户所有路线图的进度, 一次查出
    pub async fn progress_for_user(&self, user_id: &str) -> AppResult<Vec<ProgressRecord>> {
        let progress = sqlx::query_as::<_, ProgressRecord>(
            "SELECT p.* FROM progress p
             JOIN roadmaps r ON r.id = p.roadmap_id
             WHERE r.user_id = ?
             ORDER BY p.milestone_day, p.milestone_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(progress)
    }

    /// 每个 (路线图, 里程碑) 只有一行; 已完成的保留最初的完成时间
    pub async fn upsert_progress(
        &self,
        roadmap_id: &str,
        milestone_id: &str,
        milestone_day: i32,
        completed: bool,
        notes: Option<&str>,
    ) -> AppResult<ProgressRecord> {
        let now = Utc::now();
        let completed_at = completed.then_some(now);

        let progress = sqlx::query_as::<_, ProgressRecord>(
            "INSERT INTO progress
                (id, roadmap_id, milestone_id, milestone_day, completed, completed_at, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(roadmap_id, milestone_id) DO UPDATE SET
                milestone_day = excluded.milestone_day,
                completed = excluded.completed,
                completed_at = CASE
                    WHEN excluded.completed THEN COALESCE(progress.completed_at, excluded.completed_at)
                    ELSE NULL
                END,
                notes = COALESCE(excluded.notes, progress.notes),
                updated_at = excluded.updated_at
             RETURNING *",
        )
        .bind(new_id())
        .bind(roadmap_id)
        .bind(milestone_id)
        .bind(milestone_day)
        .bind(completed)
        .bind(completed_at)
        .bind(notes)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(progress)
    }
}
