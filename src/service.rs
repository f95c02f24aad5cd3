// src/service.rs
// GraphQL 解析器背后的业务逻辑, 统一返回 AppResult
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::auth::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::graphql::types::{Progress, Roadmap, RoadmapStatus, Survey, User};
use crate::models::{
    CreateRoadmapInput, CreateSurveyInput, CreateUserInput, LoginInput, NewRoadmap, NewSurvey,
    UpdateProgressInput,
};
use crate::repository::Repository;
use crate::roadmap::{RoadmapGenerator, SurveyResponses};

// --- 1. 用户 ---

pub async fn create_user(repo: &Repository, input: CreateUserInput) -> AppResult<User> {
    input.validate()?;

    // 提前检查, 给出更友好的提示; 并发情况下由唯一索引兜底
    if repo.find_user_by_email(&input.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let hashed = hash_password(&input.password)?;
    let user = repo.create_user(&input.email, &hashed).await?;
    info!(user_id = %user.id, "User created");
    Ok(user.into())
}

pub async fn login(repo: &Repository, input: LoginInput) -> AppResult<User> {
    let invalid = || AppError::Auth("Invalid email or password".to_string());

    let user = repo.find_user_by_email(&input.email).await?.ok_or_else(invalid)?;
    if !verify_password(&input.password, &user.hashed_password) {
        return Err(invalid());
    }
    if !user.is_active {
        return Err(AppError::Auth("Account is disabled".to_string()));
    }

    let user = repo.touch_last_login(&user.id).await?;
    Ok(user.into())
}

pub async fn get_user(repo: &Repository, id: &str) -> AppResult<User> {
    repo.find_user(id)
        .await?
        .map(User::from)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
}

pub async fn delete_user(repo: &Repository, id: &str) -> AppResult<bool> {
    if !repo.delete_user(id).await? {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }
    info!(user_id = %id, "User deleted");
    Ok(true)
}

async fn ensure_user(repo: &Repository, user_id: &str) -> AppResult<()> {
    match repo.find_user(user_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("User {} not found", user_id))),
    }
}

// --- 2. 问卷 ---

/// 问卷必须是 JSON 对象; 对象里类型不对的已知字段只会被忽略
fn parse_survey(value: Value) -> AppResult<SurveyResponses> {
    match value {
        Value::Object(map) => Ok(SurveyResponses::from_map(map)),
        _ => Err(AppError::BadRequest(
            "Survey responses must be a JSON object".to_string(),
        )),
    }
}

pub async fn create_survey(
    repo: &Repository,
    user_id: &str,
    input: CreateSurveyInput,
) -> AppResult<Survey> {
    input.validate()?;
    let responses = parse_survey(input.responses.0)?;
    ensure_user(repo, user_id).await?;

    let survey = repo
        .create_survey(user_id, &responses, input.goal_domain.as_deref())
        .await?;
    Ok(survey.into())
}

pub async fn user_surveys(repo: &Repository, user_id: &str) -> AppResult<Vec<Survey>> {
    let surveys = repo.surveys_for_user(user_id).await?;
    Ok(surveys.into_iter().map(Survey::from).collect())
}

// --- 3. 路线图 ---

pub async fn create_roadmap(
    repo: &Repository,
    generator: &RoadmapGenerator,
    user_id: &str,
    input: CreateRoadmapInput,
) -> AppResult<Roadmap> {
    input.validate()?;
    let goal_text = input.goal_text.trim().to_string();
    if goal_text.is_empty() {
        return Err(AppError::BadRequest("Goal text cannot be blank".to_string()));
    }
    let survey = input.survey.map(|json| parse_survey(json.0)).transpose()?;
    ensure_user(repo, user_id).await?;

    // 校验已保证 1..=365
    let timeline_days = input.timeline_days as u32;
    let (plan, source) = generator
        .generate(&goal_text, timeline_days, survey.as_ref())
        .await;

    let new_survey = survey.map(|responses| NewSurvey {
        responses,
        goal_domain: Some(plan.domain.to_string()),
    });
    let record = repo
        .insert_roadmap(
            NewRoadmap {
                user_id: user_id.to_string(),
                goal_text,
                domain: plan.domain.to_string(),
                timeline_days: input.timeline_days,
                milestones: plan.milestones,
                estimated_hours_total: i64::from(plan.estimated_hours_total),
                difficulty_level: plan.difficulty_level,
            },
            new_survey,
        )
        .await?;

    info!(
        roadmap_id = %record.id,
        user_id = %user_id,
        domain = ?record.domain,
        source = ?source,
        "Roadmap created"
    );
    Ok(Roadmap::from_record(record, Vec::new()))
}

pub async fn get_roadmap(repo: &Repository, id: &str) -> AppResult<Roadmap> {
    let record = repo
        .find_roadmap(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {} not found", id)))?;
    let progress = repo.progress_for_roadmap(id).await?;
    Ok(Roadmap::from_record(record, progress))
}

pub async fn user_roadmaps(repo: &Repository, user_id: &str) -> AppResult<Vec<Roadmap>> {
    ensure_user(repo, user_id).await?;

    let records = repo.roadmaps_for_user(user_id).await?;
    let progress = repo.progress_for_user(user_id).await?;

    let roadmaps = records
        .into_iter()
        .map(|record| {
            let own = progress
                .iter()
                .filter(|p| p.roadmap_id == record.id)
                .cloned()
                .collect();
            Roadmap::from_record(record, own)
        })
        .collect();
    Ok(roadmaps)
}

pub async fn update_roadmap_status(
    repo: &Repository,
    roadmap_id: &str,
    status: RoadmapStatus,
) -> AppResult<Roadmap> {
    let record = repo
        .update_roadmap_status(roadmap_id, status.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {} not found", roadmap_id)))?;
    let progress = repo.progress_for_roadmap(roadmap_id).await?;
    Ok(Roadmap::from_record(record, progress))
}

pub async fn delete_roadmap(repo: &Repository, id: &str) -> AppResult<bool> {
    if !repo.delete_roadmap(id).await? {
        return Err(AppError::NotFound(format!("Roadmap {} not found", id)));
    }
    Ok(true)
}

// --- 4. 进度 ---

pub async fn roadmap_progress(repo: &Repository, roadmap_id: &str) -> AppResult<Vec<Progress>> {
    if repo.find_roadmap(roadmap_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Roadmap {} not found", roadmap_id)));
    }
    let progress = repo.progress_for_roadmap(roadmap_id).await?;
    Ok(progress.into_iter().map(Progress::from).collect())
}

pub async fn update_progress(
    repo: &Repository,
    roadmap_id: &str,
    input: UpdateProgressInput,
) -> AppResult<Progress> {
    input.validate()?;

    let roadmap = repo
        .find_roadmap(roadmap_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {} not found", roadmap_id)))?;

    // 里程碑必须在写入时存在, 天数从里程碑冗余过来
    let milestone = roadmap
        .milestones
        .0
        .iter()
        .find(|m| m.id == input.milestone_id)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Milestone {} not found in roadmap {}",
                input.milestone_id, roadmap_id
            ))
        })?;

    let progress = repo
        .upsert_progress(
            roadmap_id,
            &milestone.id,
            milestone.day,
            input.completed,
            input.notes.as_deref(),
        )
        .await?;
    Ok(progress.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};
    use async_graphql::Json;
    use serde_json::json;
    use tempfile::TempDir;

    async fn setup() -> (Repository, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("service.db").display());
        let pool = create_pool(&url, 1).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (Repository::new(pool), dir)
    }

    async fn user(repo: &Repository, email: &str) -> User {
        create_user(
            repo,
            CreateUserInput {
                email: email.to_string(),
                password: "secret-pass".to_string(),
            },
        )
        .await
        .unwrap()
    }

    fn roadmap_input(goal: &str, days: i32, survey: Option<Value>) -> CreateRoadmapInput {
        CreateRoadmapInput {
            goal_text: goal.to_string(),
            timeline_days: days,
            survey: survey.map(Json),
        }
    }

    #[tokio::test]
    async fn login_checks_password_and_records_time() {
        let (repo, _dir) = setup().await;
        let created = user(&repo, "login@example.com").await;
        assert!(created.last_login.is_none());

        let wrong = login(
            &repo,
            LoginInput {
                email: "login@example.com".into(),
                password: "nope-nope".into(),
            },
        )
        .await;
        assert!(matches!(wrong, Err(AppError::Auth(_))));

        let ok = login(
            &repo,
            LoginInput {
                email: "login@example.com".into(),
                password: "secret-pass".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(ok.id, created.id);
        assert!(ok.last_login.is_some());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (repo, _dir) = setup().await;
        user(&repo, "twice@example.com").await;
        let err = create_user(
            &repo,
            CreateUserInput {
                email: "twice@example.com".into(),
                password: "another-pass".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn roadmap_with_survey_is_stored_together() {
        let (repo, _dir) = setup().await;
        let owner = user(&repo, "cook@example.com").await;
        let generator = RoadmapGenerator::fallback_only();

        let survey = json!({"skillLevel": "Complete Beginner", "timePerDay": "30 minutes"});
        let roadmap = create_roadmap(
            &repo,
            &generator,
            &owner.id,
            roadmap_input("Learn to make ramen from scratch", 28, Some(survey)),
        )
        .await
        .unwrap();

        assert_eq!(roadmap.domain.as_deref(), Some("cooking"));
        assert_eq!(roadmap.difficulty_level.as_deref(), Some("Beginner"));
        assert_eq!(roadmap.estimated_hours_total, Some(14));
        assert!(roadmap.milestones.iter().all(|m| !m.completed));

        let surveys = user_surveys(&repo, &owner.id).await.unwrap();
        assert_eq!(surveys.len(), 1);
        assert_eq!(surveys[0].goal_domain.as_deref(), Some("cooking"));
        assert_eq!(
            surveys[0].responses.0.skill_level.as_deref(),
            Some("Complete Beginner")
        );
    }

    #[tokio::test]
    async fn mistyped_survey_answer_does_not_block_roadmap() {
        let (repo, _dir) = setup().await;
        let owner = user(&repo, "loose@example.com").await;
        let generator = RoadmapGenerator::fallback_only();

        let survey = json!({"skillLevel": 3, "timePerDay": "1 hour", "specificInterests": [1, 2]});
        let roadmap = create_roadmap(
            &repo,
            &generator,
            &owner.id,
            roadmap_input("Learn to make ramen from scratch", 28, Some(survey)),
        )
        .await
        .unwrap();

        assert_eq!(roadmap.difficulty_level.as_deref(), Some("Intermediate"));
        assert_eq!(roadmap.estimated_hours_total, Some(28));

        let surveys = user_surveys(&repo, &owner.id).await.unwrap();
        assert_eq!(surveys[0].responses.0.skill_level, None);
        assert_eq!(surveys[0].responses.0.time_per_day.as_deref(), Some("1 hour"));
    }

    #[tokio::test]
    async fn roadmap_input_is_validated() {
        let (repo, _dir) = setup().await;
        let owner = user(&repo, "v@example.com").await;
        let generator = RoadmapGenerator::fallback_only();

        let too_long = create_roadmap(&repo, &generator, &owner.id, roadmap_input("learn", 400, None)).await;
        assert!(matches!(too_long, Err(AppError::ValidationError(_))));

        let blank = create_roadmap(&repo, &generator, &owner.id, roadmap_input("   ", 30, None)).await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));

        let bad_survey = create_roadmap(
            &repo,
            &generator,
            &owner.id,
            roadmap_input("learn guitar", 30, Some(json!(["not", "an", "object"]))),
        )
        .await;
        assert!(matches!(bad_survey, Err(AppError::BadRequest(_))));

        let no_user = create_roadmap(&repo, &generator, "missing", roadmap_input("learn guitar", 30, None)).await;
        assert!(matches!(no_user, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn progress_marks_milestone_completed() {
        let (repo, _dir) = setup().await;
        let owner = user(&repo, "p@example.com").await;
        let generator = RoadmapGenerator::fallback_only();
        let roadmap = create_roadmap(
            &repo,
            &generator,
            &owner.id,
            roadmap_input("Learn to make ramen from scratch", 28, None),
        )
        .await
        .unwrap();
        let second = roadmap.milestones[1].clone();

        let progress = update_progress(
            &repo,
            &roadmap.id,
            UpdateProgressInput {
                milestone_id: second.id.clone(),
                completed: true,
                notes: Some("broth done".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(progress.milestone_day, second.day);

        let reloaded = get_roadmap(&repo, &roadmap.id).await.unwrap();
        let completed: Vec<&str> = reloaded
            .milestones
            .iter()
            .filter(|m| m.completed)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(completed, vec![second.id.as_str()]);

        let unknown = update_progress(
            &repo,
            &roadmap.id,
            UpdateProgressInput {
                milestone_id: "milestone_42".into(),
                completed: true,
                notes: None,
            },
        )
        .await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let (repo, _dir) = setup().await;
        assert!(matches!(get_roadmap(&repo, "nope").await, Err(AppError::NotFound(_))));
        assert!(matches!(user_roadmaps(&repo, "nope").await, Err(AppError::NotFound(_))));
        assert!(matches!(delete_roadmap(&repo, "nope").await, Err(AppError::NotFound(_))));
        assert!(matches!(delete_user(&repo, "nope").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            update_roadmap_status(&repo, "nope", RoadmapStatus::Paused).await,
            Err(AppError::NotFound(_))
        ));
    }
}
