use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use super::types::{Progress, Roadmap, RoadmapStatus, Survey, User};
use crate::error::AppResult;
use crate::models::{
    CreateRoadmapInput, CreateSurveyInput, CreateUserInput, LoginInput, UpdateProgressInput,
};
use crate::repository::Repository;
use crate::roadmap::RoadmapGenerator;
use crate::service;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(repo: Repository, generator: Arc<RoadmapGenerator>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .data(generator)
        .finish()
}

// AppError 转成带 code 的 GraphQL 错误
fn gql<T>(result: AppResult<T>) -> async_graphql::Result<T> {
    result.map_err(|e| e.extend())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> &'static str {
        "Hello from Wayfound!"
    }

    async fn user_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i64> {
        let repo = ctx.data::<Repository>()?;
        gql(repo.count_users().await)
    }

    async fn user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<User> {
        let repo = ctx.data::<Repository>()?;
        gql(service::get_user(repo, &id).await)
    }

    async fn roadmap(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Roadmap> {
        let repo = ctx.data::<Repository>()?;
        gql(service::get_roadmap(repo, &id).await)
    }

    async fn user_roadmaps(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Vec<Roadmap>> {
        let repo = ctx.data::<Repository>()?;
        gql(service::user_roadmaps(repo, &user_id).await)
    }

    async fn user_surveys(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<Vec<Survey>> {
        let repo = ctx.data::<Repository>()?;
        gql(service::user_surveys(repo, &user_id).await)
    }

    async fn roadmap_progress(
        &self,
        ctx: &Context<'_>,
        roadmap_id: String,
    ) -> async_graphql::Result<Vec<Progress>> {
        let repo = ctx.data::<Repository>()?;
        gql(service::roadmap_progress(repo, &roadmap_id).await)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        input: CreateUserInput,
    ) -> async_graphql::Result<User> {
        let repo = ctx.data::<Repository>()?;
        gql(service::create_user(repo, input).await)
    }

    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> async_graphql::Result<User> {
        let repo = ctx.data::<Repository>()?;
        gql(service::login(repo, input).await)
    }

    async fn create_survey(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        input: CreateSurveyInput,
    ) -> async_graphql::Result<Survey> {
        let repo = ctx.data::<Repository>()?;
        gql(service::create_survey(repo, &user_id, input).await)
    }

    /// 生成并保存路线图. 模型不可用时用模板兜底, 不会因此失败
    async fn create_roadmap(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        input: CreateRoadmapInput,
    ) -> async_graphql::Result<Roadmap> {
        let repo = ctx.data::<Repository>()?;
        let generator = ctx.data::<Arc<RoadmapGenerator>>()?;
        gql(service::create_roadmap(repo, generator, &user_id, input).await)
    }

    async fn update_roadmap_status(
        &self,
        ctx: &Context<'_>,
        roadmap_id: String,
        status: RoadmapStatus,
    ) -> async_graphql::Result<Roadmap> {
        let repo = ctx.data::<Repository>()?;
        gql(service::update_roadmap_status(repo, &roadmap_id, status).await)
    }

    async fn update_progress(
        &self,
        ctx: &Context<'_>,
        roadmap_id: String,
        input: UpdateProgressInput,
    ) -> async_graphql::Result<Progress> {
        let repo = ctx.data::<Repository>()?;
        gql(service::update_progress(repo, &roadmap_id, input).await)
    }

    async fn delete_roadmap(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<bool> {
        let repo = ctx.data::<Repository>()?;
        gql(service::delete_roadmap(repo, &id).await)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<bool> {
        let repo = ctx.data::<Repository>()?;
        gql(service::delete_user(repo, &id).await)
    }
}
