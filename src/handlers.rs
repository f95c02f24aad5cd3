// src/handlers.rs
use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};

use crate::db;
use crate::AppState;

// --- 1. 根路径 (GET /) ---
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Wayfound API is running! 🚀" }))
}

// --- 2. 健康检查 (GET /health) ---
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let database_ok = db::ping(state.repo.pool()).await;
    if !database_ok {
        tracing::warn!("Health check: database unavailable");
    }

    Json(json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "database": if database_ok { "connected" } else { "unavailable" },
        "ai_generation": state.generator.is_ai_enabled(),
    }))
}

// --- 3. GraphQL 执行 (POST /graphql) ---
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

// --- 4. GraphiQL 调试页面 (GET /graphql) ---
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
