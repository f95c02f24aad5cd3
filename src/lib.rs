use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod repository;
pub mod roadmap;
pub mod service;

pub use error::AppError;

use graphql::{build_schema, AppSchema};
use handlers::*;
use repository::Repository;
use roadmap::RoadmapGenerator;

#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub generator: Arc<RoadmapGenerator>,
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(repo: Repository, generator: RoadmapGenerator) -> Self {
        let generator = Arc::new(generator);
        let schema = build_schema(repo.clone(), generator.clone());
        Self {
            repo,
            generator,
            schema,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/graphql", get(graphiql_handler).post(graphql_handler))
        .with_state(state)
        .layer(cors)
}
