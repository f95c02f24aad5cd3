// src/main.rs
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfound::config::Config;
use wayfound::llm::{OpenAiClient, TextGenerator};
use wayfound::repository::Repository;
use wayfound::roadmap::RoadmapGenerator;
use wayfound::{create_router, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wayfound=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ 数据库连接成功!");

    // 没有 API Key 时只用模板生成
    let client: Option<Arc<dyn TextGenerator>> = match &config.openai_api_key {
        Some(key) => {
            let client = OpenAiClient::new(
                key.clone(),
                &config.openai_api_base,
                &config.openai_model,
                config.generation_timeout,
            )
            .context("Failed to build model client")?;
            tracing::info!("🤖 AI 生成已启用, 模型: {}", client.model());
            Some(Arc::new(client) as Arc<dyn TextGenerator>)
        }
        None => {
            tracing::warn!("OPENAI_API_KEY 未设置, 只使用模板生成路线图");
            None
        }
    };

    let generator =
        RoadmapGenerator::new(client).with_ai_classification(config.ai_domain_classification);
    let state = AppState::new(Repository::new(pool), generator);
    let app = create_router(state);

    let addr = config.bind_addr();
    tracing::info!("🚀 服务器运行在: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
