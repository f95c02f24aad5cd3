// src/error.rs
use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal,

    #[error("Validation error: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl AppError {
    /// 对外的错误码和信息, 不暴露内部细节
    fn public(&self) -> (&'static str, String) {
        match self {
            AppError::Database(e) => {
                // 后台记录详细错误
                tracing::error!("Database Error: {:?}", e);

                let unique_violation = e
                    .as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false);
                if unique_violation {
                    ("CONFLICT", "Record already exists".to_string())
                } else {
                    ("INTERNAL_SERVER_ERROR", "Database operation failed".to_string())
                }
            }
            AppError::Auth(msg) => ("UNAUTHORIZED", msg.clone()),
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Conflict(msg) => ("CONFLICT", msg.clone()),
            AppError::BadRequest(msg) => ("BAD_REQUEST", msg.clone()),
            AppError::Internal => ("INTERNAL_SERVER_ERROR", "Internal server error".to_string()),
            AppError::ValidationError(e) => ("BAD_REQUEST", format!("Invalid input: {}", e)),
        }
    }
}

// 核心逻辑：将我们的错误转换为 GraphQL 错误 (message + extensions.code)
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let (code, message) = self.public();
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &async_graphql::Error) -> Option<async_graphql::Value> {
        err.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned()
    }

    #[test]
    fn not_found_keeps_its_message() {
        let err = AppError::NotFound("Roadmap abc not found".into()).extend();
        assert_eq!(err.message, "Roadmap abc not found");
        assert_eq!(code(&err), Some(async_graphql::Value::from("NOT_FOUND")));
    }

    #[test]
    fn database_errors_are_generic() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut).extend();
        assert_eq!(err.message, "Database operation failed");
        assert_eq!(code(&err), Some(async_graphql::Value::from("INTERNAL_SERVER_ERROR")));
    }
}
