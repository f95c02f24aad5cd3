use secrecy::SecretString;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://wayfound.db";
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Error, Debug)]
#[error("Invalid value for {key}: {value:?}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

/// 运行配置, 全部来自环境变量 (.env 由 main 先加载)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    /// 缺失时只用模板生成, 不是启动错误
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    pub openai_model: String,
    pub generation_timeout: Duration,
    pub ai_domain_classification: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            database_url: text("DATABASE_URL", DEFAULT_DATABASE_URL),
            database_max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            host: parse(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse(&lookup, "PORT", 8000)?,
            openai_api_key: lookup("OPENAI_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_api_base: text("OPENAI_API_BASE", DEFAULT_API_BASE),
            openai_model: text("OPENAI_MODEL", DEFAULT_MODEL),
            generation_timeout: Duration::from_secs(parse(&lookup, "GENERATION_TIMEOUT_SECS", 60)?),
            ai_domain_classification: parse(&lookup, "AI_DOMAIN_CLASSIFICATION", false)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite://wayfound.db");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.generation_timeout, Duration::from_secs(60));
        assert!(!config.ai_domain_classification);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "9000"),
            ("HOST", "127.0.0.1"),
            ("OPENAI_API_KEY", "sk-abc"),
            ("AI_DOMAIN_CLASSIFICATION", "true"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert!(config.openai_api_key.is_some());
        assert!(config.ai_domain_classification);
    }

    #[test]
    fn blank_key_means_fallback_only() {
        assert!(config(&[("OPENAI_API_KEY", "  ")]).unwrap().openai_api_key.is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid value for PORT: "eighty""#);
    }
}
