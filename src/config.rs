use std::net::SocketAddr;
use std::str::FromStr;
use std::{env, fmt};

use axum::http::HeaderValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,

    pub app_env: AppEnv,
    // Parsed at startup: a typo'd origin fails boot instead of silently
    // shrinking the allow-list.
    pub cors_allowed_origins: Vec<HeaderValue>,

    // Shared HMAC secret for signing/verifying access tokens. Injected into
    // TokenService at startup; nothing else reads it.
    pub jwt_secret: String,
    // Token lifetime (seconds)
    pub token_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins =
            parse_allowed_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())?;

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86_400); // 24h

        Ok(Config {
            addr,
            database_url,
            app_env,
            cors_allowed_origins,
            jwt_secret,
            token_ttl_seconds,
        })
    }
}

fn parse_allowed_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|_| ConfigError::Invalid("CORS_ALLOWED_ORIGINS"))
        })
        .collect()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the signing secret
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_parses_and_trims() {
        let origins =
            parse_allowed_origins("https://a.example, https://b.example ,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], HeaderValue::from_static("https://a.example"));
    }

    #[test]
    fn empty_variable_means_no_allow_list() {
        assert!(parse_allowed_origins("").unwrap().is_empty());
    }

    #[test]
    fn unparseable_origin_fails_instead_of_being_dropped() {
        assert!(matches!(
            parse_allowed_origins("https://ok.example,bad\norigin"),
            Err(ConfigError::Invalid("CORS_ALLOWED_ORIGINS"))
        ));
    }
}
