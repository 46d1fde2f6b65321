//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub expires_in: i64,
    /// `jwt` cookie lifetime in days
    #[serde(default = "default_cookie_expiry_days")]
    pub cookie_expires_in_days: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "stand-api".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_token_expiry() -> i64 {
    7_776_000 // 90 days
}

fn default_cookie_expiry_days() -> i64 {
    90
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Read and parse an optional variable, falling back when absent or unparsable
fn env_or<T: FromStr>(key: &str, default: fn() -> T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(default)
}

/// Upper bound for token and cookie lifetimes
const MAX_LIFETIME_DAYS: i64 = 3650;

/// Read a lifetime and reject values outside `1..=max`
fn bounded(key: &'static str, default: fn() -> i64, max: i64) -> Result<i64, ConfigError> {
    let value = env_or(key, default);
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue(key, value.to_string()))
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let port = required("API_PORT")?;
        let port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("API_PORT", port))?;

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", default_min_connections),
                run_migrations: env_or("DATABASE_RUN_MIGRATIONS", default_run_migrations),
                migrations_dir: env::var("MIGRATIONS_DIR")
                    .unwrap_or_else(|_| default_migrations_dir()),
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                expires_in: bounded(
                    "JWT_EXPIRES_IN",
                    default_token_expiry,
                    MAX_LIFETIME_DAYS * 24 * 60 * 60,
                )?,
                cookie_expires_in_days: bounded(
                    "JWT_COOKIE_EXPIRES_IN",
                    default_cookie_expiry_days,
                    MAX_LIFETIME_DAYS,
                )?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                ),
                burst: env_or("RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
