//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on the response envelope.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use stand_api::{create_app, create_app_state, serve};
use stand_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, RateLimitConfig,
    ServerConfig,
};
use stand_core::{Role, UserRepository};
use stand_db::{PgPool, PgUserRepository};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let state = create_app_state(test_config()?).await?;
        let pool = state.service_context().pool().clone();
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Direct database access for state the API cannot reach
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Grant a role outside the API (there is no promotion endpoint)
    pub async fn promote(&self, user_id: Uuid, role: Role) -> Result<()> {
        PgUserRepository::new(self.pool.clone())
            .update_role(user_id, role)
            .await?;
        Ok(())
    }

    fn authed(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .authed(self.client.get(self.url(path)), token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .authed(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .authed(self.client.patch(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .authed(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }
}

/// Configuration from `DATABASE_URL` and `JWT_SECRET`, everything else fixed
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    Ok(AppConfig {
        app: AppSettings {
            name: "stand-api-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: env::var("DATABASE_URL").context("DATABASE_URL not set")?,
            max_connections: 5,
            min_connections: 1,
            run_migrations: true,
            migrations_dir: MIGRATIONS_DIR.to_string(),
        },
        jwt: JwtConfig {
            secret: env::var("JWT_SECRET").context("JWT_SECRET not set")?,
            expires_in: 3600,
            cookie_expires_in_days: 1,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 10_000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    })
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }
    true
}

/// Assert response status and parse the JSON body
pub async fn assert_json(response: Response, expected_status: StatusCode) -> Result<Value> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body = assert_json(response, expected_status).await?;
    body["code"]
        .as_str()
        .map(ToString::to_string)
        .context("error body has no code")
}
