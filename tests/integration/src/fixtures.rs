//! Test fixtures and data generators
//!
//! Provides reusable request bodies and signed-up users.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::helpers::{assert_json, TestServer};

pub const PASSWORD: &str = "TestPass123!";

/// Short unique token that fits in a handle
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Signup request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub handle: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            handle: format!("u{suffix}"),
            email: format!("test_{suffix}@example.com"),
            password: PASSWORD.to_string(),
            password_confirm: PASSWORD.to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            email: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Signed-up user with a live token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
    pub signup: SignupRequest,
}

impl TestUser {
    pub async fn signup(server: &TestServer) -> Result<Self> {
        let signup = SignupRequest::unique();
        let response = server.post("/api/v1/user/signup", &signup).await?;
        let body = assert_json(response, StatusCode::CREATED).await?;

        Ok(Self {
            id: uuid_at(&body["data"]["user"]["id"])?,
            token: body["token"].as_str().context("no token")?.to_string(),
            signup,
        })
    }

    pub fn reviews_path(&self) -> String {
        format!("/api/v1/user/{}/review", self.id)
    }

    pub fn favorites_path(&self) -> String {
        format!("/api/v1/user/{}/favorite", self.id)
    }
}

/// Stand body with a unique name
pub fn stand_body() -> Value {
    json!({
        "name": format!("Taco Town {}", unique_suffix()),
        "location": { "coordinates": [-118.24, 34.05], "address": "5th & Main" },
        "hoursOfOp": {
            "friday": { "openTime": "5:00 pm", "closeTime": "11:30 pm" }
        },
        "menu": [{ "name": "Al Pastor", "price": 3.5 }],
        "description": "Late-night tacos"
    })
}

pub fn uuid_at(value: &Value) -> Result<Uuid> {
    value
        .as_str()
        .context("expected a string id")?
        .parse()
        .context("expected a uuid")
}
