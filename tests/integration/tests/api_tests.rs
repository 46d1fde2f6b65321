//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use stand_core::{Role, StandRepository};
use stand_db::PgStandRepository;

/// Stand owner plus a created stand
async fn owner_with_stand(server: &TestServer) -> (TestUser, Value) {
    let owner = TestUser::signup(server).await.unwrap();
    server.promote(owner.id, Role::StandOwner).await.unwrap();

    let response = server
        .post_auth("/api/v1/stand/", &owner.token, &stand_body())
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();
    (owner, body["data"]["stand"].clone())
}

async fn stand_ratings(server: &TestServer, stand_id: &str) -> (i64, f64) {
    let response = server
        .get(&format!("/api/v1/stand/{stand_id}"))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let stand = &body["data"]["stand"];
    (
        stand["ratingsQuantity"].as_i64().unwrap(),
        stand["ratingsAverage"].as_f64().unwrap(),
    )
}

async fn post_review(server: &TestServer, user: &TestUser, stand_id: &str, rating: f64) -> String {
    let response = server
        .post_auth(
            &user.reviews_path(),
            &user.token,
            &json!({ "stand": stand_id, "rating": rating, "text": "Solid" }),
        )
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();
    body["data"]["review"]["id"].as_str().unwrap().to_string()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn test_unknown_route() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/trucks").await.unwrap();
    let body = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["message"], "/api/v1/trucks is not a valid endpoint");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_sets_token_and_cookie() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/user/signup", &request).await.unwrap();
    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["status"], "success");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["handle"], request.handle);
    assert_eq!(body["data"]["user"]["email"], request.email);
    assert!(body["data"]["user"].get("role").is_none());

    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_signup_uniqueness() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let first = TestUser::signup(&server).await.unwrap();

    let mut same_email = SignupRequest::unique();
    same_email.email = first.signup.email.clone();
    let response = server.post("/api/v1/user/signup", &same_email).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "EMAIL_TAKEN"
    );

    let mut same_handle = SignupRequest::unique();
    same_handle.handle = first.signup.handle.clone();
    let response = server.post("/api/v1/user/signup", &same_handle).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "HANDLE_TAKEN"
    );
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let mut request = SignupRequest::unique();
    request.password_confirm = "Different123!".to_string();

    let response = server.post("/api/v1/user/signup", &request).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "PASSWORD_MISMATCH"
    );
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    let login = LoginRequest::from_signup(&user.signup);
    let response = server.post("/api/v1/user/login", &login).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["user"]["id"], user.id.to_string());

    let wrong = LoginRequest {
        email: user.signup.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/v1/user/login", &wrong).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "INVALID_CREDENTIALS"
    );

    let unknown = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: PASSWORD.to_string(),
    };
    let response = server.post("/api/v1/user/login", &unknown).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_cookie_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    let request = SignupRequest::unique();
    let response = client
        .post(server.url("/api/v1/user/signup"))
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = client.get(server.url("/api/v1/user/me")).send().await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["user"]["handle"], request.handle);
}

#[tokio::test]
async fn test_password_change_invalidates_old_tokens() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    // Token timestamps have one-second resolution
    tokio::time::sleep(Duration::from_millis(2100)).await;

    let response = server
        .patch_auth(
            "/api/v1/user/update-password",
            &user.token,
            &json!({
                "passwordCurrent": PASSWORD,
                "password": "NewPass456!",
                "passwordConfirm": "NewPass456!"
            }),
        )
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let new_token = body["token"].as_str().unwrap().to_string();

    let response = server.get_auth("/api/v1/user/me", &user.token).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "PASSWORD_CHANGED"
    );

    let response = server.get_auth("/api/v1/user/me", &new_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(
            "/api/v1/user/login",
            &json!({ "email": user.signup.email, "password": "NewPass456!" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_password_checks_current() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    let response = server
        .patch_auth(
            "/api/v1/user/update-password",
            &user.token,
            &json!({
                "passwordCurrent": "NotMyPass123!",
                "password": "NewPass456!",
                "passwordConfirm": "NewPass456!"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_profile_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    let response = server
        .patch_auth(
            "/api/v1/user/me",
            &user.token,
            &json!({ "firstName": "Ana", "password": "Sneaky123!" }),
        )
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["code"], "FORBIDDEN_FIELD");
    assert_eq!(
        body["message"],
        "Password should not be modified using this route"
    );

    let response = server
        .patch_auth("/api/v1/user/me", &user.token, &json!({ "firstName": "Ana" }))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["user"]["firstName"], "Ana");

    let response = server.get_auth("/api/v1/user/me", &user.token).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["user"]["firstName"], "Ana");
    assert_eq!(body["data"]["user"]["reviews"], json!([]));
    assert_eq!(body["data"]["user"]["favorites"], json!([]));
}

#[tokio::test]
async fn test_user_listing_is_admin_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();
    let admin = TestUser::signup(&server).await.unwrap();
    server.promote(admin.id, Role::Admin).await.unwrap();

    let response = server.get_auth("/api/v1/user/", &user.token).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "ROLE_NOT_PERMITTED"
    );

    let response = server.get_auth("/api/v1/user/", &admin.token).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["results"].as_u64().unwrap() >= 2);
}

#[tokio::test]
async fn test_get_user_by_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();
    let other = TestUser::signup(&server).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/user/{}", other.id), &user.token)
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["user"]["handle"], other.signup.handle);

    let response = server
        .get_auth(&format!("/api/v1/user/{}", uuid::Uuid::new_v4()), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deactivated_user_token_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    let response = server.delete_auth("/api/v1/user/me", &user.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/user/me", &user.token).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "USER_GONE"
    );
}

// ============================================================================
// Stand Tests
// ============================================================================

#[tokio::test]
async fn test_stand_creation_roles() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    let response = server
        .post_auth("/api/v1/stand/", &user.token, &stand_body())
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "ROLE_NOT_PERMITTED"
    );

    let (owner, stand) = owner_with_stand(&server).await;
    assert_eq!(stand["owner"], owner.id.to_string());
    assert_eq!(stand["ratingsQuantity"], 0);
    assert_eq!(stand["ratingsAverage"], 4.5);
    assert_eq!(stand["hoursOfOp"]["friday"]["openTime"], "5:00 pm");
    assert_eq!(stand["location"]["type"], "Point");
}

#[tokio::test]
async fn test_stand_validation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (owner, stand) = owner_with_stand(&server).await;

    let mut bad_hours = stand_body();
    bad_hours["hoursOfOp"]["friday"]["openTime"] = json!("25:00 pm");
    let response = server
        .post_auth("/api/v1/stand/", &owner.token, &bad_hours)
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "INVALID_TIME"
    );

    let mut same_name = stand_body();
    same_name["name"] = stand["name"].clone();
    let response = server
        .post_auth("/api/v1/stand/", &owner.token, &same_name)
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "STAND_NAME_TAKEN"
    );
}

#[tokio::test]
async fn test_stand_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, stand) = owner_with_stand(&server).await;

    let response = server.get("/api/v1/stand/?info=short").await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let stands = body["data"]["stands"].as_array().unwrap();
    assert_eq!(body["results"].as_u64().unwrap() as usize, stands.len());

    let summary = stands.iter().find(|s| s["id"] == stand["id"]).unwrap();
    let mut keys: Vec<_> = summary.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["avatar", "id", "name", "ratingsAverage", "ratingsQuantity"]
    );

    let response = server.get("/api/v1/stand").await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let full = body["data"]["stands"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == stand["id"])
        .unwrap()
        .clone();
    assert_eq!(full["menu"][0]["name"], "Al Pastor");
}

#[tokio::test]
async fn test_stand_soft_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (owner, stand) = owner_with_stand(&server).await;
    let (rival, _) = owner_with_stand(&server).await;
    let stand_id = stand["id"].as_str().unwrap();
    let path = format!("/api/v1/stand/{stand_id}");

    let response = server.delete_auth(&path, &rival.token).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "NOT_OWNER"
    );

    let response = server.delete_auth(&path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let row = PgStandRepository::new(server.pool().clone())
        .find_by_id_including_inactive(uuid_at(&stand["id"]).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert!(!row.active);
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_taco_town_ratings() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, stand) = owner_with_stand(&server).await;
    let stand_id = stand["id"].as_str().unwrap();
    let u1 = TestUser::signup(&server).await.unwrap();
    let u2 = TestUser::signup(&server).await.unwrap();

    post_review(&server, &u1, stand_id, 5.0).await;
    assert_eq!(stand_ratings(&server, stand_id).await, (1, 5.0));

    let u2_review = post_review(&server, &u2, stand_id, 3.0).await;
    assert_eq!(stand_ratings(&server, stand_id).await, (2, 4.0));

    // U1 cannot delete U2's review through either user's path
    for owner in [&u2, &u1] {
        let response = server
            .delete_auth(&format!("{}/{u2_review}", owner.reviews_path()), &u1.token)
            .await
            .unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }
    assert_eq!(stand_ratings(&server, stand_id).await, (2, 4.0));

    let response = server
        .delete_auth(&format!("{}/{u2_review}", u2.reviews_path()), &u2.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(stand_ratings(&server, stand_id).await, (1, 5.0));
}

#[tokio::test]
async fn test_review_update_and_last_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, stand) = owner_with_stand(&server).await;
    let stand_id = stand["id"].as_str().unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    let review_id = post_review(&server, &user, stand_id, 2.0).await;
    let path = format!("{}/{review_id}", user.reviews_path());

    let response = server
        .patch_auth(&path, &user.token, &json!({ "rating": 4 }))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["review"]["rating"], 4.0);
    assert_eq!(stand_ratings(&server, stand_id).await, (1, 4.0));

    let response = server.get(&format!("/api/v1/stand/{stand_id}")).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let reviews = body["data"]["stand"]["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["author"]["handle"], user.signup.handle);

    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(stand_ratings(&server, stand_id).await, (0, 4.5));
}

#[tokio::test]
async fn test_duplicate_review() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, stand) = owner_with_stand(&server).await;
    let stand_id = stand["id"].as_str().unwrap();
    let user = TestUser::signup(&server).await.unwrap();

    post_review(&server, &user, stand_id, 4.0).await;

    let response = server
        .post_auth(
            &user.reviews_path(),
            &user.token,
            &json!({ "stand": stand_id, "rating": 1 }),
        )
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "DUPLICATE_REVIEW"
    );

    let response = server
        .get_auth(&user.reviews_path(), &user.token)
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["results"], 1);
    assert_eq!(body["data"]["reviews"][0]["stand"]["id"], stand["id"]);
}

#[tokio::test]
async fn test_reviews_are_owner_gated() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (owner, stand) = owner_with_stand(&server).await;
    let u1 = TestUser::signup(&server).await.unwrap();
    let u2 = TestUser::signup(&server).await.unwrap();

    let response = server
        .get_auth(&u2.reviews_path(), &u1.token)
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "NOT_OWNER"
    );

    let response = server
        .post_auth(
            &owner.reviews_path(),
            &owner.token,
            &json!({ "stand": stand["id"], "rating": 5 }),
        )
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "ROLE_NOT_PERMITTED"
    );
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorites() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, stand) = owner_with_stand(&server).await;
    let user = TestUser::signup(&server).await.unwrap();
    let body = json!({ "stand": stand["id"] });

    let response = server
        .post_auth(&user.favorites_path(), &user.token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&user.favorites_path(), &user.token, &body)
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "DUPLICATE_FAVORITE"
    );

    let response = server
        .get_auth(&user.favorites_path(), &user.token)
        .await
        .unwrap();
    let list = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list["results"], 1);
    assert_eq!(list["data"]["favorites"][0]["stand"]["name"], stand["name"]);

    let path = format!("{}/{}", user.favorites_path(), stand["id"].as_str().unwrap());
    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
