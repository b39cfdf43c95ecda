use super::*;

/// Tests sign-up followed by fetching the profile with the issued token.
///
/// Expected: 201 with the user, then 200 from /users/me with the same email
#[tokio::test]
async fn sign_up_log_in_and_me() {
    let (_test, server) = setup().await;

    let created = server
        .post("/users/sign-up")
        .json(&sign_up_body("cook@example.com", "cook", "01012345678"))
        .await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(created.json::<Value>()["nickname"], "cook");

    let token = server
        .post("/users/log-in")
        .json(&json!({"email": "cook@example.com", "password": "password123"}))
        .await
        .json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let me = server.get("/users/me").authorization_bearer(&token).await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["email"], "cook@example.com");
}

/// Tests registering the same email twice.
///
/// Expected: 409 EMAIL_CONFLICT
#[tokio::test]
async fn duplicate_email_conflicts() {
    let (_test, server) = setup().await;
    default_user(&server).await;

    let response = server
        .post("/users/sign-up")
        .json(&sign_up_body("cook@example.com", "other", "01099998888"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(error_code(&response.json::<Value>()), "EMAIL_CONFLICT");
}

/// Tests that a malformed body is reported as a validation failure.
///
/// Expected: 422 VALIDATION_ERROR
#[tokio::test]
async fn malformed_sign_up_body_is_unprocessable() {
    let (_test, server) = setup().await;

    let response = server
        .post("/users/sign-up")
        .json(&json!({"email": "cook@example.com"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_code(&response.json::<Value>()), "VALIDATION_ERROR");
}

/// Tests log-in with the wrong password.
///
/// Expected: 401 INVALID_CREDENTIALS
#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let (_test, server) = setup().await;
    default_user(&server).await;

    let response = server
        .post("/users/log-in")
        .json(&json!({"email": "cook@example.com", "password": "wrong-password"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response.json::<Value>()), "INVALID_CREDENTIALS");
}

/// Tests a protected route without and with a garbage token.
///
/// Expected: 401 for both
#[tokio::test]
async fn me_requires_valid_token() {
    let (_test, server) = setup().await;

    server
        .get("/users/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .get("/users/me")
        .authorization_bearer("not-a-jwt")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// Tests changing the password and logging in with the new one.
///
/// Expected: 204, old password rejected, new password accepted
#[tokio::test]
async fn change_password_then_log_in() {
    let (_test, server) = setup().await;
    let token = default_user(&server).await;

    server
        .patch("/users/password")
        .authorization_bearer(&token)
        .json(&json!({
            "current_password": "password123",
            "new_password": "brandnew456",
            "confirm_password": "brandnew456",
        }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .post("/users/log-in")
        .json(&json!({"email": "cook@example.com", "password": "password123"}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/users/log-in")
        .json(&json!({"email": "cook@example.com", "password": "brandnew456"}))
        .await
        .assert_status_ok();
}

/// Tests finding the account email with dashes in the phone number.
///
/// Expected: 200 with the email, 404 USER_NOT_FOUND for a different phone
#[tokio::test]
async fn find_id_matches_phone_digits() {
    let (_test, server) = setup().await;
    register(&server, "cook@example.com", "cook", "01012345678").await;

    let found = server
        .post("/users/find-id")
        .json(&json!({"name": "Kim Cook", "birth": "1995-04-12", "phone_num": "010-1234-5678"}))
        .await;
    found.assert_status_ok();
    assert_eq!(found.json::<Value>()["email"], "cook@example.com");

    let missing = server
        .post("/users/find-id")
        .json(&json!({"name": "Kim Cook", "birth": "1995-04-12", "phone_num": "010-0000-0000"}))
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_code(&missing.json::<Value>()), "USER_NOT_FOUND");
}

/// Tests withdrawing an account.
///
/// Expected: 204, then the token and the password both stop working
#[tokio::test]
async fn withdraw_disables_account() {
    let (_test, server) = setup().await;
    let token = default_user(&server).await;

    server
        .delete("/users/me")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get("/users/me")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/users/log-in")
        .json(&json!({"email": "cook@example.com", "password": "password123"}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// Tests the health endpoint.
///
/// Expected: 200 {"status": "ok"}
#[tokio::test]
async fn health_reports_ok() {
    let (_test, server) = setup().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"status": "ok"}));
}
