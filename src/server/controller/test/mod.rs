use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{
    config::Config,
    test_support::{test_config, test_server, test_state},
};

mod user;

/// Full schema plus a server over it using the default test configuration.
async fn setup() -> (TestContext, TestServer) {
    setup_with(test_config()).await
}

async fn setup_with(config: Config) -> (TestContext, TestServer) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db: DatabaseConnection = test.db.clone().unwrap();
    let server = test_server(test_state(db, config));

    (test, server)
}

fn sign_up_body(email: &str, nickname: &str, phone_num: &str) -> Value {
    json!({
        "email": email,
        "password": "password123",
        "checked_password": "password123",
        "name": "Kim Cook",
        "nickname": nickname,
        "birth": "1995-04-12",
        "gender": "female",
        "phone_num": phone_num,
    })
}

/// Signs up through the API and returns an access token for the new account.
async fn register(server: &TestServer, email: &str, nickname: &str, phone_num: &str) -> String {
    server
        .post("/users/sign-up")
        .json(&sign_up_body(email, nickname, phone_num))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/users/log-in")
        .json(&json!({"email": email, "password": "password123"}))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn default_user(server: &TestServer) -> String {
    register(server, "cook@example.com", "cook", "010-1234-5678").await
}

fn error_code(body: &Value) -> &str {
    body["code"].as_str().unwrap_or_default()
}
