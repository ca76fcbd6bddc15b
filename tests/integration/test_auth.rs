use super::helpers::{expect_status, json_request, read_json, send, spawn_app, unique_email};
use axum::http::StatusCode;
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn register_then_login_issues_a_token() {
    let Some(app) = spawn_app().await else {
        eprintln!("skipping: database unavailable");
        return;
    };

    let email = unique_email("auth-it");
    let password = "Senha123@forte";

    let register_req = json_request(
        "POST",
        "/auth-register",
        json!({ "email": email, "password": password }),
    );
    let register_res = expect_status(send(&app.app, register_req).await, StatusCode::OK).await;
    let register_body: Value = read_json(register_res).await;
    assert!(register_body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let login_req = json_request(
        "POST",
        "/auth-login",
        json!({ "email": email, "password": password }),
    );
    let login_res = expect_status(send(&app.app, login_req).await, StatusCode::OK).await;
    let login_body: Value = read_json(login_res).await;
    assert!(login_body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
#[serial]
async fn login_with_wrong_password_is_unauthorized() {
    let Some(app) = spawn_app().await else {
        eprintln!("skipping: database unavailable");
        return;
    };

    let email = unique_email("auth-it");
    let register_req = json_request(
        "POST",
        "/auth-register",
        json!({ "email": email, "password": "Senha123@forte" }),
    );
    expect_status(send(&app.app, register_req).await, StatusCode::OK).await;

    let login_req = json_request(
        "POST",
        "/auth-login",
        json!({ "email": email, "password": "senha-errada" }),
    );
    expect_status(send(&app.app, login_req).await, StatusCode::UNAUTHORIZED).await;
}

#[tokio::test]
#[serial]
async fn register_rejects_duplicate_email_and_bad_input() {
    let Some(app) = spawn_app().await else {
        eprintln!("skipping: database unavailable");
        return;
    };

    let email = unique_email("auth-it");
    let first = json_request(
        "POST",
        "/auth-register",
        json!({ "email": email, "password": "Senha123@forte" }),
    );
    expect_status(send(&app.app, first).await, StatusCode::OK).await;

    let duplicate = json_request(
        "POST",
        "/auth-register",
        json!({ "email": email, "password": "Senha123@forte" }),
    );
    expect_status(send(&app.app, duplicate).await, StatusCode::BAD_REQUEST).await;

    let bad_email = json_request(
        "POST",
        "/auth-register",
        json!({ "email": "not-an-email", "password": "Senha123@forte" }),
    );
    expect_status(send(&app.app, bad_email).await, StatusCode::BAD_REQUEST).await;

    let short_password = json_request(
        "POST",
        "/auth-register",
        json!({ "email": unique_email("auth-it"), "password": "curta" }),
    );
    expect_status(send(&app.app, short_password).await, StatusCode::BAD_REQUEST).await;
}
