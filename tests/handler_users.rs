mod common;

use axum::http::StatusCode;
use user_management::domain::entities::LogType;
use user_management::domain::repositories::EntityStore;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_shows_all_users() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("ploew@example.com"));
    assert!(html.contains("ctroy@example.com"));
    assert!(html.contains("rfeld@example.com"));
}

#[tokio::test]
async fn test_list_filters_active_users() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users").add_query_param("isActive", "true").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("ploew@example.com"));
    assert!(!html.contains("ctroy@example.com"));
    assert!(!html.contains("cpoe@example.com"));
}

#[tokio::test]
async fn test_list_filters_inactive_users() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users?isActive=false").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("ctroy@example.com"));
    assert!(html.contains("dmacready@example.com"));
    assert!(!html.contains("ploew@example.com"));
}

#[tokio::test]
async fn test_list_filter_ignores_case() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users?isActive=True").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("ploew@example.com"));
    assert!(!html.contains("ctroy@example.com"));
}

#[tokio::test]
async fn test_list_invalid_filter_is_bad_request() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users?isActive=maybe").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("isActive must be true or false"));
}

#[tokio::test]
async fn test_list_empty_filter_shows_everyone() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users?isActive=").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("ploew@example.com"));
    assert!(html.contains("ctroy@example.com"));
}

#[tokio::test]
async fn test_list_on_empty_store() {
    let (state, _store) = common::create_state_with(Vec::new());
    let server = common::make_server(state);

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert!(response.text().contains("No users found."));
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_form_renders() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users/create").await;

    response.assert_status_ok();
    assert!(response.text().contains("Add User"));
}

#[tokio::test]
async fn test_create_user_redirects_and_logs() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/create")
        .form(&common::user_form(
            "Nick",
            "Cage",
            "ncage@example.com",
            true,
            "1964-01-07",
        ))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    response.assert_header("location", "/users");

    let users = store.users.get_all().await.unwrap();
    assert_eq!(users.len(), 12);
    let created = users
        .iter()
        .find(|u| u.email == "ncage@example.com")
        .unwrap();
    assert_eq!(created.id, 12);

    let logs = store.logs.get_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, 12);
    assert_eq!(logs[0].kind, LogType::Created);
    assert_eq!(
        logs[0].description,
        "User: 12 created; Forname: Nick, Surname: Cage, Email: ncage@example.com, \
         IsActive: True, DateOfBirth: 07/01/1964"
    );
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/create")
        .form(&common::user_form(
            "Other",
            "Person",
            "ploew@example.com",
            true,
            "",
        ))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Email already exists."));
    assert_eq!(store.users.count().await.unwrap(), 11);
    assert_eq!(store.logs.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_user_invalid_form() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/create")
        .form(&common::user_form("", "Cage", "not-an-email", false, "07/01/1964"))
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Forename is required"));
    assert!(html.contains("Enter a valid email address"));
    assert!(html.contains("Use the YYYY-MM-DD format"));
    assert_eq!(store.users.count().await.unwrap(), 11);
    assert_eq!(store.logs.count().await.unwrap(), 0);
}

// ─── VIEW ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_view_user() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users/1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>Peter Loew</h1>"));
    assert!(html.contains("ploew@example.com"));
    assert!(html.contains("No activity recorded."));
}

#[tokio::test]
async fn test_view_user_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users/999").await;

    response.assert_status_not_found();
    assert!(response.text().contains("User not found"));
}

// ─── EDIT ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_form_prefilled() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/users/edit/3").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Edit User"));
    assert!(html.contains("ctroy@example.com"));
    assert!(html.contains("/users/edit/3"));
}

#[tokio::test]
async fn test_edit_user_updates_and_logs() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/edit/3")
        .form(&common::user_form(
            "Castor",
            "Troy",
            "castor.troy@example.com",
            true,
            "",
        ))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);

    let user = store.users.get_by_id(3).await.unwrap().unwrap();
    assert_eq!(user.email, "castor.troy@example.com");
    assert!(user.is_active);
    assert_eq!(user.date_of_birth, None);

    let logs = store.logs.get_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, LogType::Updated);
    assert_eq!(logs[0].user_id, 3);
    assert!(logs[0].description.starts_with("User: 3 updated;"));
    assert!(logs[0].description.ends_with("DateOfBirth: 01/01/0001"));
}

#[tokio::test]
async fn test_edit_user_keeping_own_email() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/edit/1")
        .form(&common::user_form(
            "Pete",
            "Loew",
            "ploew@example.com",
            true,
            "",
        ))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let user = store.users.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(user.forename, "Pete");
}

#[tokio::test]
async fn test_edit_user_taking_other_email() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/edit/1")
        .form(&common::user_form(
            "Peter",
            "Loew",
            "ctroy@example.com",
            true,
            "",
        ))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Email already exists."));
    assert_eq!(store.logs.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_edit_user_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/users/edit/999")
        .form(&common::user_form("A", "B", "ab@example.com", true, ""))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.post("/users/delete/5").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(store.users.get_by_id(5).await.unwrap().is_none());
    assert_eq!(store.users.count().await.unwrap(), 10);

    let logs = store.logs.get_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, LogType::Deleted);
    assert_eq!(logs[0].user_id, 5);

    server.get("/users/5").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.post("/users/delete/999").await;

    response.assert_status_not_found();
    assert_eq!(store.logs.count().await.unwrap(), 0);
}
