#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use user_management::domain::entities::User;
use user_management::domain::seed::seed_users;
use user_management::infrastructure::persistence::DataStore;
use user_management::state::AppState;
use user_management::{api, web};

/// State over a store holding the fixture users and no logs.
pub fn create_test_state() -> (AppState, DataStore) {
    create_state_with(seed_users())
}

pub fn create_state_with(users: Vec<User>) -> (AppState, DataStore) {
    let store = DataStore::initialize(users);
    (AppState::new(&store), store)
}

/// Page and API routes mounted without tracing or path normalization.
pub fn make_server(state: AppState) -> TestServer {
    let app: Router = web::routes::routes()
        .merge(api::routes::routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn user_form<'a>(
    forename: &'a str,
    surname: &'a str,
    email: &'a str,
    is_active: bool,
    date_of_birth: &'a str,
) -> Vec<(&'static str, &'a str)> {
    let mut fields = vec![
        ("forename", forename),
        ("surname", surname),
        ("email", email),
        ("date_of_birth", date_of_birth),
    ];
    if is_active {
        fields.push(("is_active", "true"));
    }
    fields
}
