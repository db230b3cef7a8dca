//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_form_handler, create_user_handler, delete_user_handler, edit_form_handler,
    edit_user_handler, list_logs_handler, list_users_handler, user_logs_handler,
    view_log_handler, view_user_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// User and log pages.
///
/// # Endpoints
///
/// - `GET  /users`               - User list (`?isActive=true|false`)
/// - `GET  /users/create`        - Create form
/// - `POST /users/create`        - Create a user
/// - `GET  /users/{id}`          - User detail with its audit entries
/// - `GET  /users/edit/{id}`     - Edit form
/// - `POST /users/edit/{id}`     - Update a user
/// - `POST /users/delete/{id}`   - Delete a user
/// - `GET  /logs`                - Audit log
/// - `GET  /logs/{id}`           - Single audit entry
/// - `GET  /logs/user/{user_id}` - Audit entries of one user (fragment)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler))
        .route(
            "/users/create",
            get(create_form_handler).post(create_user_handler),
        )
        .route("/users/{id}", get(view_user_handler))
        .route(
            "/users/edit/{id}",
            get(edit_form_handler).post(edit_user_handler),
        )
        .route("/users/delete/{id}", post(delete_user_handler))
        .route("/logs", get(list_logs_handler))
        .route("/logs/{id}", get(view_log_handler))
        .route("/logs/user/{user_id}", get(user_logs_handler))
}
