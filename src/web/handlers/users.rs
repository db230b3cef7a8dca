//! User administration pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{FieldErrors, UserForm, UserListParams};
use crate::web::view_models::{LogItem, UserItem};

const DUPLICATE_EMAIL: &str = "Email already exists.";

/// Template for the user list.
///
/// Renders `templates/users/list.html` with filter tabs for all, active and
/// inactive users.
#[derive(Template, WebTemplate)]
#[template(path = "users/list.html")]
pub struct UserListTemplate {
    pub items: Vec<UserItem>,
    /// `"all"`, `"active"` or `"inactive"`.
    pub filter: &'static str,
}

/// Template for a single user together with its audit entries.
#[derive(Template, WebTemplate)]
#[template(path = "users/view.html")]
pub struct UserViewTemplate {
    pub user: UserItem,
    pub logs: Vec<LogItem>,
}

/// Template shared by the create and edit forms.
#[derive(Template, WebTemplate)]
#[template(path = "users/form.html")]
pub struct UserFormTemplate {
    pub title: &'static str,
    pub action: String,
    pub form: UserForm,
    pub errors: FieldErrors,
}

impl UserFormTemplate {
    fn create(form: UserForm, errors: FieldErrors) -> Self {
        Self {
            title: "Add User",
            action: "/users/create".to_string(),
            form,
            errors,
        }
    }

    fn edit(id: i64, form: UserForm, errors: FieldErrors) -> Self {
        Self {
            title: "Edit User",
            action: format!("/users/edit/{id}"),
            form,
            errors,
        }
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

/// Returns true when another user (not `except_id`) already uses `email`.
async fn email_taken(
    state: &AppState,
    email: &str,
    except_id: Option<i64>,
) -> Result<bool, AppError> {
    let users = state.user_service.get_all().await?;
    Ok(users
        .iter()
        .any(|u| u.email == email && Some(u.id) != except_id))
}

/// Lists users, optionally filtered by their active flag.
///
/// # Endpoint
///
/// `GET /users?isActive=true|false`
///
/// # Errors
///
/// Renders the error page with 400 for any other `isActive` value.
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> Result<UserListTemplate, AppError> {
    let (users, filter) = match params.active_filter()? {
        Some(is_active) => (
            state.user_service.filter_by_active(is_active).await?,
            if is_active { "active" } else { "inactive" },
        ),
        None => (state.user_service.get_all().await?, "all"),
    };

    Ok(UserListTemplate {
        items: users.into_iter().map(UserItem::from).collect(),
        filter,
    })
}

/// Renders an empty create form.
///
/// # Endpoint
///
/// `GET /users/create`
pub async fn create_form_handler() -> UserFormTemplate {
    let form = UserForm {
        is_active: true,
        ..UserForm::default()
    };
    UserFormTemplate::create(form, FieldErrors::default())
}

/// Creates a user from the submitted form.
///
/// # Endpoint
///
/// `POST /users/create`
///
/// Invalid input or an email already in use re-renders the form with
/// messages; the service is not called in that case. On success redirects to
/// the user list.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let mut errors = FieldErrors::from_validation(form.validate());
    if errors.email.is_none() && email_taken(&state, &form.email, None).await? {
        errors.email = Some(DUPLICATE_EMAIL.to_string());
    }
    if !errors.is_empty() {
        return Ok(UserFormTemplate::create(form, errors).into_response());
    }

    state.user_service.create(form.into_user()).await?;

    Ok(Redirect::to("/users").into_response())
}

/// Shows one user and the audit entries written for it.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Renders the error page with 404 if the user does not exist.
pub async fn view_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<UserViewTemplate, AppError> {
    let user = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    let logs = state.log_service.get_by_user_id(id).await?;

    Ok(UserViewTemplate {
        user: user.into(),
        logs: logs.into_iter().map(LogItem::from).collect(),
    })
}

/// Renders the edit form pre-filled with the stored values.
///
/// # Endpoint
///
/// `GET /users/edit/{id}`
pub async fn edit_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<UserFormTemplate, AppError> {
    let user = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    Ok(UserFormTemplate::edit(
        id,
        UserForm::from_user(&user),
        FieldErrors::default(),
    ))
}

/// Applies the submitted form to an existing user.
///
/// # Endpoint
///
/// `POST /users/edit/{id}`
///
/// The stored user is fetched, its fields are overwritten and the result is
/// passed to the update operation. Another user's email is rejected like on
/// create.
pub async fn edit_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let mut errors = FieldErrors::from_validation(form.validate());
    if !errors.is_empty() {
        return Ok(UserFormTemplate::edit(id, form, errors).into_response());
    }

    let mut user = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    if email_taken(&state, &form.email, Some(id)).await? {
        errors.email = Some(DUPLICATE_EMAIL.to_string());
        return Ok(UserFormTemplate::edit(id, form, errors).into_response());
    }

    form.apply_to(&mut user);
    state.user_service.update(user).await?;

    Ok(Redirect::to("/users").into_response())
}

/// Deletes a user.
///
/// # Endpoint
///
/// `POST /users/delete/{id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let user = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    state.user_service.delete(user).await?;

    Ok(Redirect::to("/users"))
}
