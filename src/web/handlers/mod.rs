//! HTML template rendering handlers.

mod error_page;
mod logs;
mod users;

pub use error_page::{ErrorTemplate, fallback_handler};
pub use logs::{list_logs_handler, user_logs_handler, view_log_handler};
pub use users::{
    create_form_handler, create_user_handler, delete_user_handler, edit_form_handler,
    edit_user_handler, list_users_handler, view_user_handler,
};
