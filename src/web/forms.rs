//! Form and query payloads accepted by the user pages.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::User;
use crate::error::AppError;

/// Format produced by `<input type="date">`.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Query string of the user list page.
///
/// `?isActive=true|false` narrows the list; an empty or missing value shows
/// everyone.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct UserListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "isActive")]
    pub is_active: Option<String>,
}

impl UserListParams {
    /// The requested active flag, accepted in any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for anything but `true` or `false`.
    pub fn active_filter(&self) -> Result<Option<bool>, AppError> {
        let Some(raw) = self.is_active.as_deref() else {
            return Ok(None);
        };

        if raw.eq_ignore_ascii_case("true") {
            Ok(Some(true))
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(Some(false))
        } else {
            Err(AppError::bad_request(
                "isActive must be true or false",
                json!({ "isActive": raw }),
            ))
        }
    }
}

/// Fields posted by the create and edit forms.
///
/// An unchecked `is_active` checkbox is simply absent from the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, max = 100, message = "Forename is required"))]
    pub forename: String,

    #[validate(length(min = 1, max = 100, message = "Surname is required"))]
    pub surname: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: String,
}

impl UserForm {
    /// Pre-fills the form from a stored user.
    pub fn from_user(user: &User) -> Self {
        Self {
            forename: user.forename.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
            date_of_birth: user
                .date_of_birth
                .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// Parsed birth date; `None` when left empty.
    ///
    /// Only meaningful after [`Validate::validate`] succeeded.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date_of_birth).ok().flatten()
    }

    /// Builds an unsaved user from the submitted values.
    pub fn into_user(self) -> User {
        let date_of_birth = self.birth_date();
        User::new(
            self.forename,
            self.surname,
            self.email,
            self.is_active,
            date_of_birth,
        )
    }

    /// Copies the submitted values onto `user`, keeping its id.
    pub fn apply_to(&self, user: &mut User) {
        user.forename = self.forename.clone();
        user.surname = self.surname.clone();
        user.email = self.email.clone();
        user.is_active = self.is_active;
        user.date_of_birth = self.birth_date();
    }
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT).map(Some)
}

fn validate_birth_date(raw: &str) -> Result<(), ValidationError> {
    match parse_date(raw) {
        Ok(_) => Ok(()),
        Err(_) => {
            Err(ValidationError::new("date").with_message("Use the YYYY-MM-DD format".into()))
        }
    }
}

/// First error message per form field, shown next to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub forename: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
}

impl FieldErrors {
    /// Collects validation failures of a submitted form.
    pub fn from_validation(result: Result<(), ValidationErrors>) -> Self {
        let Err(errors) = result else {
            return Self::default();
        };
        let fields = errors.field_errors();
        let first = |name: &str| {
            fields.get(name).and_then(|list| list.first()).map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
        };

        Self {
            forename: first("forename"),
            surname: first("surname"),
            email: first("email"),
            date_of_birth: first("date_of_birth"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.forename.is_none()
            && self.surname.is_none()
            && self.email.is_none()
            && self.date_of_birth.is_none()
    }
}
