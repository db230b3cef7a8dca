//! Audit log entry written for every user mutation.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

use super::{Entity, User};

/// What happened to the user a [`Log`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    Created,
    Updated,
    Deleted,
}

impl LogType {
    /// Past-tense verb used inside log descriptions.
    pub fn verb(self) -> &'static str {
        match self {
            LogType::Created => "created",
            LogType::Updated => "updated",
            LogType::Deleted => "deleted",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogType::Created => "Created",
            LogType::Updated => "Updated",
            LogType::Deleted => "Deleted",
        };
        f.write_str(label)
    }
}

/// An audit record.
///
/// `user_id` is not checked against the user table: logs outlive the users
/// they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub id: i64,
    pub user_id: i64,
    pub kind: LogType,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Log {
    /// Builds an unsaved log entry describing `user` as it is right now.
    pub fn for_user(kind: LogType, user: &User) -> Self {
        Self {
            id: 0,
            user_id: user.id,
            kind,
            description: describe(kind, user),
            created_at: Utc::now(),
        }
    }
}

impl Entity for Log {
    const KIND: &'static str = "Log";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Formats the audit description for `user`.
///
/// The layout is consumed by external tooling and must stay byte-for-byte
/// stable, including the `Forname` spelling and `True`/`False` flags.
pub fn describe(kind: LogType, user: &User) -> String {
    format!(
        "User: {} {}; Forname: {}, Surname: {}, Email: {}, IsActive: {}, DateOfBirth: {}",
        user.id,
        kind.verb(),
        user.forename,
        user.surname,
        user.email,
        if user.is_active { "True" } else { "False" },
        format_date(user.date_of_birth),
    )
}

/// `dd/MM/yyyy`, used wherever a date is shown to people.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// `dd/MM/yyyy`; an unset date renders as the zero date `01/01/0001`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format(DISPLAY_DATE_FORMAT).to_string(),
        None => "01/01/0001".to_string(),
    }
}
