//! Display-ready rows handed to the templates.

use crate::domain::entities::log::DISPLAY_DATE_FORMAT;
use crate::domain::entities::{Log, User};

/// Timestamp layout on the log pages.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One row of the user list and the user detail page.
#[derive(Debug, Clone)]
pub struct UserItem {
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    /// `dd/MM/yyyy`, empty when unset.
    pub date_of_birth: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            date_of_birth: user
                .date_of_birth
                .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            forename: user.forename,
            surname: user.surname,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// One row of the log list, the per-user log partial and the log detail page.
#[derive(Debug, Clone)]
pub struct LogItem {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub description: String,
    pub created_at: String,
}

impl From<Log> for LogItem {
    fn from(log: Log) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            kind: log.kind.to_string(),
            created_at: log.created_at.format(TIMESTAMP_FORMAT).to_string(),
            description: log.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LogType;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_user_item_formats_birth_date() {
        let user = User::new(
            "Peter",
            "Loew",
            "ploew@example.com",
            true,
            NaiveDate::from_ymd_opt(1985, 12, 3),
        )
        .with_id(1);

        let item = UserItem::from(user);

        assert_eq!(item.id, 1);
        assert_eq!(item.full_name, "Peter Loew");
        assert_eq!(item.date_of_birth, "03/12/1985");
    }

    #[test]
    fn test_user_item_without_birth_date() {
        let user = User::new("Castor", "Troy", "ctroy@example.com", false, None).with_id(3);

        assert_eq!(UserItem::from(user).date_of_birth, "");
    }

    #[test]
    fn test_log_item_formats_timestamp() {
        let log = Log {
            id: 2,
            user_id: 1,
            kind: LogType::Updated,
            description: "User: 1 updated; ...".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        };

        let item = LogItem::from(log);

        assert_eq!(item.kind, "Updated");
        assert_eq!(item.created_at, "06/05/2024 07:08:09");
    }
}
