//! User entity managed through the admin screens.

use chrono::NaiveDate;

use super::Entity;

/// A user record.
///
/// `id == 0` means the record has not been stored yet; the store assigns an
/// identity on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
    pub date_of_birth: Option<NaiveDate>,
}

impl User {
    /// Creates an unsaved user.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_management::domain::entities::User;
    ///
    /// let user = User::new("Peter", "Loew", "ploew@example.com", true, None);
    /// assert_eq!(user.id, 0);
    /// ```
    pub fn new(
        forename: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        is_active: bool,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: 0,
            forename: forename.into(),
            surname: surname.into(),
            email: email.into(),
            is_active,
            date_of_birth,
        }
    }

    /// Returns the same user with an explicit identity.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
