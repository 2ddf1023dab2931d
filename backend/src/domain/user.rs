//! User data model.
//!
//! Users are preloaded at startup and never change afterwards. Passwords are
//! stored and compared as plain text; this backend is a development mock.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::EmptyEmail => write!(f, "user email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Opaque user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Preloaded account able to log in.
///
/// ## Invariants
/// - `email` is non-empty; it is matched exactly, without normalisation.
/// - `id` may be absent; such users still log in and hold sessions.
///
/// # Examples
/// ```
/// use autofill_backend::domain::{User, UserId};
///
/// let user = User::new(Some(UserId::new("2f02").unwrap()), "thong1", "111").unwrap();
/// assert!(user.password_matches("111"));
/// assert_eq!(user.summary().email(), "thong1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: Option<UserId>,
    email: String,
    password: String,
}

impl User {
    /// Construct a user, rejecting a blank email.
    pub fn new(
        id: Option<UserId>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self {
            id,
            email,
            password: password.into(),
        })
    }

    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Exact comparison against the stored plain-text password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Public projection embedded in sessions and login responses.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Deserialize)]
struct UserRecord {
    #[serde(default)]
    id: Option<UserId>,
    email: String,
    password: String,
}

impl TryFrom<UserRecord> for User {
    type Error = UserValidationError;

    fn try_from(value: UserRecord) -> Result<Self, Self::Error> {
        Self::new(value.id, value.email, value.password)
    }
}

/// `{id, email}` snapshot of a user; never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    email: String,
}

impl UserSummary {
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn user_id_rejects_blank(#[case] raw: &str) {
        assert_eq!(UserId::new(raw), Err(UserValidationError::EmptyId));
    }

    #[rstest]
    fn user_rejects_blank_email() {
        let err = User::new(None, " ", "pw").expect_err("blank email must fail");
        assert_eq!(err, UserValidationError::EmptyEmail);
    }

    #[rstest]
    #[case("111", true)]
    #[case("111 ", false)]
    #[case("", false)]
    fn password_comparison_is_exact(#[case] candidate: &str, #[case] expected: bool) {
        let user = User::new(None, "thong1", "111").expect("valid user");
        assert_eq!(user.password_matches(candidate), expected);
    }

    #[rstest]
    fn summary_omits_missing_id() {
        let user = User::new(None, "fdsfd", "fdf").expect("valid user");
        let value = serde_json::to_value(user.summary()).expect("summary serialises");
        assert_eq!(value, json!({ "email": "fdsfd" }));
    }

    #[rstest]
    fn deserialises_records_without_id() {
        let user: User = serde_json::from_value(json!({ "email": "fdsfd", "password": "fdf" }))
            .expect("record decodes");
        assert!(user.id().is_none());
        assert!(user.password_matches("fdf"));
    }
}
