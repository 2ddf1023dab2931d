//! Authentication primitives such as login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that check presence before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was absent or empty.
    MissingEmail,
    /// Password was absent or empty.
    MissingPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEmail => write!(f, "email is required"),
            Self::MissingPassword => write!(f, "password is required"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Login credentials submitted by a client.
///
/// ## Invariants
/// - `email` and `password` are non-empty. Neither is trimmed: user lookup
///   and password comparison are exact.
///
/// # Examples
/// ```
/// use autofill_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(Some("thong1"), Some("111")).unwrap();
/// assert_eq!(creds.email(), "thong1");
/// assert_eq!(creds.password(), "111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from optional raw inputs.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, LoginValidationError> {
        let email = email
            .filter(|value| !value.is_empty())
            .ok_or(LoginValidationError::MissingEmail)?;
        let password = password
            .filter(|value| !value.is_empty())
            .ok_or(LoginValidationError::MissingPassword)?;

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some("pw"), LoginValidationError::MissingEmail)]
    #[case(Some(""), Some("pw"), LoginValidationError::MissingEmail)]
    #[case(Some("thong1"), None, LoginValidationError::MissingPassword)]
    #[case(Some("thong1"), Some(""), LoginValidationError::MissingPassword)]
    fn missing_parts_are_rejected(
        #[case] email: Option<&str>,
        #[case] password: Option<&str>,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("missing inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn values_are_kept_verbatim() {
        let creds = LoginCredentials::try_from_parts(Some(" thong1 "), Some(" 111"))
            .expect("present inputs succeed");
        assert_eq!(creds.email(), " thong1 ");
        assert_eq!(creds.password(), " 111");
    }
}
