//! Domains flagged for first auto login.
//!
//! When a domain is flagged, the extension may fill stored credentials the
//! first time it meets the site without asking the user.

use std::fmt;

use serde::Serialize;

/// Error returned when a domain value is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDomain;

impl fmt::Display for EmptyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "domain must not be empty")
    }
}

impl std::error::Error for EmptyDomain {}

/// A flagged domain. Membership is by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct AutoLoginDomain(String);

impl AutoLoginDomain {
    /// Validate and wrap a domain string.
    pub fn new(domain: impl Into<String>) -> Result<Self, EmptyDomain> {
        let domain = domain.into();
        if domain.is_empty() {
            return Err(EmptyDomain);
        }
        Ok(Self(domain))
    }
}

impl AsRef<str> for AutoLoginDomain {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AutoLoginDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AutoLoginDomain> for String {
    fn from(value: AutoLoginDomain) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_domain() {
        assert_eq!(AutoLoginDomain::new(""), Err(EmptyDomain));
    }

    #[test]
    fn keeps_domain_verbatim() {
        let domain = AutoLoginDomain::new("Example.com ").expect("non-empty");
        assert_eq!(domain.as_ref(), "Example.com ");
    }
}
