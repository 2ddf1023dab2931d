//! Opaque bearer tokens identifying sessions.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Bearer token handed out on login.
///
/// Generated tokens are a random UUID followed by the issue time in epoch
/// milliseconds, e.g. `7d3c...-9f1a-1761012499864`. Uniqueness rests on the
/// UUID; the timestamp only makes tokens easier to eyeball in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a fresh token issued at `now`.
    ///
    /// # Examples
    /// ```
    /// use autofill_backend::domain::SessionToken;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let now = Utc.timestamp_millis_opt(1_761_012_499_864).unwrap();
    /// let token = SessionToken::generate(now);
    /// assert!(token.as_ref().ends_with("-1761012499864"));
    /// ```
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", Uuid::new_v4(), now.timestamp_millis()))
    }

    /// Wrap a token presented by a client. Only empty input yields `None`;
    /// whitespace is a token like any other.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_owned()))
        }
    }

    /// Shortened form for log lines.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(8).collect();
        format!("{prefix}...")
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SessionToken> for String {
    fn from(value: SessionToken) -> Self {
        value.0
    }
}
