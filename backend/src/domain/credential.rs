//! Stored site-login records used by the extension for autofill.
//!
//! A credential is an `id` and `timestamp` owned by the server plus a bag of
//! optional content fields owned by the client. Content fields the client
//! never supplied stay absent and are omitted from the JSON form.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Identifier assigned when a credential is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CredentialId(String);

/// Error returned for blank credential identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCredentialId;

impl fmt::Display for EmptyCredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "credential id must not be empty")
    }
}

impl std::error::Error for EmptyCredentialId {}

impl CredentialId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyCredentialId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmptyCredentialId);
        }
        Ok(Self(id))
    }

    /// Fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for CredentialId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CredentialId> for String {
    fn from(value: CredentialId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CredentialId {
    type Error = EmptyCredentialId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Per-form-field autofill metadata keyed by field name (`username`,
/// `password`, ...). Stored exactly as the extension sent it.
pub type InputRules = Map<String, Value>;

/// Client-owned credential content. Doubles as the create body and the
/// partial-update body: `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CredentialFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_rules: Option<InputRules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_step: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl CredentialFields {
    /// Overlay every field supplied in `patch`; absent fields keep their
    /// current value.
    pub fn merge(&mut self, patch: CredentialFields) {
        let CredentialFields {
            domain,
            icon,
            input_rules,
            multiple_step,
            password,
            url,
            username,
        } = patch;

        if domain.is_some() {
            self.domain = domain;
        }
        if icon.is_some() {
            self.icon = icon;
        }
        if input_rules.is_some() {
            self.input_rules = input_rules;
        }
        if multiple_step.is_some() {
            self.multiple_step = multiple_step;
        }
        if password.is_some() {
            self.password = password;
        }
        if url.is_some() {
            self.url = url;
        }
        if username.is_some() {
            self.username = username;
        }
    }
}

/// A stored credential.
///
/// ## Invariants
/// - `id` never changes after creation.
/// - `timestamp` is epoch milliseconds of the last create or update.
///
/// # Examples
/// ```
/// use autofill_backend::domain::{Credential, CredentialFields, CredentialId};
///
/// let mut credential = Credential::new(
///     CredentialId::new("fdcd").unwrap(),
///     CredentialFields { domain: Some("coupang.com".into()), ..Default::default() },
///     1_000,
/// );
/// credential.apply(CredentialFields { username: Some("a".into()), ..Default::default() }, 2_000);
/// assert_eq!(credential.id().as_ref(), "fdcd");
/// assert_eq!(credential.fields().domain.as_deref(), Some("coupang.com"));
/// assert_eq!(credential.timestamp(), 2_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    id: CredentialId,
    #[serde(flatten)]
    fields: CredentialFields,
    timestamp: i64,
}

impl Credential {
    pub fn new(id: CredentialId, fields: CredentialFields, timestamp: i64) -> Self {
        Self {
            id,
            fields,
            timestamp,
        }
    }

    pub fn id(&self) -> &CredentialId {
        &self.id
    }

    pub fn fields(&self) -> &CredentialFields {
        &self.fields
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Merge `patch` into the content and restamp. The id is untouched.
    pub fn apply(&mut self, patch: CredentialFields, timestamp: i64) {
        self.fields.merge(patch);
        self.timestamp = timestamp;
    }
}

/// Listing filter: case-insensitive substring match on `domain`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFilter {
    domain: Option<String>,
}

impl CredentialFilter {
    /// Filter that keeps everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on `domain`; an empty needle keeps everything.
    pub fn by_domain(domain: Option<&str>) -> Self {
        Self {
            domain: domain
                .filter(|needle| !needle.is_empty())
                .map(str::to_lowercase),
        }
    }

    /// Records without a domain never match a non-empty needle.
    pub fn matches(&self, credential: &Credential) -> bool {
        match &self.domain {
            None => true,
            Some(needle) => credential
                .fields
                .domain
                .as_deref()
                .is_some_and(|domain| domain.to_lowercase().contains(needle.as_str())),
        }
    }
}
