//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed entities shared by the HTTP adapter
//! and the in-memory stores, the ports that separate them, and the services
//! implementing the use-cases. Nothing here depends on Actix.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable category.
//! - User / UserSummary / LoginCredentials: directory entries and login input.
//! - Session / SessionToken: live sessions and their bearer tokens.
//! - Credential and friends: stored site logins with input rules.
//! - AutoLoginDomain: domains flagged for first auto-login.
//! - SessionAuthService, CredentialService, AutoLoginDomainService.

pub mod auth;
pub mod auto_login;
mod auto_login_domain_service;
pub mod credential;
mod credential_service;
pub mod error;
pub mod ports;
pub mod session;
mod session_auth_service;
pub mod token;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::auto_login::{AutoLoginDomain, EmptyDomain};
pub use self::auto_login_domain_service::AutoLoginDomainService;
pub use self::credential::{
    Credential, CredentialFields, CredentialFilter, CredentialId, EmptyCredentialId, InputRules,
};
pub use self::credential_service::CredentialService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::session::Session;
pub use self::session_auth_service::SessionAuthService;
pub use self::token::SessionToken;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserSummary, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use autofill_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Credential not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
