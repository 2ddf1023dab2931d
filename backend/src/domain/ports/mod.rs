//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `CredentialCommand`, `CredentialQuery`,
//! `AutoLoginDomains`) are called by inbound adapters. Driven ports (the
//! `*Repository` traits) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod auto_login_domain_repository;
mod auto_login_domains;
mod credential_command;
mod credential_query;
mod credential_repository;
mod login_service;
mod session_repository;
mod user_repository;

#[cfg(test)]
pub use auto_login_domain_repository::MockAutoLoginDomainRepository;
pub use auto_login_domain_repository::{
    AutoLoginDomainRepository, AutoLoginDomainRepositoryError,
};
pub use auto_login_domains::AutoLoginDomains;
pub use credential_command::CredentialCommand;
pub use credential_query::CredentialQuery;
#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
pub use credential_repository::{CredentialRepository, CredentialRepositoryError};
pub use login_service::{AuthenticatedSession, LoginService};
#[cfg(test)]
pub use session_repository::MockSessionRepository;
pub use session_repository::{SessionRepository, SessionRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
