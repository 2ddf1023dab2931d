//! In-memory adapters for the driven ports.
//!
//! Each store owns its state behind a `std::sync::Mutex`. Every port method
//! takes the lock once, completes its whole mutation and releases it before
//! returning; no guard lives across an `.await`. A poisoned lock surfaces as
//! the port's `Unavailable` error.

mod auto_login_domains;
mod credentials;
mod sessions;
mod users;

pub use auto_login_domains::InMemoryAutoLoginDomainRepository;
pub use credentials::InMemoryCredentialRepository;
pub use sessions::InMemorySessionRepository;
pub use users::InMemoryUserRepository;

const POISONED: &str = "lock poisoned";
