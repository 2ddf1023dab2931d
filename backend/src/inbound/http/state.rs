//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AutoLoginDomains, CredentialCommand, CredentialQuery, LoginService};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub credentials: Arc<dyn CredentialCommand>,
    pub credentials_query: Arc<dyn CredentialQuery>,
    pub auto_login_domains: Arc<dyn AutoLoginDomains>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub credentials: Arc<dyn CredentialCommand>,
    pub credentials_query: Arc<dyn CredentialQuery>,
    pub auto_login_domains: Arc<dyn AutoLoginDomains>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use autofill_backend::domain::{
    ///     AutoLoginDomainService, CredentialService, SessionAuthService,
    /// };
    /// use autofill_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use autofill_backend::outbound::memory::{
    ///     InMemoryAutoLoginDomainRepository, InMemoryCredentialRepository,
    ///     InMemorySessionRepository, InMemoryUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let credentials = Arc::new(CredentialService::new(
    ///     Arc::new(InMemoryCredentialRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: Arc::new(SessionAuthService::new(
    ///         Arc::new(InMemoryUserRepository::default()),
    ///         Arc::new(InMemorySessionRepository::new()),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     credentials: credentials.clone(),
    ///     credentials_query: credentials,
    ///     auto_login_domains: Arc::new(AutoLoginDomainService::new(Arc::new(
    ///         InMemoryAutoLoginDomainRepository::new(),
    ///     ))),
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            credentials,
            credentials_query,
            auto_login_domains,
        } = ports;
        Self {
            login,
            credentials,
            credentials_query,
            auto_login_domains,
        }
    }
}
