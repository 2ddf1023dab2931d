//! Builders wiring in-memory stores into HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use autofill_backend::domain::{AutoLoginDomainService, CredentialService, SessionAuthService};
use autofill_backend::inbound::http::state::{HttpState, HttpStatePorts};
use autofill_backend::outbound::memory::{
    InMemoryAutoLoginDomainRepository, InMemoryCredentialRepository, InMemorySessionRepository,
    InMemoryUserRepository,
};
use autofill_backend::outbound::seed::SeedData;

/// Fill the stores from `seed` and wrap them in services sharing one clock.
pub fn build_http_state(seed: SeedData) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let SeedData { users, credentials } = seed;

    let login = Arc::new(SessionAuthService::new(
        Arc::new(InMemoryUserRepository::new(users)),
        Arc::new(InMemorySessionRepository::new()),
        clock.clone(),
    ));
    let credentials = Arc::new(CredentialService::new(
        Arc::new(InMemoryCredentialRepository::new(credentials)),
        clock,
    ));
    let auto_login_domains = Arc::new(AutoLoginDomainService::new(Arc::new(
        InMemoryAutoLoginDomainRepository::new(),
    )));

    HttpState::new(HttpStatePorts {
        login,
        credentials: credentials.clone(),
        credentials_query: credentials,
        auto_login_domains,
    })
}
