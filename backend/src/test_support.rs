//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and with the `test-support` feature.

use std::io::Write;
use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body};
use actix_web::{App, web};
use mockable::{Clock, DefaultClock};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::domain::{AutoLoginDomainService, CredentialService, SessionAuthService};
use crate::inbound::http::api_app;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{
    InMemoryAutoLoginDomainRepository, InMemoryCredentialRepository, InMemorySessionRepository,
    InMemoryUserRepository,
};
use crate::outbound::seed::SeedData;

/// Login service wired to the in-memory stores.
pub type MemoryAuthService = SessionAuthService<InMemoryUserRepository, InMemorySessionRepository>;

/// Fresh in-memory backend. Each instance owns its own stores.
#[derive(Clone)]
pub struct MemoryBackend {
    pub state: HttpState,
    /// Concrete login service, for assertions on the token index.
    pub auth: Arc<MemoryAuthService>,
}

impl MemoryBackend {
    /// Wire services over stores filled from `seed`.
    pub fn new(seed: SeedData, clock: Arc<dyn Clock>) -> Self {
        let SeedData { users, credentials } = seed;
        let auth = Arc::new(SessionAuthService::new(
            Arc::new(InMemoryUserRepository::new(users)),
            Arc::new(InMemorySessionRepository::new()),
            clock.clone(),
        ));
        let credential_service = Arc::new(CredentialService::new(
            Arc::new(InMemoryCredentialRepository::new(credentials)),
            clock,
        ));
        let state = HttpState::new(HttpStatePorts {
            login: auth.clone(),
            credentials: credential_service.clone(),
            credentials_query: credential_service,
            auto_login_domains: Arc::new(AutoLoginDomainService::new(Arc::new(
                InMemoryAutoLoginDomainRepository::new(),
            ))),
        });
        Self { state, auth }
    }

    /// Backend filled with the built-in seed and a real clock.
    pub fn seeded() -> Self {
        let seed = match SeedData::builtin() {
            Ok(seed) => seed,
            Err(error) => panic!("built-in seed must parse: {error}"),
        };
        Self::new(seed, Arc::new(DefaultClock))
    }

    /// The production [`App`] over this backend's stores.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<EitherBody<BoxBody>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        api_app(web::Data::new(self.state.clone()))
    }
}

/// Send `request` and decode the JSON body (`Null` when empty).
pub async fn send<S, B>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = read_body(response).await;
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    match serde_json::from_slice(&bytes) {
        Ok(body) => (status, body),
        Err(error) => panic!("response body is not JSON: {error}"),
    }
}

/// Write `contents` to a temporary file, kept alive by the returned handle.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = match NamedTempFile::new() {
        Ok(file) => file,
        Err(error) => panic!("create temp file: {error}"),
    };
    if let Err(error) = file.write_all(contents.as_bytes()) {
        panic!("write temp file: {error}");
    }
    file
}
