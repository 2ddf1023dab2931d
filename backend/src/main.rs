//! Backend entry-point: loads settings and seed data, then serves the API.

mod server;

use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use autofill_backend::outbound::seed::SeedData;
use server::{ServerConfig, ServerSettings, build_http_state, create_server};

const ENDPOINTS: &[&str] = &[
    "POST   /user",
    "POST   /auth/logout",
    "GET    /auth/me",
    "POST   /auth/refresh-token",
    "GET    /credential",
    "POST   /credential",
    "PUT    /credential/{id}",
    "DELETE /credential/{id}",
    "POST   /domain/first-auto-login",
    "GET    /domain/first-auto-login",
];

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|error| io::Error::other(error.to_string()))?;
    let seed = SeedData::resolve(settings.seed_path()).map_err(io::Error::other)?;
    info!(
        users = seed.users.len(),
        credentials = seed.credentials.len(),
        seed_path = ?settings.seed_path(),
        "seed data loaded"
    );

    let config = ServerConfig::from(&settings);
    let server = create_server(build_http_state(seed), config)?;
    info!(host = settings.host(), port = settings.port(), "mock API listening");
    for endpoint in ENDPOINTS {
        info!(endpoint, "route available");
    }
    server.await
}
