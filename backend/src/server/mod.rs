//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};
pub use state_builders::build_http_state;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};

#[cfg(debug_assertions)]
use autofill_backend::doc::ApiDoc;
use autofill_backend::inbound::http::api_app;
use autofill_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Construct an Actix HTTP server over `state`.
///
/// Every worker shares the same `HttpState`; Swagger UI is added in debug
/// builds.
pub fn create_server(state: HttpState, config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { host, port } = config;
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let app = api_app(state.clone());

        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind((host.as_str(), port))?
    .run();

    Ok(server)
}
