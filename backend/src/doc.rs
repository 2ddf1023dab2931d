//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the schema wrappers from
//! [`crate::inbound::http::schemas`] and a bearer-token security scheme. The
//! document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use crate::inbound::http::domains::{AddDomainRequest, AddDomainResponse, DomainListResponse};
use crate::inbound::http::schemas::{
    CredentialFieldsSchema, CredentialSchema, ErrorCodeSchema, ErrorSchema, UserSummarySchema,
};
use crate::inbound::http::users::{
    CurrentUserResponse, LoginRequest, LoginResponse, MessageResponse, RefreshTokenResponse,
};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Autofill mock API",
        description = "In-memory sessions, stored credentials and first auto-login domains for the autofill extension."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::refresh_token,
        crate::inbound::http::credentials::list_credentials,
        crate::inbound::http::credentials::create_credential,
        crate::inbound::http::credentials::update_credential,
        crate::inbound::http::credentials::delete_credential,
        crate::inbound::http::domains::add_domain,
        crate::inbound::http::domains::list_domains,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSummarySchema,
        CredentialSchema,
        CredentialFieldsSchema,
        LoginRequest,
        LoginResponse,
        CurrentUserResponse,
        RefreshTokenResponse,
        MessageResponse,
        AddDomainRequest,
        AddDomainResponse,
        DomainListResponse,
    )),
    tags(
        (name = "auth", description = "Login and bearer-token sessions"),
        (name = "credentials", description = "Stored site credentials"),
        (name = "domains", description = "Domains flagged for first auto-login")
    )
)]
pub struct ApiDoc;
