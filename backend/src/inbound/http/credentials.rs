//! Credential CRUD handlers.
//!
//! ```text
//! GET /credential?domain=coupang
//! POST /credential {"domain":"example.com","username":"a","password":"b"}
//! PUT /credential/{id} {"password":"c"}
//! DELETE /credential/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Credential, CredentialFields, CredentialFilter, CredentialId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CredentialFieldsSchema, CredentialSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::MessageResponse;

/// Query parameters for `GET /credential`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CredentialListQuery {
    /// Case-insensitive substring of the stored domain. Empty lists all.
    pub domain: Option<String>,
}

fn parse_id(raw: String) -> Result<CredentialId, Error> {
    CredentialId::new(raw).map_err(|_| Error::not_found("Credential not found"))
}

/// Decode a credential body. A blank body stands for `{}` whatever the
/// content type; anything else must be a JSON object.
fn parse_fields(body: &[u8]) -> Result<CredentialFields, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CredentialFields::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| Error::invalid_request(format!("Invalid JSON body: {err}")))
}

/// List stored credentials, optionally filtered by domain.
#[utoipa::path(
    get,
    path = "/credential",
    params(CredentialListQuery),
    responses(
        (status = 200, description = "Credentials in insertion order", body = [CredentialSchema]),
        (status = 400, description = "Invalid query string", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["credentials"],
    operation_id = "listCredentials"
)]
#[get("/credential")]
pub async fn list_credentials(
    state: web::Data<HttpState>,
    query: web::Query<CredentialListQuery>,
) -> ApiResult<web::Json<Vec<Credential>>> {
    let filter = CredentialFilter::by_domain(query.domain.as_deref());
    let credentials = state.credentials_query.list(&filter).await?;
    Ok(web::Json(credentials))
}

/// Store a new credential. The server assigns `id` and `timestamp`.
#[utoipa::path(
    post,
    path = "/credential",
    request_body = CredentialFieldsSchema,
    responses(
        (status = 201, description = "Created credential", body = CredentialSchema),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["credentials"],
    operation_id = "createCredential"
)]
#[post("/credential")]
pub async fn create_credential(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let credential = state.credentials.create(parse_fields(&body)?).await?;
    Ok(HttpResponse::Created().json(credential))
}

/// Merge the supplied fields into an existing credential.
#[utoipa::path(
    put,
    path = "/credential/{id}",
    params(("id" = String, Path, description = "Credential identifier")),
    request_body = CredentialFieldsSchema,
    responses(
        (status = 200, description = "Updated credential", body = CredentialSchema),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 404, description = "Credential not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["credentials"],
    operation_id = "updateCredential"
)]
#[put("/credential/{id}")]
pub async fn update_credential(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<Credential>> {
    let id = parse_id(path.into_inner())?;
    let credential = state.credentials.update(&id, parse_fields(&body)?).await?;
    Ok(web::Json(credential))
}

/// Delete a credential.
#[utoipa::path(
    delete,
    path = "/credential/{id}",
    params(("id" = String, Path, description = "Credential identifier")),
    responses(
        (status = 200, description = "Credential deleted", body = MessageResponse),
        (status = 404, description = "Credential not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["credentials"],
    operation_id = "deleteCredential"
)]
#[delete("/credential/{id}")]
pub async fn delete_credential(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_id(path.into_inner())?;
    state.credentials.delete(&id).await?;
    Ok(web::Json(MessageResponse::ok("Credential deleted")))
}
