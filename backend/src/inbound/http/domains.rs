//! First auto-login domain handlers.
//!
//! ```text
//! POST /domain/first-auto-login {"domain":"coupang.com"}
//! GET /domain/first-auto-login
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{AutoLoginDomain, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const DOMAIN_REQUIRED: &str = "Domain is required and must be a string";

/// Body for `POST /domain/first-auto-login`.
///
/// `domain` is kept as raw JSON so non-string values can be rejected with
/// the same message as a missing one.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddDomainRequest {
    #[schema(value_type = String, example = "coupang.com")]
    pub domain: Option<Value>,
}

impl AddDomainRequest {
    fn into_domain(self) -> Result<AutoLoginDomain, Error> {
        match self.domain {
            Some(Value::String(raw)) => {
                AutoLoginDomain::new(raw).map_err(|_| Error::invalid_request(DOMAIN_REQUIRED))
            }
            _ => Err(Error::invalid_request(DOMAIN_REQUIRED)),
        }
    }
}

/// Acknowledgement for a flagged domain.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddDomainResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = String)]
    pub domain: AutoLoginDomain,
}

/// All flagged domains.
#[derive(Debug, Serialize, ToSchema)]
pub struct DomainListResponse {
    pub success: bool,
    #[schema(value_type = Vec<String>)]
    pub domains: Vec<AutoLoginDomain>,
}

/// Flag a domain for first auto-login. Re-adding is a no-op.
#[utoipa::path(
    post,
    path = "/domain/first-auto-login",
    request_body = AddDomainRequest,
    responses(
        (status = 200, description = "Domain flagged", body = AddDomainResponse),
        (status = 400, description = "Domain is required and must be a string", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["domains"],
    operation_id = "addFirstAutoLoginDomain"
)]
#[post("/domain/first-auto-login")]
pub async fn add_domain(
    state: web::Data<HttpState>,
    payload: Option<web::Json<AddDomainRequest>>,
) -> ApiResult<web::Json<AddDomainResponse>> {
    let request = payload.map(web::Json::into_inner).unwrap_or_default();
    let domain = state.auto_login_domains.add(request.into_domain()?).await?;
    Ok(web::Json(AddDomainResponse {
        success: true,
        message: format!("Added domain to first auto login: {domain}"),
        domain,
    }))
}

/// List flagged domains. Order is unspecified.
#[utoipa::path(
    get,
    path = "/domain/first-auto-login",
    responses(
        (status = 200, description = "Flagged domains", body = DomainListResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["domains"],
    operation_id = "listFirstAutoLoginDomains"
)]
#[get("/domain/first-auto-login")]
pub async fn list_domains(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DomainListResponse>> {
    let domains = state.auto_login_domains.list().await?;
    Ok(web::Json(DomainListResponse {
        success: true,
        domains,
    }))
}
