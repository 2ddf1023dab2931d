//! Login and session handlers.
//!
//! ```text
//! POST /user {"email":"thong1","password":"111"}
//! GET /auth/me            Authorization: Bearer <token>
//! POST /auth/refresh-token Authorization: Bearer <token>
//! POST /auth/logout       Authorization: Bearer <token>
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, UserSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSummarySchema};
use crate::inbound::http::session::BearerToken;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /user`.
///
/// Both fields are optional at the wire level; a missing or empty value is
/// reported as invalid credentials rather than a validation error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "thong1")]
    pub email: Option<String>,
    #[schema(example = "111")]
    pub password: Option<String>,
}

/// Successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    #[schema(value_type = UserSummarySchema)]
    pub user: UserSummary,
}

/// Resolved session owner for `GET /auth/me`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub success: bool,
    #[schema(value_type = UserSummarySchema)]
    pub user: UserSummary,
}

/// Replacement token for `POST /auth/refresh-token`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub success: bool,
    pub token: String,
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Authenticate a user and open a session.
///
/// A malformed or missing body is treated like wrong credentials.
#[utoipa::path(
    post,
    path = "/user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/user")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: Option<web::Json<LoginRequest>>,
) -> ApiResult<web::Json<LoginResponse>> {
    let request = payload.map(web::Json::into_inner).unwrap_or_default();
    let credentials =
        LoginCredentials::try_from_parts(request.email.as_deref(), request.password.as_deref())
            .map_err(|_| Error::unauthorized("Invalid credentials"))?;
    let session = state.login.login(&credentials).await?;
    Ok(web::Json(LoginResponse {
        success: true,
        token: session.token.into(),
        user: session.user,
    }))
}

/// Close the caller's session.
///
/// Always succeeds, with or without a valid token.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/auth/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    bearer: BearerToken,
) -> ApiResult<web::Json<MessageResponse>> {
    if let Some(token) = bearer.token() {
        state.login.logout(token).await?;
    }
    Ok(web::Json(MessageResponse::ok("Logged out successfully")))
}

/// Return the user owning the bearer token.
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Session owner", body = CurrentUserResponse),
        (status = 401, description = "No token provided or invalid token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "currentUser"
)]
#[get("/auth/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    bearer: BearerToken,
) -> ApiResult<web::Json<CurrentUserResponse>> {
    let user = state.login.current_user(bearer.require()?).await?;
    Ok(web::Json(CurrentUserResponse {
        success: true,
        user,
    }))
}

/// Exchange the bearer token for a new one. The old token stops working.
#[utoipa::path(
    post,
    path = "/auth/refresh-token",
    responses(
        (status = 200, description = "New token issued", body = RefreshTokenResponse),
        (status = 401, description = "No token provided or invalid token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "refreshToken"
)]
#[post("/auth/refresh-token")]
pub async fn refresh_token(
    state: web::Data<HttpState>,
    bearer: BearerToken,
) -> ApiResult<web::Json<RefreshTokenResponse>> {
    let token = state.login.refresh(bearer.require()?).await?;
    Ok(web::Json(RefreshTokenResponse {
        success: true,
        token: token.into(),
    }))
}
