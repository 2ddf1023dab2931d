//! HTTP inbound adapter exposing REST endpoints.

pub mod credentials;
pub mod domains;
pub mod error;
pub mod schemas;
pub mod session;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_cors::Cors;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::middleware::Trace;
use state::HttpState;

/// The full API as one [`App`]: shared state, permissive CORS, [`Trace`]
/// outermost (so preflight answers carry a trace id too) and every route.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use autofill_backend::inbound::http::{api_app, state::HttpState};
///
/// fn build(state: web::Data<HttpState>) {
///     let _app = api_app(state);
/// }
/// ```
pub fn api_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(state)
        .wrap(Cors::permissive())
        .wrap(Trace)
        .configure(configure)
}

/// Register every endpoint plus the JSON and query extractor settings.
///
/// The caller provides `web::Data<HttpState>` and any outer middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use autofill_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(users::login)
        .service(users::logout)
        .service(users::current_user)
        .service(users::refresh_token)
        .service(credentials::list_credentials)
        .service(credentials::create_credential)
        .service(credentials::update_credential)
        .service(credentials::delete_credential)
        .service(domains::add_domain)
        .service(domains::list_domains);
}
