//! Request correlation and access logging.
//!
//! [`Trace`] runs every request inside a fresh [`TraceId`] scope, stamps the
//! id on the response as the `trace-id` header and writes one access log line
//! once the response is ready. Errors built inside the scope pick the id up
//! on their own (see [`crate::domain::Error::new`]).

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{info, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware assigning a [`TraceId`] to each request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use autofill_backend::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

/// What the access log needs to remember about a request.
struct RequestLine {
    method: Method,
    path: String,
    started: Instant,
    trace_id: TraceId,
}

impl RequestLine {
    fn record(&self, status: u16, outcome: &'static str) {
        let elapsed_ms = self.started.elapsed().as_millis();
        info!(
            method = %self.method,
            path = %self.path,
            status,
            elapsed_ms,
            trace_id = %self.trace_id,
            "{outcome}"
        );
    }
}

fn stamp_trace_id<B>(response: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => warn!(%error, %trace_id, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = RequestLine {
            method: req.method().clone(),
            path: req.path().to_owned(),
            started: Instant::now(),
            trace_id: TraceId::generate(),
        };
        let trace_id = line.trace_id;
        let fut = TraceId::scope(trace_id, self.service.call(req));
        Box::pin(async move {
            match fut.await {
                Ok(mut response) => {
                    stamp_trace_id(&mut response, trace_id);
                    line.record(response.status().as_u16(), "request handled");
                    Ok(response)
                }
                Err(error) => {
                    let status = error.as_response_error().status_code();
                    line.record(status.as_u16(), "request failed");
                    Err(error)
                }
            }
        })
    }
}
