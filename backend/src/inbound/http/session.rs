//! Bearer token extraction.
//!
//! Handlers take a [`BearerToken`] and decide themselves whether a missing
//! token is an error: logout tolerates it, `/auth/me` does not.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, SessionToken};

const BEARER_PREFIX: &str = "Bearer ";

/// Token presented in the `Authorization` header, if any.
///
/// The header value with a leading `Bearer ` removed is the token; a value
/// without the prefix is used as-is. Absent, empty or non-UTF-8 headers
/// count as no token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(Option<SessionToken>);

impl BearerToken {
    /// Parse a raw `Authorization` header value.
    pub fn from_header(value: Option<&str>) -> Self {
        let token = value
            .map(|raw| raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw))
            .and_then(SessionToken::parse);
        Self(token)
    }

    /// The token, if one was sent.
    pub fn token(&self) -> Option<&SessionToken> {
        self.0.as_ref()
    }

    /// The token, or `401 No token provided`.
    pub fn require(&self) -> Result<&SessionToken, Error> {
        self.token()
            .ok_or_else(|| Error::unauthorized("No token provided"))
    }
}

impl FromRequest for BearerToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        ready(Ok(Self::from_header(header)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[case::bearer(Some("Bearer abc-123"), Some("abc-123"))]
    #[case::raw_value(Some("abc-123"), Some("abc-123"))]
    #[case::prefix_only(Some("Bearer "), None)]
    #[case::spaces_after_prefix(Some("Bearer    "), Some("   "))]
    #[case::blank(Some(""), None)]
    #[case::absent(None, None)]
    fn parses_authorization_header(#[case] header: Option<&str>, #[case] expected: Option<&str>) {
        let token = BearerToken::from_header(header);

        assert_eq!(token.token().map(|token| token.as_ref()), expected);
    }

    #[test]
    fn require_reports_missing_token() {
        let error = BearerToken::from_header(None)
            .require()
            .expect_err("missing token");

        assert_eq!(error.code(), ErrorCode::Unauthorized);
        assert_eq!(error.message(), "No token provided");
    }

    #[actix_web::test]
    async fn extracts_from_request_headers() {
        let (req, mut payload) = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer live-token"))
            .to_http_parts();

        let token = BearerToken::from_request(&req, &mut payload)
            .await
            .expect("extraction never fails");

        assert_eq!(token.token().map(|token| token.as_ref()), Some("live-token"));
    }
}
