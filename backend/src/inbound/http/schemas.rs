//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation.
//! The wrappers mirror the serialised shape of their domain counterparts.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Error body returned by every endpoint on failure.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Stable machine-readable error code.
    #[schema(example = "unauthorized")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid token")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::UserSummary`].
#[derive(ToSchema)]
#[schema(as = UserSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSummarySchema {
    /// User identifier; omitted for users without one.
    #[schema(example = "2f02")]
    id: Option<String>,
    /// Login email.
    #[schema(example = "thong1")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::CredentialFields`].
///
/// Every field is optional. On update only the supplied fields change.
#[derive(ToSchema)]
#[schema(as = CredentialFields, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CredentialFieldsSchema {
    #[schema(example = "coupang.com")]
    domain: Option<String>,
    #[schema(example = "https://image10.coupangcdn.com/image/mobile/v3/web_favicon.png")]
    icon: Option<String>,
    /// Per-field rules keyed by field name (`username`, `password`, ...).
    #[schema(value_type = Option<Object>)]
    input_rules: Option<serde_json::Value>,
    multiple_step: Option<bool>,
    password: Option<String>,
    #[schema(example = "https://www.coupang.com")]
    url: Option<String>,
    username: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Credential`].
#[derive(ToSchema)]
#[schema(as = Credential, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CredentialSchema {
    /// Server-assigned identifier.
    #[schema(example = "fdcd")]
    id: String,
    /// Last write time in epoch milliseconds.
    #[schema(example = 1761012499864_i64)]
    timestamp: i64,
    domain: Option<String>,
    icon: Option<String>,
    #[schema(value_type = Option<Object>)]
    input_rules: Option<serde_json::Value>,
    multiple_step: Option<bool>,
    password: Option<String>,
    url: Option<String>,
    username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_wire_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"), "camelCase trace id");
        assert!(schema_json.contains("success"), "success flag");
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "unauthorized", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn credential_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<CredentialSchema>();
        assert_eq!(CredentialSchema::name(), "Credential");
        assert!(schema_json.contains("inputRules"));
        assert!(schema_json.contains("multipleStep"));
    }
}
