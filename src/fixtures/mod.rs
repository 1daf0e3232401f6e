//! Response fixtures.
//!
//! Every route answers with one of these documents. Static fixtures are
//! written to the wire verbatim; generated ones are serialized per request.

pub mod masterdata;
pub mod otp;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Content type attached to every fixture response.
pub const APPLICATION_JSON: &str = "application/json";

pub const AUDIT_SUCCESS: &str = r#"{"status":"success"}"#;
pub const SMS_SUCCESS: &str = r#"{"response":{"status":"success"}}"#;
pub const ACCESS_TOKEN: &str = r#"{"access_token":"test-access-token"}"#;

/// A JSON document returned by a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Fixture {
    /// Pre-serialized document, sent byte for byte.
    Static(&'static str),
    /// Document built for this request.
    Generated(Value),
}

impl Fixture {
    /// Serialized response body.
    pub fn body(&self) -> String {
        match self {
            Fixture::Static(doc) => (*doc).to_string(),
            Fixture::Generated(value) => value.to_string(),
        }
    }
}

impl IntoResponse for Fixture {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
            self.body(),
        )
            .into_response()
    }
}
