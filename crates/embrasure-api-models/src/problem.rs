//! Failure payloads returned by the directory REST service.
//!
//! # Design
//!
//! - Any well-formed JSON decodes into an [`HttpFailure`]; members with an
//!   unexpected shape are dropped or read leniently instead of failing the
//!   whole envelope.
//! - The response body is kept as raw JSON. [`FailureResponse::problem`] gives
//!   a typed view when the body is an object.
//! - Detail extraction is explicit ([`ErrorDetail`]) so callers decide how an
//!   absent detail renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Text rendered in place of a detail the server omitted.
pub const MISSING_DETAIL: &str = "undefined";

/// RFC9457-style problem document carried in a failed response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    /// URI reference identifying the problem type.
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Short summary of the issue.
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// HTTP status echoed by the service.
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Diagnostic message shown to the operator.
    pub detail: Option<String>,
}

/// Response half of a failed HTTP call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct FailureResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Status code of the response, when it reads as one.
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Raw response body.
    pub data: Option<Value>,
}

/// Error object produced by the HTTP layer for a failed request.
///
/// Transport failures (no response at all) leave `response` unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct HttpFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Response received from the service, if any.
    pub response: Option<FailureResponse>,
}

/// Outcome of looking for a server-provided detail in a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// No response body to inspect.
    Unavailable,
    /// A body was present but carried no `detail`.
    Missing,
    /// The server's detail text.
    Present(String),
}

impl ErrorDetail {
    /// Text appended to a message for this detail, if any.
    ///
    /// A missing detail renders as [`MISSING_DETAIL`] to keep message text
    /// identical to what operators have always seen.
    #[must_use]
    pub fn suffix(&self) -> Option<String> {
        match self {
            Self::Unavailable => None,
            Self::Missing => Some(format!(" ({MISSING_DETAIL})")),
            Self::Present(detail) => Some(format!(" ({detail})")),
        }
    }
}

/// Text form of a JSON value: strings verbatim, anything else as JSON.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Status code from a number or a numeric string.
fn status_of(value: &Value) -> Option<u16> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|code| u16::try_from(code).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl From<Value> for FailureResponse {
    fn from(value: Value) -> Self {
        let Value::Object(mut members) = value else {
            return Self::default();
        };
        Self {
            status: members.get("status").and_then(status_of),
            data: members.remove("data").filter(|data| !data.is_null()),
        }
    }
}

impl From<Value> for HttpFailure {
    fn from(value: Value) -> Self {
        let response = match value {
            Value::Object(mut members) => members
                .remove("response")
                .filter(Value::is_object)
                .map(FailureResponse::from),
            _ => None,
        };
        Self { response }
    }
}

impl FailureResponse {
    /// Typed view of the body when it is a JSON object.
    #[must_use]
    pub fn problem(&self) -> Option<ProblemDetails> {
        let members = self.data.as_ref()?.as_object()?;
        let text = |key: &str| members.get(key).filter(|v| !v.is_null()).map(text_of);
        Some(ProblemDetails {
            kind: text("type"),
            title: text("title"),
            status: members.get("status").and_then(status_of),
            detail: text("detail"),
        })
    }
}

impl HttpFailure {
    /// Build a failure carrying a problem body with the given detail.
    #[must_use]
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            response: Some(FailureResponse {
                status: None,
                data: Some(serde_json::json!({ "detail": detail.into() })),
            }),
        }
    }

    /// Decode a failure envelope from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Decode`] only when the text is not JSON at all.
    pub fn from_json(raw: &str) -> ModelResult<Self> {
        serde_json::from_str(raw).map_err(|source| ModelError::Decode {
            kind: "http_failure",
            source,
        })
    }

    /// Extract the server detail, distinguishing "no body" from "no detail".
    ///
    /// A body that is not an object has no `detail`. A non-string detail is
    /// rendered in its JSON text form.
    #[must_use]
    pub fn detail(&self) -> ErrorDetail {
        let Some(data) = self.response.as_ref().and_then(|resp| resp.data.as_ref()) else {
            return ErrorDetail::Unavailable;
        };
        data.get("detail")
            .map_or(ErrorDetail::Missing, |detail| ErrorDetail::Present(text_of(detail)))
    }
}
