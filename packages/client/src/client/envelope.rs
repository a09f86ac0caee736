//! Response envelope check
//!
//! Every response may carry `{"Code": .., "Message": .., "RequestId": ..}` at
//! the top level. A non-empty code fails the call whatever the status; a
//! non-200 status without a code is reported as a status error.

use http::StatusCode;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::error::{self, Result};
use crate::extract::Document;

pub const CODE: &str = "Code";
pub const MESSAGE: &str = "Message";
pub const REQUEST_ID: &str = "RequestId";

/// Top-level error fields of a response, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl ResponseEnvelope {
    /// Read the envelope fields. Bodies that are not JSON objects, and fields
    /// that are not strings, yield an empty envelope.
    #[must_use]
    pub fn probe(document: &Document) -> Self {
        let Some(Value::Object(map)) = document.try_value() else {
            return Self::default();
        };
        let field = |name: &str| {
            map.get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            code: field(CODE).filter(|code| !code.is_empty()),
            message: field(MESSAGE),
            request_id: field(REQUEST_ID),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.code.is_some()
    }
}

/// Fail on an envelope error code, then on a non-200 status.
///
/// # Errors
///
/// Returns a remote error for a non-empty `Code`, otherwise a status error if
/// `status` is not 200.
pub fn check(document: &Document, status: StatusCode, url: &Url) -> Result<()> {
    let envelope = ResponseEnvelope::probe(document);
    if let Some(code) = envelope.code {
        warn!(
            %code,
            status = status.as_u16(),
            request_id = envelope.request_id.as_deref().unwrap_or_default(),
            "remote error"
        );
        return Err(error::remote(
            code,
            envelope.message.unwrap_or_default(),
            envelope.request_id,
        )
        .with_url(url.clone()));
    }

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "unexpected status");
        return Err(error::status_code(url.clone(), status.as_u16()));
    }
    Ok(())
}
