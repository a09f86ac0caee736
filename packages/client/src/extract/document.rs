//! Response body held once per call and shared by every binding

use bytes::Bytes;
use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::error::{self, Result};

/// Raw response body with a lazily parsed JSON view.
#[derive(Debug)]
pub struct Document {
    body: Bytes,
    value: OnceCell<Value>,
}

impl Document {
    #[must_use]
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            value: OnceCell::new(),
        }
    }

    /// Verbatim body bytes
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The body parsed as JSON, parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the body is not valid JSON.
    pub fn value(&self) -> Result<&Value> {
        self.value
            .get_or_try_init(|| serde_json::from_slice(&self.body).map_err(error::decode))
    }

    /// Parse without failing, for probes that tolerate non-JSON bodies.
    #[must_use]
    pub fn try_value(&self) -> Option<&Value> {
        self.value().ok()
    }
}

impl From<&'static str> for Document {
    fn from(body: &'static str) -> Self {
        Self::new(Bytes::from_static(body.as_bytes()))
    }
}
