//! Client configuration structure and validation

use std::time::Duration;

use url::Url;

use crate::error::{self, Result};

/// Longest accepted request timeout.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(3600);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API endpoint; the signed query is appended to it
    pub endpoint: Url,

    /// Value of the `Version` parameter
    pub api_version: String,

    /// Value of the `Format` parameter
    pub format: String,

    /// Default per-request timeout, used when a call does not set its own
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Where pagination counters live in responses and requests
    pub pagination: PaginationConfig,
}

/// Names of the paging fields. These must match the remote API's envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Response path of the current page number
    pub page_number_path: String,
    /// Response path of the total item count
    pub total_count_path: String,
    /// Response path of the page size
    pub page_size_path: String,
    /// Request parameter selecting the page
    pub page_number_param: String,
}

impl ClientConfig {
    /// Validate configuration before a client is built
    ///
    /// # Errors
    ///
    /// Returns a builder error if the endpoint is not http(s), the timeout is
    /// zero or above one hour, or a required string is empty.
    pub fn validate(&self) -> Result<()> {
        crate::http::url::validate_endpoint(&self.endpoint)?;

        if self.timeout.is_zero() {
            return Err(error::builder("timeout must be greater than zero"));
        }
        if self.timeout > MAX_TIMEOUT {
            return Err(error::builder("timeout must not exceed 1 hour"));
        }
        if self.api_version.is_empty() {
            return Err(error::builder("api version cannot be empty"));
        }
        if self.format.is_empty() {
            return Err(error::builder("format cannot be empty"));
        }
        if self.user_agent.is_empty() {
            return Err(error::builder("user agent cannot be empty"));
        }

        self.pagination.validate()
    }
}

impl PaginationConfig {
    /// Every counter path and parameter name must be set.
    ///
    /// # Errors
    ///
    /// Returns a builder error naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("page number path", &self.page_number_path),
            ("total count path", &self.total_count_path),
            ("page size path", &self.page_size_path),
            ("page number parameter", &self.page_number_param),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(error::builder(format!("{name} cannot be empty"))),
            None => Ok(()),
        }
    }
}
