//! Endpoint, timeout and transport settings

use std::sync::Arc;
use std::time::Duration;

use alidns_client::Transport;
use alidns_client::config::{ClientConfig, PaginationConfig};
use alidns_client::error::Result;
use alidns_client::http::parse_endpoint;
use url::Url;

use crate::builder::core::AlidnsBuilder;

impl AlidnsBuilder {
    /// Use another endpoint, such as a regional one.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.config = self.config.with_endpoint(endpoint);
        self
    }

    /// Parse `endpoint` and use it.
    ///
    /// # Errors
    ///
    /// Returns a builder error if `endpoint` is not an absolute http(s) URL.
    pub fn endpoint_str(self, endpoint: &str) -> Result<Self> {
        Ok(self.endpoint(parse_endpoint(endpoint)?))
    }

    /// Default timeout for each request; a `CallContext` may override it.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.with_api_version(version);
        self
    }

    #[must_use]
    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.config = self.config.with_pagination(pagination);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Send requests through `transport` instead of the default HTTPS one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }
}
