//! Builder methods for client configuration

use std::time::Duration;

use url::Url;

use super::types::{ClientConfig, PaginationConfig};

impl ClientConfig {
    /// Point the client at another endpoint, such as a regional one
    ///
    /// # Examples
    /// ```
    /// use alidns_client::config::ClientConfig;
    ///
    /// let endpoint = url::Url::parse("https://alidns.cn-hangzhou.aliyuncs.com/").unwrap();
    /// let config = ClientConfig::default().with_endpoint(endpoint);
    /// assert_eq!(config.endpoint.host_str(), Some("alidns.cn-hangzhou.aliyuncs.com"));
    /// ```
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set the default per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the pagination field names
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }
}
