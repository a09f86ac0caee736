//! Credential methods

use std::sync::Arc;

use alidns_client::error::Result;
use alidns_client::{AuthProvider, Credentials};

use crate::builder::core::AlidnsBuilder;

impl AlidnsBuilder {
    /// Sign requests with `credentials`.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sign requests with an access key pair.
    ///
    /// # Examples
    /// ```
    /// let client = alidns::AlidnsBuilder::new()
    ///     .access_key("LTAI-example", "secret")
    ///     .build();
    /// assert!(client.is_ok());
    /// ```
    #[must_use]
    pub fn access_key(self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials(Credentials::new(id, secret))
    }

    /// Read the key pair from `ALIDNS_KEY_ID` and `ALIDNS_KEY_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if either variable is unset or empty.
    pub fn credentials_from_env(self) -> Result<Self> {
        Ok(self.credentials(Credentials::from_env()?))
    }

    /// Replace request signing entirely. Takes precedence over credentials.
    #[must_use]
    pub fn auth_provider(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }
}
