//! Core `AlidnsBuilder` structure and `build`

use std::fmt;
use std::sync::Arc;

use alidns_client::config::ClientConfig;
use alidns_client::error::{self, Result};
use alidns_client::{AuthProvider, Client, Credentials, HyperTransport, RpcSignature, Transport};

/// Builder for a [`Client`].
///
/// Credentials are required, either as a key pair or as a custom
/// [`AuthProvider`]. Everything else has a default.
#[derive(Default)]
pub struct AlidnsBuilder {
    pub(crate) credentials: Option<Credentials>,
    pub(crate) auth: Option<Arc<dyn AuthProvider>>,
    pub(crate) transport: Option<Arc<dyn Transport>>,
    pub(crate) config: ClientConfig,
}

impl AlidnsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the settings and build the client.
    ///
    /// # Errors
    ///
    /// Returns a builder error if no credentials were given, the credentials
    /// are incomplete, the configuration is invalid, or the default transport
    /// cannot be created.
    pub fn build(self) -> Result<Client> {
        let auth: Arc<dyn AuthProvider> = match (self.auth, self.credentials) {
            (Some(auth), _) => auth,
            (None, Some(credentials)) => {
                credentials.validate()?;
                Arc::new(RpcSignature::new(credentials))
            }
            (None, None) => return Err(error::builder("no credentials configured")),
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HyperTransport::new(&self.config.user_agent)?),
        };

        log::debug!(
            "building client for {} (version {}, timeout {:?})",
            self.config.endpoint,
            self.config.api_version,
            self.config.timeout
        );
        Client::with_parts(self.config, auth, transport)
    }
}

impl fmt::Debug for AlidnsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlidnsBuilder")
            .field("credentials", &self.credentials)
            .field("auth", &self.auth.as_ref().map(|a| a.auth_type()))
            .field("custom_transport", &self.transport.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_credentials_fails() {
        let err = AlidnsBuilder::new().build().expect_err("credentials required");
        assert!(err.is_builder());
    }

    #[test]
    fn test_build_with_credentials() {
        let client = AlidnsBuilder::new()
            .credentials(Credentials::new("id", "secret"))
            .build()
            .expect("client builds");
        assert_eq!(client.config().api_version, "2015-01-09");
    }

    #[test]
    fn test_debug_hides_secret() {
        let builder = AlidnsBuilder::new().access_key("id", "very-secret");
        let debug = format!("{builder:?}");
        assert!(!debug.contains("very-secret"));
    }
}
