//! Authentication provider trait

use crate::error::Result;
use crate::http::Params;

/// Applies authentication to a request's query parameters.
///
/// Called once per request after every action, paging and common parameter
/// has been set, so the provider sees the final parameter set.
pub trait AuthProvider: Send + Sync {
    /// Add authentication parameters to `params`.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the request cannot be authenticated.
    fn apply_query_auth(&self, params: &mut Params) -> Result<()>;

    /// Get authentication method name
    fn auth_type(&self) -> &'static str;
}

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A credential was not provided
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}
