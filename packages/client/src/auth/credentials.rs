//! Access key pair

use std::fmt;

use zeroize::Zeroizing;

use super::provider::AuthError;
use crate::error::{self, Result};

/// Environment variable holding the access key id.
pub const ENV_ACCESS_KEY_ID: &str = "ALIDNS_KEY_ID";
/// Environment variable holding the access key secret.
pub const ENV_ACCESS_KEY_SECRET: &str = "ALIDNS_KEY_SECRET";

/// Access key id and secret. The secret is wiped on drop and never printed.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    access_key_secret: Zeroizing<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: Zeroizing::new(access_key_secret.into()),
        }
    }

    /// Read `ALIDNS_KEY_ID` and `ALIDNS_KEY_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let read = |name: &'static str| {
            std::env::var(name)
                .ok()
                .filter(|value| !value.is_empty())
                .ok_or_else(|| error::builder(AuthError::MissingCredential(name)))
        };
        Ok(Self::new(
            read(ENV_ACCESS_KEY_ID)?,
            read(ENV_ACCESS_KEY_SECRET)?,
        ))
    }

    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn access_key_secret(&self) -> &str {
        &self.access_key_secret
    }

    /// Both halves are present.
    ///
    /// # Errors
    ///
    /// Returns a builder error naming the empty half.
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(error::builder(AuthError::MissingCredential("access key id")));
        }
        if self.access_key_secret.is_empty() {
            return Err(error::builder(AuthError::MissingCredential(
                "access key secret",
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new("LTAIexample", "very-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("LTAIexample"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_validate_empty_halves() {
        assert!(Credentials::new("id", "secret").validate().is_ok());
        assert!(Credentials::new("", "secret").validate().unwrap_err().is_builder());
        assert!(Credentials::new("id", "").validate().unwrap_err().is_builder());
    }
}
