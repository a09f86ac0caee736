//! Alibaba Cloud DNS API
//!
//! Thin facade over [`alidns_client`]: a builder for the client, parameter
//! builders for the DNS actions and typed listing items.
//!
//! ```no_run
//! use alidns::actions::describe_domain_records;
//! use alidns::records::{DOMAIN_RECORDS, DomainRecord};
//! use alidns::{Alidns, Bindings, CallContext, Sequence};
//!
//! # async fn run() -> alidns::Result<()> {
//! let client = Alidns::from_env()?;
//! let mut records: Vec<DomainRecord> = Vec::new();
//! client
//!     .get_all(
//!         describe_domain_records("example.com", []),
//!         &mut Bindings::new().pair(Sequence::new(&mut records), DOMAIN_RECORDS),
//!         &CallContext::default(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod actions;
pub mod builder;
pub mod records;

pub use builder::AlidnsBuilder;

// Re-export the client API
pub use alidns_client::prelude::*;
pub use alidns_client::{config, error, extract};

/// Entry point providing static constructors
pub struct Alidns;

impl Alidns {
    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> AlidnsBuilder {
        AlidnsBuilder::new()
    }

    /// Client for the public endpoint with credentials from
    /// `ALIDNS_KEY_ID` and `ALIDNS_KEY_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the variables are missing or the client
    /// cannot be built.
    pub fn from_env() -> Result<Client> {
        AlidnsBuilder::new().credentials_from_env()?.build()
    }

    /// Client for the public endpoint signing with the given key pair.
    ///
    /// # Errors
    ///
    /// Returns a builder error if either half of the key pair is empty.
    pub fn with_access_key(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Client> {
        AlidnsBuilder::new()
            .access_key(access_key_id, access_key_secret)
            .build()
    }
}

/// Start configuring a client.
///
/// Shorthand for `Alidns::builder()`
#[must_use]
pub fn builder() -> AlidnsBuilder {
    Alidns::builder()
}
