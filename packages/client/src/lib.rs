//! # AliDNS client core
//!
//! Signed-request client for the Alibaba Cloud DNS API with path-based
//! extraction of typed values from JSON responses.
//!
//! ## Features
//!
//! - **RPC signature v1.0** (HMAC-SHA1) over sorted, percent-encoded queries
//! - **Path extraction**: `Domains.Domain.*.DomainName` into a `Vec<String>`
//! - **Automatic pagination** driven by `PageNumber`/`TotalCount`/`PageSize`
//! - **Envelope errors** surfaced with the remote code, message and request id
//! - **Injectable transport**; the default is hyper HTTP/1.1 over rustls
//!
//! ## Usage
//!
//! ```no_run
//! use alidns_client::{Bindings, CallContext, Client, Credentials, Params, Sequence};
//!
//! # async fn run() -> alidns_client::Result<()> {
//! let client = Client::new(Credentials::from_env()?)?;
//! let mut names: Vec<String> = Vec::new();
//! client
//!     .get_all(
//!         Params::new().with("Action", "DescribeDomains"),
//!         &mut Bindings::new().pair(Sequence::new(&mut names), "Domains.Domain.*.DomainName"),
//!         &CallContext::default(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod client;
pub mod config;
pub mod crypto;
pub mod error;
pub mod extract;
pub mod http;
pub mod transport;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
