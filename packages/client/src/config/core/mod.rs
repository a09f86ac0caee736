//! Core client configuration types and default implementations
//!
//! - `types`: `ClientConfig` and `PaginationConfig` field definitions and validation
//! - `defaults`: values matching the public AliDNS endpoint
//! - `builders`: fluent `with_*` methods

pub mod builders;
pub mod defaults;
pub mod types;

pub use types::{ClientConfig, PaginationConfig};
