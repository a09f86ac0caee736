//! Cryptographic utilities
//!
//! - Nonce generation for request signing

pub mod random;

pub use random::*;
