//! Client configuration
//!
//! Endpoint, protocol parameters, timeouts and the response paths the
//! pagination loop reads its counters from.

pub mod core;

pub use core::{ClientConfig, PaginationConfig};
