//! Signed-request client
//!
//! [`Client`] signs parameters, runs one exchange through its transport,
//! checks the response envelope and binds the body into caller destinations.
//! [`Client::get_all`] repeats that page after page.

pub mod core;
pub mod envelope;
pub mod pagination;

pub use core::Client;

pub use envelope::ResponseEnvelope;
pub use pagination::PageState;
