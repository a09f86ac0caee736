//! HTTP utilities: query parameters and endpoint URLs

pub mod params;
pub mod url;

pub use params::Params;
pub use url::{extract_port, is_secure_scheme, origin_form, parse_endpoint, percent_encode};
