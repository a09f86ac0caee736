//! Client builder modules
//!
//! [`AlidnsBuilder`] collects credentials, endpoint and transport settings and
//! produces a ready [`alidns_client::Client`].

pub mod auth;
pub mod core;
pub mod methods;

pub use core::AlidnsBuilder;
