pub mod credentials;
pub mod provider;
pub mod signature;

pub use credentials::Credentials;
pub use provider::{AuthError, AuthProvider};
pub use signature::RpcSignature;
