//! Types most callers need.

// Client and per-call controls
pub use crate::client::{Client, PageState, ResponseEnvelope};
pub use crate::transport::{CallContext, HyperTransport, RawResponse, SignedRequest, Transport};

// Request parameters and signing
pub use crate::auth::{AuthProvider, Credentials, RpcSignature};
pub use crate::http::Params;

// Extraction
pub use crate::extract::{Bindings, Document, Path, RawBody, Scalar, Sequence};

// Configuration
pub use crate::config::{ClientConfig, PaginationConfig};

// Error types
pub use crate::error::{Error, Kind, Result};

// Re-exported so embedders do not need a direct dependency
pub use tokio_util::sync::CancellationToken;
pub use url::Url;
