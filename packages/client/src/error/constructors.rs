use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for invalid configuration.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a signing failure.
pub fn sign<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Sign).with(e.into())
}

/// Creates an `Error` for a failed exchange.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e.into())
}

/// Creates a transport `Error` for an exchange that exceeded its deadline.
pub fn timed_out() -> Error {
    transport(super::helpers::TimedOut)
}

/// Creates a transport `Error` for an exchange aborted by the caller.
pub fn canceled() -> Error {
    transport(super::helpers::OperationCanceled)
}

/// Creates an `Error` from a response envelope error code.
pub fn remote(code: String, message: String, request_id: Option<String>) -> Error {
    Error::new(Kind::Remote {
        code,
        message,
        request_id,
    })
}

/// Creates an `Error` for an unexpected status code.
pub fn status_code(url: url::Url, status: u16) -> Error {
    Error::new(Kind::Status(status)).with_url(url)
}

/// Creates an `Error` for a decode error.
pub fn decode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Decode).with(e.into())
}

/// Creates an `Error` for destinations that break the pairing convention.
pub fn arity<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Arity).with(e.into())
}
