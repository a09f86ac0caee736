use std::error::Error as StdError;
use std::io;

use super::helpers::{OperationCanceled, TimedOut};
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error comes from client configuration.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if the request could not be signed.
    #[must_use]
    pub fn is_sign(&self) -> bool {
        matches!(self.inner.kind, Kind::Sign)
    }

    /// Returns true if the transport failed, including timeouts and cancellation.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.inner.kind, Kind::Transport)
    }

    /// Returns true if the remote API answered with an error code.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self.inner.kind, Kind::Remote { .. })
    }

    /// Returns true if the error was raised from the status code alone.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self.inner.kind, Kind::Status(_))
    }

    /// Returns true if the error is related to decoding the response's body
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self.inner.kind, Kind::Decode)
    }

    /// Returns true if the destinations broke the pairing convention.
    #[must_use]
    pub fn is_arity(&self) -> bool {
        matches!(self.inner.kind, Kind::Arity)
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(io) = err.downcast_ref::<io::Error>() {
                if io.kind() == io::ErrorKind::TimedOut {
                    return true;
                }
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the call was aborted through its cancellation token.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.source().is_some_and(|err| err.is::<OperationCanceled>())
    }

    /// Returns the status code, if the error was generated from one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.inner.kind {
            Kind::Status(code) => Some(code),
            _ => None,
        }
    }

    /// Returns the remote error code, if the API reported one.
    #[must_use]
    pub fn remote_code(&self) -> Option<&str> {
        match &self.inner.kind {
            Kind::Remote { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error;

    #[test]
    fn test_remote_display_matches_api_format() {
        let err = error::remote(
            "InvalidAccessKeyId.NotFound".to_string(),
            "Specified access key is not found.".to_string(),
            None,
        );
        assert!(err.is_remote());
        assert_eq!(err.remote_code(), Some("InvalidAccessKeyId.NotFound"));
        assert_eq!(
            err.to_string(),
            "InvalidAccessKeyId.NotFound Error: Specified access key is not found."
        );
    }

    #[test]
    fn test_timeout_and_cancel_are_transport_errors() {
        let timeout = error::timed_out();
        assert!(timeout.is_transport());
        assert!(timeout.is_timeout());
        assert!(!timeout.is_canceled());

        let canceled = error::canceled();
        assert!(canceled.is_transport());
        assert!(canceled.is_canceled());
        assert!(!canceled.is_timeout());
    }

    #[test]
    fn test_status_code_accessor() {
        let url = url::Url::parse("https://alidns.aliyuncs.com/").expect("valid url");
        let err = error::status_code(url, 503);
        assert!(err.is_status());
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "returned status 503 instead of 200");
    }
}
