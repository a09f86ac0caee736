use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `alidns_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while calling the DNS API.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(crate) url: Option<url::Url>,
}

/// Category of an [`Error`].
///
/// Missing paths in a response are never represented here; they resolve to
/// the destination's default value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Invalid client configuration or credentials
    Builder,
    /// Request signing failed
    Sign,
    /// The transport could not complete the exchange
    Transport,
    /// The response envelope carried a non-empty error code
    Remote {
        code: String,
        message: String,
        request_id: Option<String>,
    },
    /// No envelope error code, but the status was not 200
    Status(u16),
    /// The body could not be decoded into the requested shape
    Decode,
    /// Destinations violate the pairing convention
    Arity,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_url(mut self, url: url::Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the request URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&url::Url> {
        self.inner.url.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("alidns_client::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            // signed query strings are noisy and carry the access key id
            f.field("host", &url.host_str());
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Builder => f.write_str("client configuration error")?,
            Kind::Sign => f.write_str("error signing request")?,
            Kind::Transport => f.write_str("error sending request")?,
            Kind::Remote { code, message, .. } => write!(f, "{code} Error: {message}")?,
            Kind::Status(code) => write!(f, "returned status {code} instead of 200")?,
            Kind::Decode => f.write_str("error decoding response body")?,
            Kind::Arity => f.write_str("invalid destination bindings")?,
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
