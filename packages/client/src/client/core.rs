//! Core client: signing, one exchange, envelope check, binding

use std::sync::Arc;

use tracing::debug;

use super::envelope;
use crate::auth::{AuthProvider, Credentials, RpcSignature};
use crate::config::ClientConfig;
use crate::error::{self, Result};
use crate::extract::{BindingMode, Bindings, Document};
use crate::http::Params;
use crate::transport::{CallContext, HyperTransport, SignedRequest, Transport};

pub const FORMAT: &str = "Format";
pub const VERSION: &str = "Version";
pub const ACTION: &str = "Action";

/// Client for the DNS API.
///
/// Holds no per-call state; clones share the signer and transport.
#[derive(Clone)]
pub struct Client {
    pub(crate) config: Arc<ClientConfig>,
    auth: Arc<dyn AuthProvider>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client for the public endpoint, signing with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the credentials are incomplete or the TLS
    /// transport cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self> {
        credentials.validate()?;
        let config = ClientConfig::default();
        let transport = HyperTransport::new(&config.user_agent)?;
        Self::with_parts(
            config,
            Arc::new(RpcSignature::new(credentials)),
            Arc::new(transport),
        )
    }

    /// Assemble a client from its parts.
    ///
    /// # Errors
    ///
    /// Returns a builder error if `config` does not validate.
    pub fn with_parts(
        config: ClientConfig,
        auth: Arc<dyn AuthProvider>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            auth,
            transport,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one action and bind its response.
    ///
    /// With no bindings only the envelope and status are checked.
    ///
    /// # Errors
    ///
    /// Arity errors are raised before any request is sent. Otherwise returns
    /// the first transport, remote, status or decode error.
    pub async fn get(
        &self,
        params: Params,
        bindings: &mut Bindings<'_>,
        ctx: &CallContext,
    ) -> Result<()> {
        bindings.validate(BindingMode::Single)?;
        let document = self.fetch_document(params, ctx).await?;
        bindings.apply(&document)
    }

    /// Same as [`Client::get`], for actions that change remote state.
    ///
    /// # Errors
    ///
    /// See [`Client::get`].
    pub async fn do_action(
        &self,
        params: Params,
        bindings: &mut Bindings<'_>,
        ctx: &CallContext,
    ) -> Result<()> {
        self.get(params, bindings, ctx).await
    }

    /// Add common and signing parameters and build the request URL.
    ///
    /// Caller parameters override `Format` and `Version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the signer fails.
    pub fn sign_request(&self, params: Params) -> Result<SignedRequest> {
        let mut params = Params::new()
            .with(FORMAT, &self.config.format)
            .with(VERSION, &self.config.api_version)
            .merge([params]);
        self.auth.apply_query_auth(&mut params)?;

        let mut url = self.config.endpoint.clone();
        url.set_query(Some(&params.to_query_string()));
        Ok(SignedRequest::get(url))
    }

    /// Sign, send and envelope-check one request.
    pub(crate) async fn fetch_document(
        &self,
        params: Params,
        ctx: &CallContext,
    ) -> Result<Document> {
        if ctx.is_cancelled() {
            return Err(error::canceled());
        }

        debug!(
            action = params.get(ACTION).unwrap_or_default(),
            page = params.get(&self.config.pagination.page_number_param),
            auth = self.auth.auth_type(),
            "sending request"
        );
        let request = self.sign_request(params)?;
        let url = request.url.clone();

        let timeout = ctx.timeout().unwrap_or(self.config.timeout);
        let exchange = tokio::time::timeout(timeout, self.transport.fetch(request, ctx));
        let outcome = match ctx.cancellation() {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => return Err(error::canceled().with_url(url)),
                outcome = exchange => outcome,
            },
            None => exchange.await,
        };
        let response = outcome.map_err(|_| error::timed_out().with_url(url.clone()))??;

        let document = Document::new(response.body);
        envelope::check(&document, response.status, &url)?;
        Ok(document)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.config.endpoint.as_str())
            .field("auth", &self.auth.auth_type())
            .finish_non_exhaustive()
    }
}
