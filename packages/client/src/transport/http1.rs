//! Default transport: one HTTP/1.1 exchange per request over rustls
//!
//! Each call opens a fresh connection. The API is called at most a few times
//! per operation, so there is no pool.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{ACCEPT, HOST, HeaderValue, USER_AGENT};
use http_body_util::{BodyExt, Empty};
use hyper::client::conn::http1;
use hyper_util::rt::TokioIo;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig as TlsClientConfig, RootCertStore};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tracing::{debug, trace};

use super::{CallContext, RawResponse, SignedRequest, Transport};
use crate::error::{self, Result};
use crate::http::{extract_port, is_secure_scheme, origin_form};

/// Connect timeout used when the call context sets none.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// hyper HTTP/1.1 client over TCP or rustls with webpki roots.
#[derive(Clone)]
pub struct HyperTransport {
    tls: TlsConnector,
    user_agent: HeaderValue,
}

impl HyperTransport {
    /// Build a transport sending `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the user agent is not a valid header value or
    /// the TLS configuration cannot be created.
    pub fn new(user_agent: &str) -> Result<Self> {
        let user_agent = HeaderValue::from_str(user_agent).map_err(error::builder)?;
        Ok(Self {
            tls: TlsConnector::from(Arc::new(tls_config()?)),
            user_agent,
        })
    }

    async fn exchange<I>(&self, io: I, request: &SignedRequest) -> Result<RawResponse>
    where
        I: hyper::rt::Read + hyper::rt::Write + Unpin + Send + 'static,
    {
        let (mut sender, connection) = http1::handshake(io).await.map_err(error::transport)?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!("connection closed with error: {e}");
            }
        });

        let req = http::Request::builder()
            .method(request.method.clone())
            .uri(origin_form(&request.url))
            .header(HOST, host_header(&request.url))
            .header(USER_AGENT, self.user_agent.clone())
            .header(ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())
            .map_err(error::transport)?;

        let response = sender.send_request(req).await.map_err(error::transport)?;
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(error::transport)?
            .to_bytes();
        trace!(%status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn fetch(&self, request: SignedRequest, ctx: &CallContext) -> Result<RawResponse> {
        let url = &request.url;
        let host = url
            .host_str()
            .ok_or_else(|| error::transport("request URL has no host"))?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();
        let port = extract_port(url);

        let connect_timeout = ctx.timeout().unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let tcp = tokio::time::timeout(connect_timeout, TcpStream::connect((host.as_str(), port)))
            .await
            .map_err(|_| error::timed_out().with_url(url.clone()))?
            .map_err(|e| error::transport(e).with_url(url.clone()))?;
        tcp.set_nodelay(true).map_err(error::transport)?;

        if is_secure_scheme(url) {
            let server_name = ServerName::try_from(host).map_err(error::transport)?;
            let tls = self
                .tls
                .connect(server_name, tcp)
                .await
                .map_err(|e| error::transport(e).with_url(url.clone()))?;
            self.exchange(TokioIo::new(tls), &request).await
        } else {
            self.exchange(TokioIo::new(tcp), &request).await
        }
    }
}

fn tls_config() -> Result<TlsClientConfig> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    Ok(TlsClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(error::builder)?
        .with_root_certificates(roots)
        .with_no_client_auth())
}

fn host_header(url: &url::Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_with_default_roots() {
        let transport = HyperTransport::new("alidns-rs/test").expect("tls config builds");
        assert!(format!("{transport:?}").contains("alidns-rs/test"));
    }

    #[test]
    fn test_invalid_user_agent_is_builder_error() {
        let err = HyperTransport::new("bad\nagent").expect_err("newline is not a header value");
        assert!(err.is_builder());
    }

    #[test]
    fn test_host_header_keeps_explicit_port() {
        let url = url::Url::parse("http://127.0.0.1:8080/?a=b").expect("valid");
        assert_eq!(host_header(&url), "127.0.0.1:8080");
        let url = url::Url::parse("https://alidns.aliyuncs.com/").expect("valid");
        assert_eq!(host_header(&url), "alidns.aliyuncs.com");
    }

    #[tokio::test]
    async fn test_plain_http_exchange_against_local_listener() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.expect("read request");
            let head = String::from_utf8_lossy(&buf[..n]).to_string();
            let body = r#"{"TotalCount":0}"#;
            let reply = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.expect("write reply");
            head
        });

        let transport = HyperTransport::new("alidns-rs/test").expect("transport");
        let url = url::Url::parse(&format!("http://{addr}/?Action=DescribeDomains"))
            .expect("valid url");
        let response = transport
            .fetch(SignedRequest::get(url), &CallContext::default())
            .await
            .expect("exchange succeeds");

        assert_eq!(response.status, http::StatusCode::OK);
        assert_eq!(response.body.as_ref(), br#"{"TotalCount":0}"#);
        let head = server.await.expect("server task");
        assert!(head.starts_with("GET /?Action=DescribeDomains HTTP/1.1\r\n"));
    }
}
