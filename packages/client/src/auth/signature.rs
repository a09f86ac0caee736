//! RPC signature, version 1.0 (HMAC-SHA1 over the canonical query)

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use chrono::Utc;
use ring::hmac;

use super::credentials::Credentials;
use super::provider::AuthProvider;
use crate::crypto::generate_nonce;
use crate::error::Result;
use crate::http::{Params, percent_encode};

pub const SIGNATURE: &str = "Signature";
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const SIGNATURE_VERSION: &str = "1.0";
/// `Timestamp` layout, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Signs query parameters with an access key pair.
#[derive(Debug, Clone)]
pub struct RpcSignature {
    credentials: Credentials,
}

impl RpcSignature {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Add the signing parameters and `Signature` using a fixed timestamp and
    /// nonce.
    pub fn sign_at(&self, params: &mut Params, timestamp: &str, nonce: &str) {
        params.remove(SIGNATURE);
        params.set("AccessKeyId", self.credentials.access_key_id());
        params.set("SignatureMethod", SIGNATURE_METHOD);
        params.set("Timestamp", timestamp);
        params.set("SignatureVersion", SIGNATURE_VERSION);
        params.set("SignatureNonce", nonce);

        let to_sign = string_to_sign("GET", &canonical_query(params));
        let signature = hmac_sha1_base64(self.credentials.access_key_secret(), &to_sign);
        params.set(SIGNATURE, signature);
    }
}

impl AuthProvider for RpcSignature {
    fn apply_query_auth(&self, params: &mut Params) -> Result<()> {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let nonce = generate_nonce()?;
        self.sign_at(params, &timestamp, &nonce);
        Ok(())
    }

    #[inline]
    fn auth_type(&self) -> &'static str {
        SIGNATURE_METHOD
    }
}

/// Sorted, percent-encoded query without the `Signature` parameter.
#[must_use]
pub fn canonical_query(params: &Params) -> String {
    if params.contains(SIGNATURE) {
        let mut unsigned = params.clone();
        unsigned.remove(SIGNATURE);
        unsigned.to_query_string()
    } else {
        params.to_query_string()
    }
}

/// `METHOD&%2F&` followed by the percent-encoded canonical query.
#[must_use]
pub fn string_to_sign(method: &str, canonical: &str) -> String {
    format!("{method}&{}&{}", percent_encode("/"), percent_encode(canonical))
}

/// Base64 HMAC-SHA1 of `data`, keyed with `secret&`.
#[must_use]
pub fn hmac_sha1_base64(secret: &str, data: &str) -> String {
    let key = hmac::Key::new(
        hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        format!("{secret}&").as_bytes(),
    );
    BASE64_STANDARD.encode(hmac::sign(&key, data.as_bytes()).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_regions() -> Params {
        Params::new()
            .with("Action", "DescribeRegions")
            .with("Format", "XML")
            .with("Version", "2014-05-26")
    }

    #[test]
    fn test_documented_signature_example() {
        let signer = RpcSignature::new(Credentials::new("testid", "testsecret"));
        let mut params = describe_regions();
        signer.sign_at(
            &mut params,
            "2016-02-23T12:46:24Z",
            "3ee8c1b8-83d3-44af-a94f-4e0ad82fd6cf",
        );

        assert_eq!(
            string_to_sign("GET", &canonical_query(&params)),
            "GET&%2F&AccessKeyId%3Dtestid%26Action%3DDescribeRegions%26Format%3DXML\
             %26SignatureMethod%3DHMAC-SHA1%26SignatureNonce%3D3ee8c1b8-83d3-44af-a94f-4e0ad82fd6cf\
             %26SignatureVersion%3D1.0%26Timestamp%3D2016-02-23T12%253A46%253A24Z\
             %26Version%3D2014-05-26"
        );
        assert_eq!(params.get(SIGNATURE), Some("OLeaidS1JvxuMvnyHOwuJ+uX5qY="));
    }

    #[test]
    fn test_resigning_ignores_previous_signature() {
        let signer = RpcSignature::new(Credentials::new("id", "secret"));
        let mut once = describe_regions();
        signer.sign_at(&mut once, "2020-01-01T00:00:00Z", "n");
        let mut twice = once.clone();
        signer.sign_at(&mut twice, "2020-01-01T00:00:00Z", "n");
        assert_eq!(once.get(SIGNATURE), twice.get(SIGNATURE));
    }

    #[test]
    fn test_apply_query_auth_sets_common_fields() {
        let signer = RpcSignature::new(Credentials::new("id", "secret"));
        let mut params = describe_regions();
        signer
            .apply_query_auth(&mut params)
            .expect("signing succeeds");
        assert_eq!(params.get("SignatureMethod"), Some("HMAC-SHA1"));
        assert_eq!(params.get("SignatureNonce").map(str::len), Some(64));
        let timestamp = params.get("Timestamp").expect("timestamp set");
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        // 20-byte digest in base64
        assert_eq!(params.get(SIGNATURE).map(str::len), Some(28));
    }
}
