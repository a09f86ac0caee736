mod common;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alidns_client::{Bindings, CallContext, Kind, Params, Scalar};
    use http::StatusCode;
    use serde_json::json;

    use super::common::{ScriptedTransport, client_with};

    #[tokio::test]
    async fn test_code_with_status_200_is_remote_error() {
        let transport = Arc::new(ScriptedTransport::new().ok(json!({
            "Code": "InvalidAccessKeyId.NotFound",
            "Message": "Specified access key is not found.",
            "RequestId": "F1C2D3"
        })));
        let client = client_with(transport);

        let mut total = 0u64;
        let err = client
            .get(
                Params::new().with("Action", "DescribeDomains"),
                &mut Bindings::new().pair(Scalar::new(&mut total), "TotalCount"),
                &CallContext::default(),
            )
            .await
            .expect_err("envelope code fails the call");

        match err.kind() {
            Kind::Remote {
                code,
                message,
                request_id,
            } => {
                assert_eq!(code, "InvalidAccessKeyId.NotFound");
                assert_eq!(message, "Specified access key is not found.");
                assert_eq!(request_id.as_deref(), Some("F1C2D3"));
            }
            other => panic!("expected remote error, got {other:?}"),
        }
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_non_200_without_code_is_status_error() {
        let transport = Arc::new(
            ScriptedTransport::new().respond(StatusCode::SERVICE_UNAVAILABLE, json!({})),
        );
        let client = client_with(transport);

        let err = client
            .get(Params::new(), &mut Bindings::new(), &CallContext::default())
            .await
            .expect_err("503 fails");
        assert!(err.is_status());
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "returned status 503 instead of 200");
    }

    #[tokio::test]
    async fn test_remote_code_beats_status() {
        let transport = Arc::new(ScriptedTransport::new().respond(
            StatusCode::BAD_REQUEST,
            json!({"Code": "DomainRecordDuplicate", "Message": "The DNS record already exists."}),
        ));
        let client = client_with(transport);

        let err = client
            .do_action(
                Params::new().with("Action", "AddDomainRecord"),
                &mut Bindings::new(),
                &CallContext::default(),
            )
            .await
            .expect_err("duplicate record");
        assert!(err.is_remote());
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_non_object_body_binds_defaults() {
        let transport = Arc::new(
            ScriptedTransport::new().respond(StatusCode::OK, json!("not an object")),
        );
        let client = client_with(transport);

        let mut total = 0u64;
        client
            .get(
                Params::new(),
                &mut Bindings::new().pair(Scalar::new(&mut total), "TotalCount"),
                &CallContext::default(),
            )
            .await
            .expect("a bare JSON string has no fields to bind");
        assert_eq!(total, 0);
    }
}
