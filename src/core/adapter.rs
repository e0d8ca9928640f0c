use crate::core::codec;
use crate::domain::model::LookupResponse;
use crate::domain::ports::{RemoteLookupClient, Target};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 讓只會說 XML 的遠端客戶端，以 JSON 的 `Target` 介面對外提供服務。
///
/// 每次呼叫彼此獨立，除了 client 之外不持有任何狀態。
pub struct LookupAdapter<C: RemoteLookupClient> {
    client: C,
}

impl<C: RemoteLookupClient> LookupAdapter<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: RemoteLookupClient> Target for LookupAdapter<C> {
    async fn request(&self, json_request: &str) -> Result<String> {
        let request = codec::decode_request(json_request)?;
        let customer_id = request.customer_id();

        tracing::debug!("Looking up accounts for cunbr '{}'", customer_id);
        let body = self.client.fetch(customer_id).await?;

        // 空 body 代表找不到客戶或服務回了非 2xx，一律視為沒有帳號
        let accounts = if body.trim().is_empty() {
            tracing::warn!(
                "Empty response for cunbr '{}', returning no accounts",
                customer_id
            );
            Vec::new()
        } else {
            codec::decode_xml_accounts(&body)?
        };

        tracing::debug!(
            "Found {} account(s) for cunbr '{}'",
            accounts.len(),
            customer_id
        );

        let response = LookupResponse::new(customer_id, accounts);
        codec::encode_response(&response.customer_id, &response.account_numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BridgeError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct StubClient {
        bodies: HashMap<String, String>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StubClient {
        fn with_body(customer_id: &str, body: &str) -> Self {
            let mut client = Self::default();
            client
                .bodies
                .insert(customer_id.to_string(), body.to_string());
            client
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteLookupClient for StubClient {
        async fn fetch(&self, customer_id: &str) -> Result<String> {
            self.calls.lock().unwrap().push(customer_id.to_string());
            Ok(self.bodies.get(customer_id).cloned().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_request_translates_xml_accounts() {
        let client = StubClient::with_body(
            "0000001",
            "<customer><accounts><a>11111111</a><a>22222222</a></accounts></customer>",
        );
        let adapter = LookupAdapter::new(client.clone());

        let response = adapter
            .request(r#"{"customer_request":{"customer":{"cunbr":"0000001"}}}"#)
            .await
            .unwrap();

        assert_eq!(
            response,
            r#"{"customer_response":{"customer":{"cunbr":"0000001","accounts":["11111111","22222222"]}}}"#
        );
        assert_eq!(client.calls(), vec!["0000001".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_body_means_no_accounts() {
        let adapter = LookupAdapter::new(StubClient::default());

        let response = adapter
            .request(r#"{"customer_request":{"customer":{"cunbr":"404"}}}"#)
            .await
            .unwrap();

        assert_eq!(
            response,
            r#"{"customer_response":{"customer":{"cunbr":"404","accounts":[]}}}"#
        );
    }

    #[tokio::test]
    async fn test_blank_body_means_no_accounts() {
        let adapter = LookupAdapter::new(StubClient::with_body("7", " \r\n"));

        let response = adapter
            .request(r#"{"customer_request":{"customer":{"cunbr":"7"}}}"#)
            .await
            .unwrap();

        assert!(response.ends_with(r#""accounts":[]}}}"#));
    }

    #[tokio::test]
    async fn test_identifier_is_forwarded_unchanged() {
        let client = StubClient::with_body(" X-9 ", "<c><accounts><a>1</a></accounts></c>");
        let adapter = LookupAdapter::new(client.clone());

        let response = adapter
            .request(r#"{"customer_request":{"customer":{"cunbr":" X-9 "}}}"#)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["customer_response"]["customer"]["cunbr"], " X-9 ");
        assert_eq!(client.calls(), vec![" X-9 ".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_request_never_reaches_client() {
        let client = StubClient::default();
        let adapter = LookupAdapter::new(client.clone());

        let err = adapter.request("not json").await.unwrap_err();
        assert!(matches!(err, BridgeError::MalformedRequest { .. }));

        let err = adapter
            .request(r#"{"customer_request":{"customer":{}}}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::MalformedRequest { .. }));

        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_xml_is_surfaced() {
        let adapter = LookupAdapter::new(StubClient::with_body("1", "<customer><accounts>"));

        let err = adapter
            .request(r#"{"customer_request":{"customer":{"cunbr":"1"}}}"#)
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::MalformedXml { .. }));
    }
}
