use std::time::Duration;

use reqwest::Client;

use crate::{
    config::Config,
    error::{AppError, GatewayError},
    models::{BackendResponse, ChaincodeRequest},
};

// ==================== GATEWAY TRAIT ====================

#[async_trait::async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Submits a state-changing call.
    async fn invoke(&self, request: &ChaincodeRequest)
        -> Result<BackendResponse, GatewayError>;

    /// Submits a read-only call.
    async fn query(&self, request: &ChaincodeRequest) -> Result<BackendResponse, GatewayError>;
}

// ==================== HTTP CLIENT ====================

/// JSON-over-HTTP client for the chaincode REST gateway.
#[derive(Clone, Debug)]
pub struct ChaincodeClient {
    invocation_url: String,
    query_url: String,
    client: Client,
}

impl ChaincodeClient {
    pub fn new(
        invocation_url: String,
        query_url: String,
        timeout_secs: Option<u64>,
    ) -> Result<Self, AppError> {
        let mut builder = Client::builder().no_proxy();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            AppError::Internal(format!("Chaincode HTTP client init failed: {}", e))
        })?;

        Ok(Self {
            invocation_url,
            query_url,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.url_invocation.trim().to_string(),
            config.url_query.trim().to_string(),
            config.backend_timeout_secs,
        )
    }

    async fn post(
        &self,
        url: &str,
        request: &ChaincodeRequest,
    ) -> Result<BackendResponse, GatewayError> {
        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Chaincode backend replied {} from {}: {}", status, url, body);

        serde_json::from_str::<BackendResponse>(&body).map_err(|e| {
            GatewayError::UnreadableResponse(format!("HTTP {}: {}", status.as_u16(), e))
        })
    }
}

#[async_trait::async_trait]
impl LedgerGateway for ChaincodeClient {
    async fn invoke(
        &self,
        request: &ChaincodeRequest,
    ) -> Result<BackendResponse, GatewayError> {
        self.post(&self.invocation_url, request).await
    }

    async fn query(&self, request: &ChaincodeRequest) -> Result<BackendResponse, GatewayError> {
        self.post(&self.query_url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn localhost_binding_permitted() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn pay_request() -> ChaincodeRequest {
        ChaincodeRequest {
            channel: "mychannel".to_string(),
            chaincode: "monopoly".to_string(),
            chaincode_ver: "v1".to_string(),
            method: "pay".to_string(),
            args: vec!["A".to_string(), "B".to_string(), "50".to_string()],
        }
    }

    #[tokio::test]
    async fn invoke_posts_envelope_to_invocation_url() {
        if !localhost_binding_permitted() {
            return;
        }

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/invoke")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "channel": "mychannel",
                "chaincode": "monopoly",
                "chaincodeVer": "v1",
                "method": "pay",
                "args": ["A", "B", "50"]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"returnCode":"Success","transactionID":"tx123"}"#)
            .create_async()
            .await;

        let client = ChaincodeClient::new(
            format!("{}/invoke", server.url()),
            format!("{}/query", server.url()),
            None,
        )
        .unwrap();
        let reply = client.invoke(&pay_request()).await.unwrap();

        mock.assert_async().await;
        assert!(reply.is_success());
        assert_eq!(reply.transaction_id.as_deref(), Some("tx123"));
    }

    #[tokio::test]
    async fn query_posts_to_query_url() {
        if !localhost_binding_permitted() {
            return;
        }

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/query")
            .with_status(200)
            .with_body(r#"{"returnCode":"Success","result":"{\"id\":1}"}"#)
            .create_async()
            .await;

        let client = ChaincodeClient::new(
            format!("{}/invoke", server.url()),
            format!("{}/query", server.url()),
            Some(5),
        )
        .unwrap();
        let reply = client.query(&pay_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply.result, Some(json!("{\"id\":1}")));
    }

    #[tokio::test]
    async fn error_status_still_reads_backend_body() {
        if !localhost_binding_permitted() {
            return;
        }

        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/invoke")
            .with_status(500)
            .with_body(r#"{"returnCode":"Failure","info":"insufficient funds"}"#)
            .create_async()
            .await;

        let client =
            ChaincodeClient::new(format!("{}/invoke", server.url()), server.url(), None).unwrap();
        let reply = client.invoke(&pay_request()).await.unwrap();

        assert!(!reply.is_success());
        assert_eq!(reply.info.as_deref(), Some("insufficient funds"));
    }

    #[tokio::test]
    async fn non_json_body_is_unreadable() {
        if !localhost_binding_permitted() {
            return;
        }

        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/invoke")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client =
            ChaincodeClient::new(format!("{}/invoke", server.url()), server.url(), None).unwrap();
        let err = client.invoke(&pay_request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::UnreadableResponse(_)));
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let port = match std::net::TcpListener::bind("127.0.0.1:0") {
            Ok(listener) => listener.local_addr().unwrap().port(),
            Err(_) => return,
        };

        let url = format!("http://127.0.0.1:{}/invoke", port);
        let client = ChaincodeClient::new(url.clone(), url, Some(2)).unwrap();
        let err = client.invoke(&pay_request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::Unreachable(_)));
    }
}
