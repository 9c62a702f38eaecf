//! HTTP gateway client
//!
//! POSTs statement payloads as JSON to the data-API endpoint and decodes
//! failure responses into `GatewayError`. The upstream exception name
//! arrives in the body's `__type` field, possibly namespaced
//! (`com.example#BadRequestException`) and suffixed with detail
//! (`BadRequestException:detail`); both decorations are stripped before
//! classification.

use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::client::{BatchResult, DataGateway, ExecuteResult};
use super::error::GatewayError;
use super::types::{BatchStatementInput, StatementInput};

/// Data-API gateway reached over HTTP
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    /// Create a client for the given base endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.endpoint, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::transport(format!("request to {url} failed: {e}")))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            response.json::<T>().await.map_err(|e| {
                GatewayError::transport(format!("undecodable gateway response: {e}"))
                    .with_status(status)
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(decode_failure(status, &body))
        }
    }
}

impl DataGateway for HttpGateway {
    fn execute(
        &self,
        input: StatementInput,
    ) -> Pin<Box<dyn Future<Output = ExecuteResult> + Send + '_>> {
        Box::pin(async move { self.post("execute", &input).await })
    }

    fn execute_batch(
        &self,
        input: BatchStatementInput,
    ) -> Pin<Box<dyn Future<Output = BatchResult> + Send + '_>> {
        Box::pin(async move { self.post("batch-execute", &input).await })
    }
}

/// Decode an error response body into a gateway failure
///
/// An undecodable 5xx body means the service itself is out, so the
/// synthesized name classifies as a service outage. Undecodable 4xx
/// bodies stay nameless and fall into the taxonomy's default row.
fn decode_failure(status: u16, body: &str) -> GatewayError {
    if let Ok(parsed) = serde_json::from_str::<Value>(body) {
        let name = parsed
            .get("__type")
            .and_then(Value::as_str)
            .map(strip_type_name);
        let code = parsed
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string);
        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("gateway request failed")
            .to_string();

        if name.is_some() || code.is_some() {
            return GatewayError {
                name,
                code,
                message,
                status: Some(status),
            };
        }
    }

    if status >= 500 {
        GatewayError::named(
            "ServiceUnavailableError",
            format!("gateway returned status {status}"),
        )
        .with_status(status)
    } else {
        GatewayError::transport(format!("gateway returned status {status}")).with_status(status)
    }
}

/// Strip the `#`-prefixed namespace and `:`-suffixed detail from a
/// `__type` value
fn strip_type_name(raw: &str) -> String {
    let after_hash = match raw.rfind('#') {
        Some(i) => &raw[i + 1..],
        None => raw,
    };
    let name = match after_hash.find(':') {
        Some(i) => &after_hash[..i],
        None => after_hash,
    };
    name.to_string()
}
