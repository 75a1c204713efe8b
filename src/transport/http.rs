//! # HTTP transport (reqwest) — reference collector binding.
//!
//! POSTs JSON bodies to `{endpoint}/apm/instances` and `{endpoint}/apm/events`
//! with the license key in a request header. Status handling follows the
//! transport contract: non-2xx → [`TransportError::Rejected`], undecodable
//! success body → [`TransportError::Malformed`], everything below the
//! protocol level → [`TransportError::Network`].

use std::time::Duration;

use async_trait::async_trait;

use super::{DeliveryRequest, InstanceRequest, InstanceResponse, Transport, TransportError};

/// Header carrying the collector credential.
const LICENSE_HEADER: &str = "x-license-key";

/// Default request deadline.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP binding for the collector wire protocol.
///
/// ## Example
/// ```no_run
/// use telegate::HttpTransport;
///
/// let transport = HttpTransport::new("https://collector.example.com", "license-key");
/// ```
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    license_key: String,
}

impl HttpTransport {
    /// Creates a transport with the default timeout.
    pub fn new(endpoint: impl Into<String>, license_key: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, license_key, DEFAULT_TIMEOUT)
    }

    /// Creates a transport with an explicit per-request deadline.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        license_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.into(),
            license_key: license_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    async fn post<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, TransportError> {
        let response = self
            .client
            .post(self.url(path))
            .header(LICENSE_HEADER, &self.license_key)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TransportError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn create_instance(
        &self,
        request: &InstanceRequest,
    ) -> Result<InstanceResponse, TransportError> {
        let response = self.post("apm/instances", request).await?;
        response
            .json::<InstanceResponse>()
            .await
            .map_err(|e| TransportError::Malformed {
                detail: e.to_string(),
            })
    }

    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), TransportError> {
        // Success/failure indicator only; the body is not consumed.
        self.post("apm/events", request).await.map(|_| ())
    }
}
