use crate::config::AppSyncConfig;
use crate::errors::{Error, Result};
use crate::sign;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::debug;

/// Service identifier used in the credential scope of every signature.
pub const SERVICE: &str = "appsync";

/// Thin GraphQL-over-HTTP client for one AppSync API.
///
/// Every call is a single best-effort attempt; retries and backoff are the
/// caller's decision.
pub struct AppSync {
    http: reqwest::Client,
    config: AppSyncConfig,
}

impl AppSync {
    pub fn new(config: AppSyncConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// POSTs a GraphQL document with its variables and returns the upstream
    /// JSON body verbatim on any 2xx status.
    pub async fn post(&self, query: &str, variables: Value) -> Result<Value> {
        let body = serde_json::to_vec(&json!({ "query": query, "variables": variables }))?;

        let host = self
            .config
            .endpoint
            .host_str()
            .ok_or_else(|| Error::Config("AppSync endpoint URL has no host".to_string()))?;

        let mut descriptor = sign::RequestDescriptor {
            method: "POST",
            url: &self.config.endpoint,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("host".to_string(), host.to_string()),
            ],
            payload: &body,
        };
        sign::sign_request(
            &self.config.credentials,
            &self.config.region,
            SERVICE,
            &mut descriptor,
            Utc::now(),
        );

        let mut request = self.http.post(self.config.endpoint.clone());
        for (name, value) in &descriptor.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.body(body);

        debug!("POST {}", self.config.endpoint);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
