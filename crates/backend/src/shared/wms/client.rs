use super::WmsGateway;
use crate::shared::config::WmsConfig;
use crate::shared::error::ApiError;
use anyhow::Context;
use async_trait::async_trait;
use contracts::shared::graphql::GraphqlRequest;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// HTTP клиент WMS GraphQL API
pub struct WmsClient {
    client: reqwest::Client,
    graphql_url: String,
}

impl WmsClient {
    pub fn new(config: &WmsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build WMS HTTP client")?;
        Ok(Self {
            client,
            graphql_url: config.graphql_url.clone(),
        })
    }
}

#[async_trait]
impl WmsGateway for WmsClient {
    async fn post_graphql(&self, request: &GraphqlRequest, token: Option<&str>) -> Result<Value, ApiError> {
        let mut builder = self.client.post(&self.graphql_url).json(request);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("timeout calling {}", self.graphql_url)
            } else if e.is_connect() {
                format!("cannot connect to {}: {}", self.graphql_url, e)
            } else {
                format!("request failed: {}", e)
            };
            tracing::error!("{}", message);
            ApiError::Upstream(message)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized(format!("WMS API answered {}", status)));
        }

        // GraphQL сервер отвечает и 400 с телом `errors`
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Upstream(format!("cannot read response: {}", e)))?;
        match serde_json::from_str::<Value>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(ApiError::Upstream(format!(
                "WMS API answered {}",
                status
            ))),
            Err(e) => Err(ApiError::Upstream(format!("invalid JSON from WMS API: {}", e))),
        }
    }
}
