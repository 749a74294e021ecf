// src/jquants/client.rs
use async_trait::async_trait;
use reqwest::header;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::jquants::models::{AuthRefreshResponse, DailyQuotesResponse, ErrorBody};
use crate::jquants::{FinancialApi, IdToken, QuoteWindow};
use crate::utils::error::ApiError;

const USER_AGENT: &str = concat!("jquants_valuation/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of [`FinancialApi`]. One request per call, no retries.
pub struct JQuantsClient {
    client: reqwest::Client,
    base_url: String,
}

impl JQuantsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends an authenticated GET and decodes a 2xx JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        id_token: &IdToken,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url)
            .bearer_auth(id_token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            return Err(ApiError::Api { status, message });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl FinancialApi for JQuantsClient {
    async fn auth_refresh(&self, refresh_token: &SecretString) -> Result<AuthRefreshResponse, ApiError> {
        let url = self.url("/v1/token/auth_refresh");
        tracing::info!("Exchanging refresh token at {}", url);

        // Status is not checked here: a rejected credential comes back without
        // `idToken`, which the auth step reports.
        let response = self.client.post(&url)
            .query(&[("refreshtoken", refresh_token.expose_secret())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("auth_refresh returned {} ({} bytes)", status, body.len());

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("auth_refresh ({}): {}", status, e)))
    }

    async fn statements_raw(&self, id_token: &IdToken, code: &str) -> Result<Value, ApiError> {
        self.get_json("/v1/fins/statements", id_token, &[("code", code.to_string())]).await
    }

    async fn daily_quotes(
        &self,
        id_token: &IdToken,
        code: &str,
        window: QuoteWindow,
    ) -> Result<DailyQuotesResponse, ApiError> {
        let mut query = vec![("code", code.to_string())];
        query.extend(window.query_pairs());
        self.get_json("/v1/prices/daily_quotes", id_token, &query).await
    }
}
