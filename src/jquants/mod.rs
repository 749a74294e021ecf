// src/jquants/mod.rs
//! Access to the upstream financial-data API.
//!
//! [`FinancialApi`] is the seam between the pipelines and the network:
//! [`client::JQuantsClient`] talks HTTP, tests substitute fakes.
pub mod auth;
pub mod client;
pub mod fetch;
pub mod models;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use chrono::NaiveDate;
use secrecy::SecretString;
use serde_json::Value;

use crate::utils::error::ApiError;
use models::{AuthRefreshResponse, DailyQuotesResponse, StatementsResponse};

/// Short-lived bearer token returned by the refresh exchange.
pub type IdToken = SecretString;

/// Date filter for a daily quotes request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteWindow {
    /// A single trading day.
    On(NaiveDate),
    /// Inclusive range.
    Between { from: NaiveDate, to: NaiveDate },
}

impl QuoteWindow {
    /// Query pairs appended after `code`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            QuoteWindow::On(date) => vec![("date", date.format("%Y-%m-%d").to_string())],
            QuoteWindow::Between { from, to } => vec![
                ("from", from.format("%Y-%m-%d").to_string()),
                ("to", to.format("%Y-%m-%d").to_string()),
            ],
        }
    }
}

#[async_trait]
pub trait FinancialApi: Send + Sync {
    /// `POST /v1/token/auth_refresh?refreshtoken=...`
    async fn auth_refresh(&self, refresh_token: &SecretString) -> Result<AuthRefreshResponse, ApiError>;

    /// `GET /v1/fins/statements?code=...`, body exactly as returned.
    async fn statements_raw(&self, id_token: &IdToken, code: &str) -> Result<Value, ApiError>;

    /// Typed view of [`FinancialApi::statements_raw`].
    async fn statements(&self, id_token: &IdToken, code: &str) -> Result<StatementsResponse, ApiError> {
        let raw = self.statements_raw(id_token, code).await?;
        serde_json::from_value(raw).map_err(|e| ApiError::Parse(format!("/v1/fins/statements: {}", e)))
    }

    /// `GET /v1/prices/daily_quotes?code=...&date=...` or `&from=...&to=...`
    async fn daily_quotes(
        &self,
        id_token: &IdToken,
        code: &str,
        window: QuoteWindow,
    ) -> Result<DailyQuotesResponse, ApiError>;
}
