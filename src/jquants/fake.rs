// src/jquants/fake.rs
//! In-memory [`FinancialApi`] that records every call.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use secrecy::SecretString;
use serde_json::{json, Value};

use crate::jquants::models::{AuthRefreshResponse, DailyQuote, DailyQuotesResponse, Statement};
use crate::jquants::{FinancialApi, IdToken, QuoteWindow};
use crate::utils::error::ApiError;

#[derive(Default)]
pub struct FakeApi {
    pub id_token: Option<String>,
    pub statements: Vec<Statement>,
    /// Overrides `statements` with a verbatim response body.
    pub raw_statements: Option<Value>,
    /// Quotes returned for single-day requests, keyed by date.
    pub daily: HashMap<NaiveDate, Vec<DailyQuote>>,
    /// Quotes returned for any range request.
    pub range: Vec<DailyQuote>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_token(token: &str) -> Self {
        Self {
            id_token: Some(token.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FinancialApi for FakeApi {
    async fn auth_refresh(&self, _refresh_token: &SecretString) -> Result<AuthRefreshResponse, ApiError> {
        self.record("auth_refresh".to_string());
        Ok(AuthRefreshResponse {
            idToken: self.id_token.clone(),
            message: None,
        })
    }

    async fn statements_raw(&self, _id_token: &IdToken, code: &str) -> Result<Value, ApiError> {
        self.record(format!("statements {}", code));
        match &self.raw_statements {
            Some(raw) => Ok(raw.clone()),
            None => Ok(json!({ "statements": self.statements })),
        }
    }

    async fn daily_quotes(
        &self,
        _id_token: &IdToken,
        code: &str,
        window: QuoteWindow,
    ) -> Result<DailyQuotesResponse, ApiError> {
        let daily_quotes = match window {
            QuoteWindow::On(date) => {
                self.record(format!("daily_quotes {} {}", code, date));
                self.daily.get(&date).cloned().unwrap_or_default()
            }
            QuoteWindow::Between { from, to } => {
                self.record(format!("daily_quotes {} {}..{}", code, from, to));
                self.range.clone()
            }
        };
        Ok(DailyQuotesResponse { daily_quotes })
    }
}

pub fn quote(close: Option<f64>, high: Option<f64>, low: Option<f64>) -> DailyQuote {
    DailyQuote {
        Date: None,
        Close: close,
        High: high,
        Low: low,
    }
}
