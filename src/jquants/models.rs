// src/jquants/models.rs
#![allow(dead_code, non_snake_case)]
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response of `POST /v1/token/auth_refresh`.
/// Error responses carry `message` instead of `idToken`.
#[derive(Debug, Default, Deserialize)]
pub struct AuthRefreshResponse {
    pub idToken: Option<String>,
    pub message: Option<String>,
}

/// Response of `GET /v1/fins/statements`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StatementsResponse {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// One disclosure record. Upstream usually sends numbers as strings and
/// `""` for missing values; accessors below do the parsing. Fields not named
/// here are ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Statement {
    #[serde(default, deserialize_with = "string_or_number")]
    pub DisclosedDate: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub NetSales: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub OperatingProfit: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub OrdinaryProfit: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub Profit: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub EarningsPerShare: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub BookValuePerShare: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub CurrentPeriodStartDate: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub CurrentPeriodEndDate: Option<String>,
}

impl Statement {
    pub fn disclosed_date(&self) -> Option<NaiveDate> {
        parse_date(self.DisclosedDate.as_deref())
    }

    pub fn net_sales(&self) -> Option<f64> {
        parse_number(self.NetSales.as_deref())
    }

    pub fn operating_profit(&self) -> Option<f64> {
        parse_number(self.OperatingProfit.as_deref())
    }

    pub fn ordinary_profit(&self) -> Option<f64> {
        parse_number(self.OrdinaryProfit.as_deref())
    }

    pub fn profit(&self) -> Option<f64> {
        parse_number(self.Profit.as_deref())
    }

    pub fn earnings_per_share(&self) -> Option<f64> {
        parse_number(self.EarningsPerShare.as_deref())
    }

    pub fn book_value_per_share(&self) -> Option<f64> {
        parse_number(self.BookValuePerShare.as_deref())
    }

    /// Reporting period bounds, only when both ends parse.
    pub fn current_period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_date(self.CurrentPeriodStartDate.as_deref())?;
        let end = parse_date(self.CurrentPeriodEndDate.as_deref())?;
        Some((start, end))
    }
}

/// Response of `GET /v1/prices/daily_quotes`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DailyQuotesResponse {
    #[serde(default)]
    pub daily_quotes: Vec<DailyQuote>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct DailyQuote {
    #[serde(default)]
    pub Date: Option<String>,
    #[serde(default)]
    pub Close: Option<f64>,
    #[serde(default)]
    pub High: Option<f64>,
    #[serde(default)]
    pub Low: Option<f64>,
}

/// Body of a non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Accepts a JSON string or number, keeping numbers in their textual form.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Parses an upstream numeric string. Blank or malformed values are absent.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts `YYYY-MM-DD` and `YYYYMMDD`.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y%m%d"))
        .ok()
}
