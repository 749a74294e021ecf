// src/jquants/fetch.rs
use chrono::NaiveDate;

use crate::jquants::models::{DailyQuote, Statement};
use crate::jquants::{FinancialApi, IdToken, QuoteWindow};
use crate::utils::error::ApiError;

/// All statements for `code`, in upstream order (last is most recent).
pub async fn fetch_statements(
    api: &dyn FinancialApi,
    id_token: &IdToken,
    code: &str,
) -> Result<Vec<Statement>, ApiError> {
    let response = api.statements(id_token, code).await?;
    tracing::info!("Fetched {} statements for {}", response.statements.len(), code);
    Ok(response.statements)
}

/// Close of the first quote returned for `date`, if any.
pub async fn get_closing_price(
    api: &dyn FinancialApi,
    id_token: &IdToken,
    code: &str,
    date: NaiveDate,
) -> Result<Option<f64>, ApiError> {
    let response = api.daily_quotes(id_token, code, QuoteWindow::On(date)).await?;
    let close = response.daily_quotes.first().and_then(|q| q.Close);
    tracing::debug!("Close for {} on {}: {:?}", code, date, close);
    Ok(close)
}

/// Highest high and lowest low over `from..=to`.
pub async fn get_price_range(
    api: &dyn FinancialApi,
    id_token: &IdToken,
    code: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<(Option<f64>, Option<f64>), ApiError> {
    let response = api
        .daily_quotes(id_token, code, QuoteWindow::Between { from, to })
        .await?;
    tracing::debug!("{} quotes for {} between {} and {}", response.daily_quotes.len(), code, from, to);
    Ok(high_low(&response.daily_quotes))
}

/// Quotes with a null High or Low are skipped on that side.
pub fn high_low(quotes: &[DailyQuote]) -> (Option<f64>, Option<f64>) {
    let high = quotes.iter().filter_map(|q| q.High).reduce(f64::max);
    let low = quotes.iter().filter_map(|q| q.Low).reduce(f64::min);
    (high, low)
}
