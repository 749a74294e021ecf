// src/analysis/ratios.rs
use crate::jquants::fetch::{get_closing_price, get_price_range};
use crate::jquants::models::Statement;
use crate::jquants::{FinancialApi, IdToken};
use crate::utils::error::ApiError;

/// `price / per_share`, absent unless both operands are present and non-zero.
pub fn compute_ratio(price: Option<f64>, per_share: Option<f64>) -> Option<f64> {
    match (price, per_share) {
        (Some(p), Some(d)) if p != 0.0 && d != 0.0 => Some(p / d),
        _ => None,
    }
}

/// A statement joined with its disclosure-day close and derived ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub disclosed_date: Option<String>,
    pub net_sales: Option<f64>,
    pub operating_profit: Option<f64>,
    pub ordinary_profit: Option<f64>,
    pub profit: Option<f64>,
    /// Per-share values are shown as disclosed, so the raw text is kept.
    pub earnings_per_share: Option<String>,
    pub book_value_per_share: Option<String>,
    pub closing_price: Option<f64>,
    pub per: Option<f64>,
    pub pbr: Option<f64>,
}

impl ReportRow {
    pub fn from_statement(statement: &Statement, closing_price: Option<f64>) -> Self {
        Self {
            disclosed_date: statement.DisclosedDate.clone().filter(|d| !d.is_empty()),
            net_sales: statement.net_sales(),
            operating_profit: statement.operating_profit(),
            ordinary_profit: statement.ordinary_profit(),
            profit: statement.profit(),
            earnings_per_share: non_blank(&statement.EarningsPerShare),
            book_value_per_share: non_blank(&statement.BookValuePerShare),
            closing_price,
            per: compute_ratio(closing_price, statement.earnings_per_share()),
            pbr: compute_ratio(closing_price, statement.book_value_per_share()),
        }
    }
}

fn non_blank(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Builds one row per statement, fetching each close sequentially.
/// Statements without a usable disclosed date get no price lookup.
pub async fn build_rows(
    api: &dyn FinancialApi,
    id_token: &IdToken,
    code: &str,
    statements: &[Statement],
) -> Result<Vec<ReportRow>, ApiError> {
    let mut rows = Vec::with_capacity(statements.len());
    for statement in statements {
        let closing_price = match statement.disclosed_date() {
            Some(date) => get_closing_price(api, id_token, code, date).await?,
            None => {
                tracing::warn!(
                    "Statement without disclosed date, skipping price lookup: {:?}",
                    statement.DisclosedDate
                );
                None
            }
        };
        rows.push(ReportRow::from_statement(statement, closing_price));
    }
    Ok(rows)
}

/// High/low price and PER over the latest statement's reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub start: Option<String>,
    pub end: Option<String>,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    pub high_per: Option<f64>,
    pub low_per: Option<f64>,
}

/// Uses the last statement as the most recent one. `None` without statements.
pub async fn period_summary(
    api: &dyn FinancialApi,
    id_token: &IdToken,
    code: &str,
    statements: &[Statement],
) -> Result<Option<PeriodSummary>, ApiError> {
    let Some(latest) = statements.last() else {
        return Ok(None);
    };

    let (high_price, low_price) = match latest.current_period() {
        Some((from, to)) => get_price_range(api, id_token, code, from, to).await?,
        None => {
            tracing::warn!(
                "Latest statement has no usable period ({:?} - {:?})",
                latest.CurrentPeriodStartDate,
                latest.CurrentPeriodEndDate
            );
            (None, None)
        }
    };

    let eps = latest.earnings_per_share();
    Ok(Some(PeriodSummary {
        start: latest.CurrentPeriodStartDate.clone(),
        end: latest.CurrentPeriodEndDate.clone(),
        high_price,
        low_price,
        high_per: compute_ratio(high_price, eps),
        low_per: compute_ratio(low_price, eps),
    }))
}
