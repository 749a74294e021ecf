// src/workflow.rs
//! The three report pipelines. Each one runs strictly in sequence:
//! resolve, authenticate, fetch, compute, print.
use std::io::Write;

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::ratios::{build_rows, period_summary};
use crate::jquants::auth::authenticate;
use crate::jquants::fetch::fetch_statements;
use crate::jquants::FinancialApi;
use crate::lookup::{resolve_security, TickerDirectory};
use crate::report::{render_rows, render_summary, RatioStyle};
use crate::utils::AppError;

/// Statements table with PER as a thousands-separated integer.
pub async fn run_per<W: Write>(
    api: &dyn FinancialApi,
    directory: &dyn TickerDirectory,
    refresh_token: Option<&SecretString>,
    name_or_code: &str,
    out: &mut W,
) -> Result<(), AppError> {
    let security = resolve_security(directory, name_or_code)?;
    let id_token = authenticate(api, refresh_token).await?;

    let statements = fetch_statements(api, &id_token, &security.code).await?;
    let rows = build_rows(api, &id_token, &security.code, &statements).await?;

    out.write_all(render_rows(&rows, RatioStyle::PerInteger).as_bytes())?;
    tracing::info!("Printed {} rows for {}", rows.len(), security.code);
    Ok(())
}

/// Statements table with PER/PBR, followed by the latest period's
/// high/low price and PER.
pub async fn run_per_pbr<W: Write>(
    api: &dyn FinancialApi,
    directory: &dyn TickerDirectory,
    refresh_token: Option<&SecretString>,
    name_or_code: &str,
    out: &mut W,
) -> Result<(), AppError> {
    let security = resolve_security(directory, name_or_code)?;
    writeln!(out, "Stock Info: {}", security)?;

    let id_token = authenticate(api, refresh_token).await?;

    let statements = fetch_statements(api, &id_token, &security.code).await?;
    let rows = build_rows(api, &id_token, &security.code, &statements).await?;
    out.write_all(render_rows(&rows, RatioStyle::PerPbrFixed).as_bytes())?;

    match period_summary(api, &id_token, &security.code, &statements).await? {
        Some(summary) => out.write_all(render_summary(&summary).as_bytes())?,
        None => tracing::warn!("No statements for {}, period summary skipped", security.code),
    }
    Ok(())
}

/// Prints the bearer token and the raw statements response for `code`.
pub async fn run_statements<W: Write>(
    api: &dyn FinancialApi,
    refresh_token: Option<&SecretString>,
    code: &str,
    out: &mut W,
) -> Result<(), AppError> {
    let id_token = authenticate(api, refresh_token).await?;
    writeln!(out, "{}", id_token.expose_secret())?;

    let response = api.statements_raw(&id_token, code).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(())
}
