// src/jquants/auth.rs
use secrecy::SecretString;

use crate::jquants::{FinancialApi, IdToken};
use crate::utils::config::REFRESH_TOKEN_VAR;
use crate::utils::AppError;

/// Exchanges the refresh credential for a bearer token.
///
/// Fails before any request when the credential is absent. A response
/// without `idToken` (malformed, expired or invalid credential) is a
/// [`AppError::MissingIdToken`]. Every call performs a fresh exchange.
pub async fn authenticate(
    api: &dyn FinancialApi,
    refresh_token: Option<&SecretString>,
) -> Result<IdToken, AppError> {
    let refresh_token = refresh_token
        .ok_or_else(|| AppError::MissingCredential(REFRESH_TOKEN_VAR.to_string()))?;

    let response = api.auth_refresh(refresh_token).await?;

    match response.idToken {
        Some(token) if !token.is_empty() => {
            tracing::info!("Obtained id token");
            Ok(SecretString::from(token))
        }
        _ => {
            let detail = response
                .message
                .unwrap_or_else(|| "no message from server".to_string());
            tracing::error!("Token refresh failed: {}", detail);
            Err(AppError::MissingIdToken(detail))
        }
    }
}
