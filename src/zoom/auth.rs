//! Server-to-Server OAuth account-credentials exchange.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Credentials;

pub const DEFAULT_TOKEN_URL: &str = "https://zoom.us/oauth/token";

/// Opaque bearer token for the Zoom REST API. Fetched once per client
/// instance; there is no refresh.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn secret(&self) -> &str {
        &self.0
    }
}

// The token value stays out of Debug output and logs.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange account credentials for a bearer token via a form-encoded
/// POST to the provider's token endpoint.
pub async fn fetch_token(
    http: &reqwest::Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    debug!("Requesting access token from {}", token_url);

    let form = [
        ("grant_type", "account_credentials"),
        ("account_id", credentials.account_id.as_str()),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
    ];

    let response = http
        .post(token_url)
        .form(&form)
        .send()
        .await
        .context("Failed to send token request")?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read token response body")?;

    if !status.is_success() {
        return Err(anyhow::anyhow!(
            "Token request failed ({}): {}",
            status,
            body
        ));
    }

    let token: TokenResponse =
        serde_json::from_str(&body).context("Failed to parse token response")?;

    info!("Obtained access token");
    Ok(AccessToken(token.access_token))
}
