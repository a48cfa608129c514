// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! OAuth2 refresh-token exchange against the Strava token endpoint

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::providers::ProviderError;

/// Access token obtained from a refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: Option<DateTime<Utc>>,
    /// Strava may rotate the refresh token on every exchange
    pub refresh_token: Option<String>,
}

impl OAuth2Token {
    pub fn will_expire_soon(&self) -> bool {
        self.expires_at
            .map(|expires_at| expires_at <= Utc::now() + Duration::minutes(5))
            .unwrap_or(false)
    }
}

/// Client credentials plus the long-lived refresh token
#[derive(Debug, Clone)]
pub struct RefreshCredentials<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct StravaTokenResponse {
    #[serde(default)]
    token_type: String,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    access_token: String,
}

/// Exchange a refresh token for a fresh access token
///
/// Fails on transport errors, non-success status codes (the response body is
/// kept in the error), undecodable payloads and empty access tokens.
pub async fn refresh_strava_token(
    client: &reqwest::Client,
    token_url: &str,
    credentials: &RefreshCredentials<'_>,
) -> Result<OAuth2Token> {
    let params = [
        ("client_id", credentials.client_id),
        ("client_secret", credentials.client_secret),
        ("refresh_token", credentials.refresh_token),
        ("grant_type", "refresh_token"),
    ];

    let response = client
        .post(token_url)
        .form(&params)
        .send()
        .await
        .context("Token request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            endpoint: "token",
            status: status.as_u16(),
            body,
        }
        .into());
    }

    let token: StravaTokenResponse = response
        .json()
        .await
        .context("Failed to decode token response")?;

    if token.access_token.is_empty() {
        return Err(ProviderError::EmptyAccessToken.into());
    }

    Ok(OAuth2Token {
        access_token: token.access_token,
        token_type: token.token_type,
        expires_at: token
            .expires_at
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0)),
        refresh_token: token.refresh_token,
    })
}
