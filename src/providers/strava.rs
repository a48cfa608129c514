// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::{FitnessProvider, ProviderError};
use crate::config::StravaConfig;
use crate::constants::api::REQUEST_TIMEOUT_SECS;
use crate::models::Activity;
use crate::oauth2_client::{self, RefreshCredentials};

pub struct StravaProvider {
    client: Client,
    api_base: String,
    token_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl StravaProvider {
    pub fn new(config: &StravaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
        })
    }

    fn activities_url(&self, per_page: usize) -> Result<Url> {
        let endpoint = format!("{}/athlete/activities", self.api_base);
        let mut url = Url::parse(&endpoint).map_err(|_| ProviderError::InvalidUrl(endpoint))?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", "1");
        Ok(url)
    }
}

#[async_trait]
impl FitnessProvider for StravaProvider {
    async fn authenticate(&self) -> Result<String> {
        let credentials = RefreshCredentials {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            refresh_token: &self.refresh_token,
        };

        let token =
            oauth2_client::refresh_strava_token(&self.client, &self.token_url, &credentials)
                .await?;

        if let Some(expires_at) = token.expires_at {
            debug!(%expires_at, "Access token refreshed");
        }
        if token.will_expire_soon() {
            info!("Access token expires within five minutes");
        }

        Ok(token.access_token)
    }

    async fn get_activities(&self, access_token: &str, per_page: usize) -> Result<Vec<Activity>> {
        let url = self.activities_url(per_page)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Activities request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                endpoint: "activities",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .context("Failed to read activities response")?;
        let activities: Vec<Activity> =
            serde_json::from_str(&body).context("Failed to decode activities response")?;

        debug!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }

    fn provider_name(&self) -> &'static str {
        "Strava"
    }
}
