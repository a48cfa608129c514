// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Activity;

pub mod strava;

/// Source of raw activities
#[async_trait]
pub trait FitnessProvider: Send + Sync {
    /// Obtain a bearer token for subsequent calls
    async fn authenticate(&self) -> Result<String>;

    /// Most recent activities, newest first
    async fn get_activities(&self, access_token: &str, per_page: usize) -> Result<Vec<Activity>>;

    fn provider_name(&self) -> &'static str;
}

/// Failures reported by a provider's HTTP API
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{endpoint} API error {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("Empty access token received")]
    EmptyAccessToken,

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}
