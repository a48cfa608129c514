// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Endpoints, defaults and environment variable names.

/// Strava API endpoints
pub mod api {
    /// Base URL for the v3 REST API
    pub const STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";

    /// OAuth token endpoint used for refresh-token exchange
    pub const STRAVA_TOKEN_URL: &str = "https://www.strava.com/oauth/token";

    /// Activities requested per page
    pub const DEFAULT_PER_PAGE: usize = 30;

    /// Timeout applied to every HTTP request, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Local activity cache
pub mod cache {
    /// Directory under the home directory holding cached data
    pub const CACHE_DIR_NAME: &str = ".strava-goals-cache";

    pub const ACTIVITIES_FILE: &str = "activities.json";

    /// Cached activities older than this are refetched
    pub const DEFAULT_MAX_AGE_MINUTES: u64 = 60;

    /// Upper bound on the configured max age (one year)
    pub const MAX_AGE_MINUTES: u64 = 60 * 24 * 365;
}

/// Command-line defaults
pub mod cli {
    /// Activities listed in the detail section
    pub const DEFAULT_MAX_RESULTS: usize = 30;

    /// Config file location under the platform config directory
    pub const CONFIG_FILE_PATH: &str = "strava-weekly-goals/config.toml";
}

/// Environment variable names read at startup
pub mod env_vars {
    pub const STRAVA_CLIENT_ID: &str = "STRAVA_CLIENT_ID";
    pub const STRAVA_CLIENT_SECRET: &str = "STRAVA_CLIENT_SECRET";
    pub const STRAVA_REFRESH_TOKEN: &str = "STRAVA_REFRESH_TOKEN";
    pub const STRAVA_API_BASE: &str = "STRAVA_API_BASE";
    pub const STRAVA_TOKEN_URL: &str = "STRAVA_TOKEN_URL";
    pub const STRAVA_ACTIVITIES_PER_PAGE: &str = "STRAVA_ACTIVITIES_PER_PAGE";
    pub const WEEKLY_RUNNING_GOAL_KM: &str = "WEEKLY_RUNNING_GOAL_KM";
    pub const WEEKLY_WORKOUT_GOAL_HOURS: &str = "WEEKLY_WORKOUT_GOAL_HOURS";
    pub const CACHE_MAX_AGE_MINUTES: &str = "CACHE_MAX_AGE_MINUTES";
    pub const CACHE_DIR: &str = "STRAVA_GOALS_CACHE_DIR";
}
