// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # strava-goals
//!
//! Fetches recent Strava activities and reports progress toward this week's
//! running and workout goals.
//!
//! ## Usage
//!
//! ```bash
//! export STRAVA_CLIENT_ID=...
//! export STRAVA_CLIENT_SECRET=...
//! export STRAVA_REFRESH_TOKEN=...
//! cargo run --bin strava-goals -- --max 10 --summary false
//! ```
//!
//! Credentials may also live in a `.env` file or in
//! `~/.config/strava-weekly-goals/config.toml`.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{ArgAction, Parser};
use std::process::ExitCode;
use tracing::{error, info, warn};

use strava_weekly_goals::cache::ActivityCache;
use strava_weekly_goals::config::{CacheConfig, Config};
use strava_weekly_goals::constants::cli::DEFAULT_MAX_RESULTS;
use strava_weekly_goals::display;
use strava_weekly_goals::goals::compute_weekly_progress;
use strava_weekly_goals::logging::LoggingConfig;
use strava_weekly_goals::models::{Activity, ActivityRecord};
use strava_weekly_goals::providers::strava::StravaProvider;
use strava_weekly_goals::providers::FitnessProvider;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of activities to list in detail
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max: usize,

    /// Show the activity summary
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    summary: bool,

    /// Show the detailed activity list
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    details: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Always fetch from Strava instead of reading the cache
    #[arg(long)]
    no_cache: bool,

    /// Remove cached activities and exit
    #[arg(long)]
    clear_cache: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    if args.clear_cache {
        let directory = Config::load(args.config.clone())
            .map(|config| config.cache.resolve_directory())
            .unwrap_or_else(|_| CacheConfig::default().resolve_directory());
        ActivityCache::new(directory.clone()).clear()?;
        info!("🧹 Cleared cache at {}", directory.display());
        return Ok(());
    }

    info!("🚀 Strava Weekly Goals Tracker starting...");
    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    let cache = ActivityCache::new(config.cache.resolve_directory());

    let cached = if args.no_cache {
        None
    } else {
        cache.load_activities(config.cache.max_age())
    };

    let activities = match cached {
        Some(activities) => {
            info!("📦 Using {} cached activities", activities.len());
            activities
        }
        None => {
            let provider = StravaProvider::new(&config.strava)?;
            let activities = fetch_activities(&provider, config.strava.per_page).await?;
            if let Err(e) = cache.save_activities(&activities) {
                warn!(error = %e, "Failed to update activity cache");
            }
            activities
        }
    };

    if activities.is_empty() {
        info!("ℹ️ No activities found");
        return Ok(());
    }

    let records: Vec<ActivityRecord> = activities.into_iter().map(ActivityRecord::enrich).collect();

    info!("🎯 Calculating weekly goals progress...");
    let progress = compute_weekly_progress(&records, config.goals, &Local::now());
    display::display_weekly_goals_progress(&progress);

    if args.details {
        let shown = records.len().min(args.max);
        display::display_activities(&records[..shown]);
    }
    if args.summary {
        display::display_summary(&records);
    }

    info!("🎯 Analysis complete: processed {} activities", records.len());
    Ok(())
}

async fn fetch_activities(provider: &dyn FitnessProvider, per_page: usize) -> Result<Vec<Activity>> {
    info!("📡 Authenticating with {} API...", provider.provider_name());
    let token = provider.authenticate().await.context("Authentication failed")?;
    info!("✅ Successfully authenticated");

    info!("📊 Fetching recent activities...");
    let activities = provider
        .get_activities(&token, per_page)
        .await
        .context("Failed to fetch activities")?;
    info!("✅ Retrieved {} activities", activities.len());

    Ok(activities)
}
