// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Strava Weekly Goals
//!
//! A command-line tracker for two weekly fitness goals: kilometers run and
//! hours spent on workouts. Activities come from the Strava API (or a short
//! lived local cache), and progress is reported in the terminal.
//!
//! ## Architecture
//!
//! - **Goals**: week boundaries, activity classification, progress aggregation
//!   and the derived display values. Pure, no I/O.
//! - **Models**: raw Strava activities and their enriched form
//! - **Providers**: activity source trait and the Strava implementation
//! - **OAuth2**: refresh-token exchange
//! - **Cache**: JSON file cache of the last fetch
//! - **Display**: terminal report rendering
//! - **Config**: TOML file or environment configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use strava_weekly_goals::config::Config;
//! use strava_weekly_goals::goals::compute_weekly_progress;
//! use strava_weekly_goals::models::ActivityRecord;
//! use strava_weekly_goals::providers::{strava::StravaProvider, FitnessProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load(None)?;
//!     let provider = StravaProvider::new(&config.strava)?;
//!
//!     let token = provider.authenticate().await?;
//!     let activities: Vec<ActivityRecord> = provider
//!         .get_activities(&token, config.strava.per_page)
//!         .await?
//!         .into_iter()
//!         .map(ActivityRecord::enrich)
//!         .collect();
//!
//!     let progress = compute_weekly_progress(&activities, config.goals, &chrono::Local::now());
//!     println!("{}", progress.motivational_message());
//!     Ok(())
//! }
//! ```

/// Activity cache on local disk
pub mod cache;

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Terminal report rendering
pub mod display;

/// Weekly goal aggregation and progress presentation
pub mod goals;

/// Structured logging setup
pub mod logging;

/// Activity data models
pub mod models;

/// OAuth2 refresh-token exchange
pub mod oauth2_client;

/// Activity providers
pub mod providers;
