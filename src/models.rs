// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Activity data as it arrives from Strava (and as it is stored in the local
//! cache), plus the enriched form consumed by the goal engine.
//!
//! - [`Activity`]: raw record, field names follow the Strava JSON payload
//! - [`ActivityRecord`]: enriched record with km, hours and running pace
//!
//! An [`ActivityRecord`] can only be built through [`ActivityRecord::enrich`],
//! so its derived fields always agree with the raw ones.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Category label Strava uses for runs
pub const RUN_CATEGORY: &str = "Run";

/// Category label Strava uses for rides
pub const RIDE_CATEGORY: &str = "Ride";

/// A single activity as returned by `GET /athlete/activities`
///
/// Numeric fields missing from the payload default to zero, and a missing
/// `start_date` becomes an empty string. The goal engine treats an empty or
/// malformed start date as "not in this week" rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity id
    #[serde(default)]
    pub id: i64,
    /// Activity title
    #[serde(default)]
    pub name: String,
    /// Strava activity type (Run, Ride, WeightTraining, ...)
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u64,
    /// Elapsed time in seconds
    #[serde(default)]
    pub elapsed_time: u64,
    /// Elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: f64,
    /// Start instant, RFC3339 in UTC
    #[serde(default)]
    pub start_date: String,
    /// Start time in the athlete's local zone
    #[serde(default)]
    pub start_date_local: String,
    /// Average speed in m/s
    #[serde(default)]
    pub average_speed: f64,
    /// Max speed in m/s
    #[serde(default)]
    pub max_speed: f64,
    #[serde(default)]
    pub has_heartrate: bool,
    /// Average heart rate in bpm
    #[serde(default)]
    pub average_heartrate: f64,
    #[serde(default)]
    pub kudos_count: u32,
}

/// An activity with its human-friendly fields computed
///
/// Fields are private: the only way to obtain a record is
/// [`ActivityRecord::enrich`], which computes every derived value at once.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    id: i64,
    name: String,
    category: String,
    distance_meters: f64,
    moving_time_seconds: u64,
    elevation_gain_meters: f64,
    start_timestamp: String,
    start_timestamp_local: String,
    average_heart_rate: Option<f64>,
    kudos: u32,
    moving_time_hours: f64,
    pace: Option<String>,
}

impl ActivityRecord {
    /// Derive km, hours and (for runs with distance) pace from a raw activity
    pub fn enrich(activity: Activity) -> Self {
        let distance_km = kilometers(activity.distance);
        let moving_time_hours = activity.moving_time as f64 / 3600.0;

        let pace = if activity.activity_type == RUN_CATEGORY && activity.distance > 0.0 {
            Some(format_pace(activity.moving_time as f64 / distance_km))
        } else {
            None
        };

        let average_heart_rate = (activity.has_heartrate && activity.average_heartrate > 0.0)
            .then_some(activity.average_heartrate);

        Self {
            id: activity.id,
            name: activity.name,
            category: activity.activity_type,
            distance_meters: activity.distance,
            moving_time_seconds: activity.moving_time,
            elevation_gain_meters: activity.total_elevation_gain,
            start_timestamp: activity.start_date,
            start_timestamp_local: activity.start_date_local,
            average_heart_rate,
            kudos: activity.kudos_count,
            moving_time_hours,
            pace,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vendor category label, e.g. "Run" or "WeightTraining"
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn moving_time_seconds(&self) -> u64 {
        self.moving_time_seconds
    }

    pub fn elevation_gain_meters(&self) -> f64 {
        self.elevation_gain_meters
    }

    /// Raw start timestamp, possibly malformed
    pub fn start_timestamp(&self) -> &str {
        &self.start_timestamp
    }

    pub fn start_timestamp_local(&self) -> &str {
        &self.start_timestamp_local
    }

    /// Average heart rate, only when the activity recorded one
    pub fn average_heart_rate(&self) -> Option<f64> {
        self.average_heart_rate
    }

    pub fn kudos(&self) -> u32 {
        self.kudos
    }

    pub fn distance_km(&self) -> f64 {
        kilometers(self.distance_meters)
    }

    pub fn moving_time_hours(&self) -> f64 {
        self.moving_time_hours
    }

    /// Running pace as `M:SS` per km
    pub fn pace(&self) -> Option<&str> {
        self.pace.as_deref()
    }
}

fn kilometers(meters: f64) -> f64 {
    meters / 1000.0
}

/// Format a pace in seconds-per-km as `M:SS`, truncating fractional seconds
fn format_pace(seconds_per_km: f64) -> String {
    let total_seconds = seconds_per_km as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Format a duration as `1h 5m 3s`, or `5m 3s` when under an hour
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

/// Format an RFC3339 timestamp as `Jan 2, 2006 15:04`
///
/// Empty input renders as `N/A`; anything unparseable is returned unchanged.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return "N/A".to_string();
    }

    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => date.to_string(),
    }
}
