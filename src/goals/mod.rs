// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Weekly Goals
//!
//! Aggregates the current calendar week's activities into progress toward two
//! goals: kilometers run and hours spent on workouts.
//!
//! - [`classifier`]: which activity types count toward which goal
//! - [`week`]: Monday-midnight week boundaries
//! - [`presenter`]: percentages, tiers and messages for display
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use strava_weekly_goals::goals::{compute_weekly_progress, GoalTarget};
//! use strava_weekly_goals::models::{Activity, ActivityRecord};
//!
//! let run = ActivityRecord::enrich(Activity {
//!     activity_type: "Run".to_string(),
//!     distance: 5000.0,
//!     moving_time: 1500,
//!     start_date: "2024-01-16T07:00:00Z".to_string(),
//!     ..Default::default()
//! });
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 18, 12, 0, 0).unwrap();
//! let progress = compute_weekly_progress(&[run], GoalTarget::new(10.0, 3.0), &now);
//! assert_eq!(progress.running_distance_km, 5.0);
//! assert_eq!(progress.running_percentage(), 50.0);
//! ```

use crate::models::ActivityRecord;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod classifier;
pub mod presenter;
pub mod week;

pub use classifier::{classify, is_run, is_workout, GoalClass, WORKOUT_CATEGORIES};
pub use presenter::{MotivationalMessage, StatusTier};
pub use week::week_start;

/// Default weekly running target in kilometers
pub const DEFAULT_RUNNING_GOAL_KM: f64 = 10.0;

/// Default weekly workout target in hours
pub const DEFAULT_WORKOUT_GOAL_HOURS: f64 = 3.0;

/// Weekly targets, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalTarget {
    pub running_goal_km: f64,
    pub workout_goal_hours: f64,
}

impl GoalTarget {
    pub fn new(running_goal_km: f64, workout_goal_hours: f64) -> Self {
        Self {
            running_goal_km,
            workout_goal_hours,
        }
    }
}

impl Default for GoalTarget {
    fn default() -> Self {
        Self::new(DEFAULT_RUNNING_GOAL_KM, DEFAULT_WORKOUT_GOAL_HOURS)
    }
}

/// Totals for the current week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub goals: GoalTarget,
    /// Kilometers from this week's runs
    pub running_distance_km: f64,
    /// Moving hours from this week's workouts
    pub workout_hours: f64,
    /// Every activity this week, classified or not
    pub total_activities: usize,
    pub run_count: usize,
    pub workout_count: usize,
}

impl WeeklyProgress {
    /// Zero-valued progress for the given goals
    pub fn empty(goals: GoalTarget) -> Self {
        Self {
            goals,
            running_distance_km: 0.0,
            workout_hours: 0.0,
            total_activities: 0,
            run_count: 0,
            workout_count: 0,
        }
    }

    pub fn running_percentage(&self) -> f64 {
        presenter::percentage(self.running_distance_km, self.goals.running_goal_km)
    }

    pub fn workout_percentage(&self) -> f64 {
        presenter::percentage(self.workout_hours, self.goals.workout_goal_hours)
    }

    pub fn is_running_goal_achieved(&self) -> bool {
        presenter::achieved(self.running_distance_km, self.goals.running_goal_km)
    }

    pub fn is_workout_goal_achieved(&self) -> bool {
        presenter::achieved(self.workout_hours, self.goals.workout_goal_hours)
    }

    pub fn running_remaining_km(&self) -> f64 {
        presenter::remaining(self.running_distance_km, self.goals.running_goal_km)
    }

    pub fn workout_remaining_hours(&self) -> f64 {
        presenter::remaining(self.workout_hours, self.goals.workout_goal_hours)
    }

    pub fn running_status(&self) -> StatusTier {
        StatusTier::from_percentage(self.running_percentage())
    }

    pub fn workout_status(&self) -> StatusTier {
        StatusTier::from_percentage(self.workout_percentage())
    }

    pub fn motivational_message(&self) -> MotivationalMessage {
        MotivationalMessage::select(self)
    }

    fn record(&mut self, activity: &ActivityRecord) {
        self.total_activities += 1;

        // Independent checks: a category in both sets counts toward both goals
        if is_run(activity.category()) {
            self.running_distance_km += activity.distance_km();
            self.run_count += 1;
        }
        if is_workout(activity.category()) {
            self.workout_hours += activity.moving_time_hours();
            self.workout_count += 1;
        }
    }
}

/// Fold activities from the week containing `now` into weekly progress
///
/// The week starts at Monday 00:00 in `now`'s time zone. Activity start
/// timestamps are compared as absolute instants, whatever offset they carry.
/// Activities whose timestamp cannot be parsed are skipped. This never fails;
/// an empty slice yields zero progress.
pub fn compute_weekly_progress<Tz: TimeZone>(
    activities: &[ActivityRecord],
    goals: GoalTarget,
    now: &DateTime<Tz>,
) -> WeeklyProgress {
    let week_start = week::week_start(now).with_timezone(&Utc);
    let mut progress = WeeklyProgress::empty(goals);
    let mut malformed = 0usize;

    for activity in activities {
        let started_at = match DateTime::parse_from_rfc3339(activity.start_timestamp()) {
            Ok(started_at) => started_at.with_timezone(&Utc),
            Err(_) => {
                debug!(
                    activity_id = activity.id(),
                    start_date = activity.start_timestamp(),
                    "Skipping activity with unparseable start date"
                );
                malformed += 1;
                continue;
            }
        };

        if started_at < week_start {
            continue;
        }

        progress.record(activity);
    }

    if malformed > 0 {
        debug!(skipped = malformed, "Skipped activities with unparseable start dates");
    }
    debug!(
        week_start = %week_start,
        total = progress.total_activities,
        runs = progress.run_count,
        workouts = progress.workout_count,
        "Computed weekly progress"
    );

    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn record(category: &str, distance: f64, moving_time: u64, start: &str) -> ActivityRecord {
        ActivityRecord::enrich(Activity {
            activity_type: category.to_string(),
            distance,
            moving_time,
            start_date: start.to_string(),
            ..Default::default()
        })
    }

    fn wednesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 17, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input_is_zero_progress() {
        let progress = compute_weekly_progress(&[], GoalTarget::default(), &wednesday());
        assert_eq!(progress, WeeklyProgress::empty(GoalTarget::default()));
    }

    #[test]
    fn test_unclassified_activities_only_count_toward_total() {
        let activities = vec![
            record("Ride", 30000.0, 3600, "2024-01-16T07:00:00Z"),
            record("Walk", 4000.0, 2400, "2024-01-16T19:00:00Z"),
        ];
        let progress = compute_weekly_progress(&activities, GoalTarget::default(), &wednesday());

        assert_eq!(progress.total_activities, 2);
        assert_eq!(progress.run_count, 0);
        assert_eq!(progress.workout_count, 0);
        assert_eq!(progress.running_distance_km, 0.0);
        assert_eq!(progress.workout_hours, 0.0);
    }

    #[test]
    fn test_malformed_timestamps_are_skipped() {
        let activities = vec![
            record("Run", 5000.0, 1500, "yesterday"),
            record("Yoga", 0.0, 3600, ""),
            record("Run", 3000.0, 900, "2024-01-16T07:00:00Z"),
        ];
        let progress = compute_weekly_progress(&activities, GoalTarget::default(), &wednesday());

        assert_eq!(progress.total_activities, 1);
        assert_eq!(progress.run_count, 1);
        assert_eq!(progress.running_distance_km, 3.0);
        assert_eq!(progress.workout_count, 0);
    }

    #[test]
    fn test_offsets_compare_as_instants() {
        // 2024-01-15T01:00+02:00 is Sunday 23:00 UTC, before a UTC week start
        let activities = vec![record("Run", 5000.0, 1500, "2024-01-15T01:00:00+02:00")];
        let progress = compute_weekly_progress(&activities, GoalTarget::default(), &wednesday());
        assert_eq!(progress.total_activities, 0);
    }

    #[test]
    fn test_goals_are_copied_into_result() {
        let goals = GoalTarget::new(21.1, 4.5);
        let progress = compute_weekly_progress(&[], goals, &wednesday());
        assert_eq!(progress.goals, goals);
    }
}
