// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end tests for weekly goal aggregation
//!
//! Raw Strava payloads are decoded, enriched and aggregated against a fixed
//! reference time, then checked through the presenter.

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, TimeZone, Utc};
use serde_json::json;
use strava_weekly_goals::goals::{
    compute_weekly_progress, week_start, GoalTarget, MotivationalMessage, StatusTier,
};
use strava_weekly_goals::models::{Activity, ActivityRecord};

/// Thursday 2024-01-18 14:30 UTC
fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 18, 14, 30, 0).unwrap()
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn activity(category: &str, distance: f64, moving_time: u64, start: &str) -> ActivityRecord {
    ActivityRecord::enrich(Activity {
        activity_type: category.to_string(),
        distance,
        moving_time,
        start_date: start.to_string(),
        ..Default::default()
    })
}

#[test]
fn test_current_week_only() {
    let now = reference_now();
    let monday = week_start(&now);

    let activities = vec![
        activity("Run", 5000.0, 1800, &rfc3339(monday + Duration::days(1))),
        activity("WeightTraining", 0.0, 3600, &rfc3339(monday + Duration::days(2))),
        activity("Run", 3000.0, 1200, &rfc3339(monday - Duration::days(7))),
    ];

    let progress = compute_weekly_progress(&activities, GoalTarget::new(10.0, 2.0), &now);

    assert_eq!(progress.running_distance_km, 5.0);
    assert_eq!(progress.workout_hours, 1.0);
    assert_eq!(progress.run_count, 1);
    assert_eq!(progress.workout_count, 1);
    assert_eq!(progress.total_activities, 2);
}

#[test]
fn test_activity_before_week_start_never_counts() {
    let now = reference_now();
    let just_before = week_start(&now) - Duration::seconds(1);

    for category in ["Run", "Yoga", "Ride"] {
        let activities = vec![activity(category, 10000.0, 3600, &rfc3339(just_before))];
        let progress = compute_weekly_progress(&activities, GoalTarget::default(), &now);
        assert_eq!(progress.total_activities, 0, "{} should be excluded", category);
        assert_eq!(progress.running_distance_km, 0.0);
        assert_eq!(progress.workout_hours, 0.0);
    }
}

#[test]
fn test_monday_midnight_boundary_is_inclusive() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(week_start(&now), now);

    let activities = vec![activity("Run", 4200.0, 1500, "2024-01-15T00:00:00Z")];
    let progress = compute_weekly_progress(&activities, GoalTarget::default(), &now);

    assert_eq!(progress.total_activities, 1);
    assert_eq!(progress.run_count, 1);
    assert!((progress.running_distance_km - 4.2).abs() < 1e-9);
}

#[test]
fn test_sunday_evening_still_in_week() {
    let now = Utc.with_ymd_and_hms(2024, 1, 21, 22, 0, 0).unwrap();
    let activities = vec![
        activity("Run", 8000.0, 2400, "2024-01-15T06:00:00Z"),
        activity("Run", 6000.0, 1800, "2024-01-21T09:00:00Z"),
    ];

    let progress = compute_weekly_progress(&activities, GoalTarget::default(), &now);
    assert_eq!(progress.run_count, 2);
    assert_eq!(progress.running_distance_km, 14.0);
    assert!(progress.is_running_goal_achieved());
}

#[test]
fn test_week_boundary_follows_reference_zone() {
    // Tuesday 01:00 in UTC+10 is still Monday in UTC
    let sydney = FixedOffset::east_opt(10 * 3600).unwrap();
    let now = sydney.with_ymd_and_hms(2024, 1, 16, 1, 0, 0).unwrap();

    // Monday 2024-01-15 08:00 UTC+10 = Sunday 22:00 UTC
    let activities = vec![activity("Yoga", 0.0, 3600, "2024-01-14T22:00:00Z")];
    let progress = compute_weekly_progress(&activities, GoalTarget::default(), &now);
    assert_eq!(progress.workout_count, 1);

    // The same activity is last week when the week is computed in UTC
    let progress = compute_weekly_progress(&activities, GoalTarget::default(), &now.with_timezone(&Utc));
    assert_eq!(progress.workout_count, 0);
}

#[test]
fn test_malformed_payload_dates_do_not_fail() {
    let payload = json!([
        {"id": 1, "type": "Run", "distance": 5000.0, "moving_time": 1500, "start_date": "2024-01-16T07:00:00Z"},
        {"id": 2, "type": "Run", "distance": 9000.0, "moving_time": 2700, "start_date": "16/01/2024"},
        {"id": 3, "type": "Swimming", "distance": 1500.0, "moving_time": 2700},
        {"id": 4, "type": "Walk", "distance": 3000.0, "moving_time": 2000, "start_date": "2024-01-17T12:00:00+01:00"}
    ]);

    let raw: Vec<Activity> = serde_json::from_value(payload).unwrap();
    let records: Vec<ActivityRecord> = raw.into_iter().map(ActivityRecord::enrich).collect();
    let progress = compute_weekly_progress(&records, GoalTarget::default(), &reference_now());

    assert_eq!(progress.total_activities, 2);
    assert_eq!(progress.run_count, 1);
    assert_eq!(progress.running_distance_km, 5.0);
    assert_eq!(progress.workout_count, 0);
}

#[test]
fn test_counts_match_classification() {
    let now = reference_now();
    let start = rfc3339(week_start(&now) + Duration::hours(6));
    let categories = [
        "Run", "Run", "Ride", "Walk", "Yoga", "Pilates", "Swimming", "Elliptical", "run", "Hike",
    ];
    let activities: Vec<ActivityRecord> = categories
        .iter()
        .map(|c| activity(c, 1000.0, 1800, &start))
        .collect();

    let progress = compute_weekly_progress(&activities, GoalTarget::default(), &now);

    assert_eq!(progress.total_activities, categories.len());
    assert_eq!(progress.run_count, 2);
    assert_eq!(progress.workout_count, 4);
    assert!(progress.total_activities >= progress.run_count + progress.workout_count);
    assert_eq!(progress.running_distance_km, 2.0);
    assert_eq!(progress.workout_hours, 2.0);
}

#[test]
fn test_repeated_calls_share_no_state() {
    let activities = vec![activity("Run", 5000.0, 1500, "2024-01-16T07:00:00Z")];
    let goals = GoalTarget::default();

    let this_week = compute_weekly_progress(&activities, goals, &reference_now());
    let next_week = compute_weekly_progress(&activities, goals, &(reference_now() + Duration::days(7)));
    let again = compute_weekly_progress(&activities, goals, &reference_now());

    assert_eq!(this_week.run_count, 1);
    assert_eq!(next_week.run_count, 0);
    assert_eq!(this_week, again);
}

#[test]
fn test_presenter_on_aggregated_progress() {
    let activities = vec![
        activity("Run", 7500.0, 2400, "2024-01-16T07:00:00Z"),
        activity("Crossfit", 0.0, 2700, "2024-01-17T18:00:00Z"),
    ];
    let progress = compute_weekly_progress(&activities, GoalTarget::new(10.0, 3.0), &reference_now());

    assert_eq!(progress.running_percentage(), 75.0);
    assert_eq!(progress.running_status(), StatusTier::AlmostThere);
    assert_eq!(progress.workout_percentage(), 25.0);
    assert_eq!(progress.workout_status(), StatusTier::GettingStarted);
    assert_eq!(progress.running_remaining_km(), 2.5);
    assert_eq!(progress.workout_remaining_hours(), 2.25);
    assert_eq!(progress.motivational_message(), MotivationalMessage::BalanceWithStrength);
}

#[test]
fn test_zero_goals() {
    let activities = vec![activity("Run", 5000.0, 1500, "2024-01-16T07:00:00Z")];
    let progress = compute_weekly_progress(&activities, GoalTarget::new(0.0, 0.0), &reference_now());

    assert_eq!(progress.running_percentage(), 0.0);
    assert_eq!(progress.workout_percentage(), 0.0);
    assert!(progress.is_running_goal_achieved());
    assert!(progress.is_workout_goal_achieved());
    assert_eq!(progress.running_remaining_km(), 0.0);
    assert_eq!(progress.motivational_message(), MotivationalMessage::BothAchieved);
}
