// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Terminal report rendering
//!
//! The `render_*` functions build the report text; the `display_*` wrappers
//! print it to stdout.

use crate::goals::presenter::{progress_bar, status_indicator};
use crate::goals::WeeklyProgress;
use crate::models::{format_date, format_duration, ActivityRecord, RIDE_CATEGORY, RUN_CATEGORY};

pub fn render_weekly_goals_progress(progress: &WeeklyProgress) -> String {
    let mut lines = vec![String::new(), "🎯 === WEEKLY GOALS PROGRESS ===".to_string()];

    let running_pct = progress.running_percentage();
    lines.push(format!(
        "   🏃‍♂️ Running Goal: {:.1}/{:.1} km {} ({:.1}%)",
        progress.running_distance_km,
        progress.goals.running_goal_km,
        status_indicator(progress.running_distance_km, progress.goals.running_goal_km),
        running_pct
    ));
    lines.push(format!(
        "      [{}] {}",
        progress_bar(running_pct),
        progress.running_status()
    ));
    if !progress.is_running_goal_achieved() {
        lines.push(format!(
            "      💭 Need {:.1} km more to reach your goal",
            progress.running_remaining_km()
        ));
    }

    let workout_pct = progress.workout_percentage();
    lines.push(format!(
        "   💪 Workout Goal: {:.1}/{:.1} hours {} ({:.1}%)",
        progress.workout_hours,
        progress.goals.workout_goal_hours,
        status_indicator(progress.workout_hours, progress.goals.workout_goal_hours),
        workout_pct
    ));
    lines.push(format!(
        "      [{}] {}",
        progress_bar(workout_pct),
        progress.workout_status()
    ));
    if !progress.is_workout_goal_achieved() {
        lines.push(format!(
            "      💭 Need {:.1} hours more to reach your goal",
            progress.workout_remaining_hours()
        ));
    }

    lines.push(format!(
        "   📊 This Week: {} runs, {} workouts, {} total activities",
        progress.run_count, progress.workout_count, progress.total_activities
    ));
    lines.push(String::new());
    lines.push(format!("   {}", progress.motivational_message()));

    lines.join("\n")
}

pub fn render_activities(activities: &[ActivityRecord]) -> String {
    let mut lines = vec![String::new(), "🏃‍♂️ === RECENT ACTIVITIES ===".to_string()];

    for (i, activity) in activities.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("📈 Activity {}", i + 1));
        lines.push(format!("   🏷️  Name: {}", activity.name()));
        lines.push(format!("   🎯 Type: {}", activity.category()));
        lines.push(format!("   📏 Distance: {:.2} km", activity.distance_km()));
        lines.push(format!(
            "   ⏱️  Moving Time: {}",
            format_duration(activity.moving_time_seconds())
        ));

        if activity.elevation_gain_meters() > 0.0 {
            lines.push(format!(
                "   ⛰️  Elevation Gain: {:.0} m",
                activity.elevation_gain_meters()
            ));
        }
        if let Some(pace) = activity.pace() {
            lines.push(format!("   🏃 Average Pace: {} min/km", pace));
        }
        if let Some(heart_rate) = activity.average_heart_rate() {
            lines.push(format!("   ❤️  Avg Heart Rate: {:.0} bpm", heart_rate));
        }
        if activity.kudos() > 0 {
            lines.push(format!("   👍 Kudos: {}", activity.kudos()));
        }

        lines.push(format!(
            "   📅 Date: {}",
            format_date(activity.start_timestamp_local())
        ));
    }

    lines.join("\n")
}

pub fn render_summary(activities: &[ActivityRecord]) -> String {
    if activities.is_empty() {
        return "📊 No activities to analyze".to_string();
    }

    let total_distance: f64 = activities.iter().map(|a| a.distance_km()).sum();
    let total_time: u64 = activities.iter().map(|a| a.moving_time_seconds()).sum();
    let run_count = activities
        .iter()
        .filter(|a| a.category() == RUN_CATEGORY)
        .count();
    let ride_count = activities
        .iter()
        .filter(|a| a.category() == RIDE_CATEGORY)
        .count();

    let mut lines = vec![
        String::new(),
        "📊 === ACTIVITY SUMMARY ===".to_string(),
        format!("   📈 Total Activities: {}", activities.len()),
        format!("   🏃 Runs: {}", run_count),
        format!("   🚴 Rides: {}", ride_count),
        format!("   📏 Total Distance: {:.2} km", total_distance),
        format!("   ⏱️  Total Time: {}", format_duration(total_time)),
    ];

    if total_distance > 0.0 {
        lines.push(format!(
            "   📊 Average Distance: {:.2} km",
            total_distance / activities.len() as f64
        ));
    }

    lines.join("\n")
}

pub fn display_weekly_goals_progress(progress: &WeeklyProgress) {
    println!("{}", render_weekly_goals_progress(progress));
}

pub fn display_activities(activities: &[ActivityRecord]) {
    println!("{}", render_activities(activities));
}

pub fn display_summary(activities: &[ActivityRecord]) {
    println!("{}", render_summary(activities));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::GoalTarget;
    use crate::models::Activity;

    fn record(activity: Activity) -> ActivityRecord {
        ActivityRecord::enrich(activity)
    }

    fn morning_run() -> ActivityRecord {
        record(Activity {
            id: 1,
            name: "Morning Run".to_string(),
            activity_type: "Run".to_string(),
            distance: 5000.0,
            moving_time: 1800,
            total_elevation_gain: 42.0,
            start_date: "2024-01-16T07:00:00Z".to_string(),
            start_date_local: "2024-01-16T08:00:00Z".to_string(),
            has_heartrate: true,
            average_heartrate: 151.4,
            kudos_count: 4,
            ..Default::default()
        })
    }

    fn evening_ride() -> ActivityRecord {
        record(Activity {
            id: 2,
            name: "Evening Ride".to_string(),
            activity_type: "Ride".to_string(),
            distance: 20000.0,
            moving_time: 3600,
            ..Default::default()
        })
    }

    #[test]
    fn test_weekly_progress_report_in_progress() {
        let progress = WeeklyProgress {
            running_distance_km: 7.5,
            workout_hours: 0.5,
            total_activities: 3,
            run_count: 2,
            workout_count: 1,
            ..WeeklyProgress::empty(GoalTarget::new(10.0, 2.0))
        };
        let report = render_weekly_goals_progress(&progress);

        assert!(report.contains("Running Goal: 7.5/10.0 km 🟡 (75.0%)"));
        assert!(report.contains("almost there"));
        assert!(report.contains("Need 2.5 km more"));
        assert!(report.contains("Workout Goal: 0.5/2.0 hours 🔴 (25.0%)"));
        assert!(report.contains("getting started"));
        assert!(report.contains("Need 1.5 hours more"));
        assert!(report.contains("2 runs, 1 workouts, 3 total activities"));
        assert!(report.contains("balance it with some strength training"));
    }

    #[test]
    fn test_weekly_progress_report_completed() {
        let progress = WeeklyProgress {
            running_distance_km: 12.0,
            workout_hours: 3.0,
            ..WeeklyProgress::empty(GoalTarget::new(10.0, 3.0))
        };
        let report = render_weekly_goals_progress(&progress);

        assert!(!report.contains("Need"));
        assert!(report.contains("✅"));
        assert!(report.contains("Congratulations"));
    }

    #[test]
    fn test_activity_details() {
        let report = render_activities(&[morning_run(), evening_ride()]);

        assert!(report.contains("📈 Activity 1"));
        assert!(report.contains("Name: Morning Run"));
        assert!(report.contains("Distance: 5.00 km"));
        assert!(report.contains("Moving Time: 30m 0s"));
        assert!(report.contains("Elevation Gain: 42 m"));
        assert!(report.contains("Average Pace: 6:00 min/km"));
        assert!(report.contains("Avg Heart Rate: 151 bpm"));
        assert!(report.contains("Kudos: 4"));
        assert!(report.contains("Date: Jan 16, 2024 08:00"));

        // The ride has no pace, heart rate or kudos lines and no local date
        let ride_section = report.split("📈 Activity 2").nth(1).unwrap();
        assert!(!ride_section.contains("Pace"));
        assert!(!ride_section.contains("Kudos"));
        assert!(ride_section.contains("Date: N/A"));
    }

    #[test]
    fn test_summary() {
        let report = render_summary(&[morning_run(), evening_ride()]);

        assert!(report.contains("Total Activities: 2"));
        assert!(report.contains("Runs: 1"));
        assert!(report.contains("Rides: 1"));
        assert!(report.contains("Total Distance: 25.00 km"));
        assert!(report.contains("Total Time: 1h 30m 0s"));
        assert!(report.contains("Average Distance: 12.50 km"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(render_summary(&[]), "📊 No activities to analyze");
    }
}
