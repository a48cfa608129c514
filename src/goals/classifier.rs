// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mapping from Strava activity types to goal dimensions

use crate::models::RUN_CATEGORY;
use serde::{Deserialize, Serialize};

/// Strava activity types that count toward the workout goal
///
/// Matching is exact and case-sensitive.
pub const WORKOUT_CATEGORIES: &[&str] = &[
    "WeightTraining",
    "Workout",
    "Crossfit",
    "StairStepper",
    "Elliptical",
    "Yoga",
    "Pilates",
    "RockClimbing",
    "Swimming",
];

/// Goal dimension an activity contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalClass {
    /// Counts toward the running goal by distance
    Run,
    /// Counts toward the workout goal by moving time
    Workout,
    /// Counted in the weekly total only
    Other,
}

/// Whether the category counts toward the running goal
pub fn is_run(category: &str) -> bool {
    category == RUN_CATEGORY
}

/// Whether the category counts toward the workout goal
pub fn is_workout(category: &str) -> bool {
    WORKOUT_CATEGORIES.contains(&category)
}

/// Single classification for display purposes
///
/// The aggregator does not use this: it checks [`is_run`] and [`is_workout`]
/// independently so a category matching both would count toward both goals.
pub fn classify(category: &str) -> GoalClass {
    if is_run(category) {
        GoalClass::Run
    } else if is_workout(category) {
        GoalClass::Workout
    } else {
        GoalClass::Other
    }
}
