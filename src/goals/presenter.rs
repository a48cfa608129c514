// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Display-ready values derived from weekly progress
//!
//! Everything here is a pure function of the numbers it is given. The
//! terminal renderer only formats what these functions return.

use super::WeeklyProgress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells in a progress bar
pub const PROGRESS_BAR_CELLS: usize = 20;

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '░';

/// Progress toward a goal as a percentage; a zero goal yields 0
pub fn percentage(actual: f64, goal: f64) -> f64 {
    if goal == 0.0 {
        return 0.0;
    }
    (actual / goal) * 100.0
}

pub fn achieved(actual: f64, goal: f64) -> bool {
    actual >= goal
}

/// Amount still needed to reach the goal, never negative
pub fn remaining(actual: f64, goal: f64) -> f64 {
    (goal - actual).max(0.0)
}

/// Number of filled cells for a percentage, one cell per 5%
pub fn filled_cells(percentage: f64) -> usize {
    let cells = (percentage / 5.0).floor();
    if cells.is_nan() || cells <= 0.0 {
        0
    } else {
        (cells as usize).min(PROGRESS_BAR_CELLS)
    }
}

/// Twenty-cell text progress bar, e.g. `███████████████░░░░░` at 75%
pub fn progress_bar(percentage: f64) -> String {
    let filled = filled_cells(percentage);
    let mut bar = String::with_capacity(PROGRESS_BAR_CELLS * FILLED_CELL.len_utf8());
    bar.extend(std::iter::repeat(FILLED_CELL).take(filled));
    bar.extend(std::iter::repeat(EMPTY_CELL).take(PROGRESS_BAR_CELLS - filled));
    bar
}

/// Qualitative progress tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Completed,
    AlmostThere,
    Halfway,
    GettingStarted,
    JustStarted,
}

impl StatusTier {
    /// Tier for a percentage, checked from the highest threshold down
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            StatusTier::Completed
        } else if percentage >= 75.0 {
            StatusTier::AlmostThere
        } else if percentage >= 50.0 {
            StatusTier::Halfway
        } else if percentage >= 25.0 {
            StatusTier::GettingStarted
        } else {
            StatusTier::JustStarted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::Completed => "completed",
            StatusTier::AlmostThere => "almost there",
            StatusTier::Halfway => "halfway",
            StatusTier::GettingStarted => "getting started",
            StatusTier::JustStarted => "just started",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traffic-light symbol shown next to a goal line
pub fn status_indicator(actual: f64, goal: f64) -> &'static str {
    let pct = percentage(actual, goal);
    if achieved(actual, goal) {
        "✅"
    } else if pct >= 75.0 {
        "🟡"
    } else if pct >= 50.0 {
        "🟠"
    } else {
        "🔴"
    }
}

/// Closing message for the weekly report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationalMessage {
    BothAchieved,
    RunningAchieved,
    WorkoutAchieved,
    OverHalfwayBoth,
    BalanceWithStrength,
    BalanceWithCardio,
    WeekIsYoung,
}

impl MotivationalMessage {
    /// Pick the message for a week's progress
    ///
    /// Achievements take precedence over percentages. When neither goal is met,
    /// both must be strictly above 50% for the "over halfway" message; otherwise
    /// the lagging dimension is suggested, and ties fall through to the
    /// generic message.
    pub fn select(progress: &WeeklyProgress) -> Self {
        let running_achieved = progress.is_running_goal_achieved();
        let workout_achieved = progress.is_workout_goal_achieved();

        match (running_achieved, workout_achieved) {
            (true, true) => MotivationalMessage::BothAchieved,
            (true, false) => MotivationalMessage::RunningAchieved,
            (false, true) => MotivationalMessage::WorkoutAchieved,
            (false, false) => {
                let running = progress.running_percentage();
                let workout = progress.workout_percentage();

                if running > 50.0 && workout > 50.0 {
                    MotivationalMessage::OverHalfwayBoth
                } else if running > workout {
                    MotivationalMessage::BalanceWithStrength
                } else if workout > running {
                    MotivationalMessage::BalanceWithCardio
                } else {
                    MotivationalMessage::WeekIsYoung
                }
            }
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            MotivationalMessage::BothAchieved => {
                "🎉 Congratulations! You've achieved both your running and workout goals this week!"
            }
            MotivationalMessage::RunningAchieved => {
                "🏃‍♂️ Great job on your running goal! Keep up the momentum with your workouts!"
            }
            MotivationalMessage::WorkoutAchieved => {
                "💪 Excellent work on your workout goal! Time to lace up those running shoes!"
            }
            MotivationalMessage::OverHalfwayBoth => {
                "🔥 You're over halfway to both goals! Keep pushing!"
            }
            MotivationalMessage::BalanceWithStrength => {
                "🏃‍♂️ Strong running progress! Time to balance it with some strength training!"
            }
            MotivationalMessage::BalanceWithCardio => {
                "💪 Great workout momentum! Add some cardio to complete the balance!"
            }
            MotivationalMessage::WeekIsYoung => {
                "🚀 The week is young! Time to start building towards your goals!"
            }
        }
    }
}

impl fmt::Display for MotivationalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
