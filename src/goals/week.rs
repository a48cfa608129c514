// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Calendar week boundaries

use chrono::{DateTime, Datelike, Days, Duration, NaiveDateTime, NaiveTime, TimeZone};

/// Start of the calendar week containing `now`: Monday 00:00:00 in `now`'s zone
///
/// Weeks run Monday through Sunday, so on a Sunday this returns the Monday six
/// days earlier. At exactly Monday midnight the result equals `now`.
///
/// When local midnight does not exist (a DST gap), the first valid instant
/// of that Monday is returned. When it is ambiguous, the earlier one.
pub fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let days_since_monday = u64::from(now.weekday().num_days_from_monday());
    let monday = now
        .date_naive()
        .checked_sub_days(Days::new(days_since_monday))
        .unwrap_or_else(|| now.date_naive());

    let midnight = monday.and_time(NaiveTime::MIN);
    resolve_local(&tz, midnight).unwrap_or_else(|| now.clone())
}

/// Map a local wall-clock time to an instant, stepping past DST gaps
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    let day = local.date();
    let mut candidate = local;

    // Gaps are at most a couple of hours; probe minute by minute within the day
    while candidate.date() == day {
        if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
            return Some(resolved);
        }
        candidate += Duration::minutes(1);
    }
    None
}
