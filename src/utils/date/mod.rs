// Date utility functions
// Calendar-day comparisons and interval helpers

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// First instant after `date`; the exclusive end of the day's interval.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1)
}

/// Where `instant` falls relative to `[start_of_day(day), end_of_day(day))`.
pub fn position_in_day(instant: NaiveDateTime, day: NaiveDate) -> Ordering {
    if instant < start_of_day(day) {
        Ordering::Less
    } else if instant >= end_of_day(day) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` share an instant.
pub fn intervals_overlap(
    s1: NaiveDateTime,
    e1: NaiveDateTime,
    s2: NaiveDateTime,
    e2: NaiveDateTime,
) -> bool {
    s1 < e2 && s2 < e1
}
