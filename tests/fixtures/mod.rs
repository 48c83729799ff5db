// Test fixtures - reusable test data
// Provides consistent days, configs and events across the test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use day_timeline::models::event::{EventDescriptor, EventDetails};
use day_timeline::models::layout::LayoutAttributes;
use day_timeline::models::timeline::TimelineConfig;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jan 15 2025: the reference day used throughout
    pub fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        reference_day().and_hms_opt(hour, minute, 0).unwrap()
    }

    pub fn previous_day_at(hour: u32, minute: u32) -> NaiveDateTime {
        reference_day()
            .pred_opt()
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    pub fn next_day_at(hour: u32, minute: u32) -> NaiveDateTime {
        reference_day()
            .succ_opt()
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// Timeline geometry used by the layout scenarios: 300px container, 53px
/// label column, 45px per hour, 10px inset.
pub fn config() -> TimelineConfig {
    TimelineConfig::default().with_container_width(300.0)
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> LayoutAttributes {
        let details = EventDetails::builder().title(id).build().unwrap();
        EventDescriptor::new(id, start, end, details).into()
    }

    /// Event on the reference day from `start` to `end` (hour, minute)
    pub fn today(id: &str, start: (u32, u32), end: (u32, u32)) -> LayoutAttributes {
        event(id, dates::at(start.0, start.1), dates::at(end.0, end.1))
    }

    /// A realistic working day: standup overlapping a 1:1, a lunch block,
    /// an afternoon workshop with two talks inside it.
    pub fn busy_day() -> Vec<LayoutAttributes> {
        vec![
            today("standup", (9, 0), (9, 15)),
            today("one-on-one", (9, 0), (9, 30)),
            today("lunch", (12, 0), (13, 0)),
            today("workshop", (14, 0), (17, 0)),
            today("talk-1", (14, 30), (15, 0)),
            today("talk-2", (15, 30), (16, 0)),
        ]
    }
}
