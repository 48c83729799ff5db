//! Conversions between instants and vertical positions on the day axis.
//!
//! The axis spans hour 0 to hour 24 starting `vertical_inset` pixels below
//! the top of the container. Resolution is one minute: seconds are dropped
//! when mapping a time to a position.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::timeline::TimelineConfig;
use crate::utils::date::position_in_day;

/// Maps instants on a reference day to y coordinates and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxisMapper {
    reference_day: NaiveDate,
    config: TimelineConfig,
}

impl TimeAxisMapper {
    pub fn new(reference_day: NaiveDate, config: TimelineConfig) -> Self {
        Self {
            reference_day,
            config,
        }
    }

    pub fn reference_day(&self) -> NaiveDate {
        self.reference_day
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Vertical offset of `instant`.
    ///
    /// Instants on a later day clip to the bottom of the axis and instants
    /// on an earlier day clip to the top, so events crossing midnight are
    /// drawn only for the part that falls on the reference day.
    pub fn time_to_y(&self, instant: NaiveDateTime) -> f32 {
        match position_in_day(instant, self.reference_day) {
            Ordering::Greater => self.config.axis_bottom(),
            Ordering::Less => self.config.vertical_inset,
            Ordering::Equal => {
                let hour_height = self.config.hour_height;
                let hour_y = instant.hour() as f32 * hour_height + self.config.vertical_inset;
                let minute_y = instant.minute() as f32 * hour_height / 60.0;
                hour_y + minute_y
            }
        }
    }

    /// Hour and minute under a vertical position, for press handling.
    ///
    /// Positions outside the axis extrapolate instead of clamping: the hour
    /// is truncated toward zero and may fall outside `0..24`. The minute is
    /// quantised by rounding the hour fraction to hundredths and scaling by
    /// `59 / 0.98`, which is what earlier releases reported; a fraction that
    /// rounds up to a whole hour reports minute 60.
    pub fn y_to_time(&self, y: f32) -> (i32, u32) {
        let inset = self.config.vertical_inset as f64;
        let axis_height = (self.config.full_height() as f64) - inset * 2.0;
        let whole_hours = 24.0 * (y as f64 - inset) / axis_height;
        let hour = whole_hours.trunc();
        let fraction = (whole_hours - hour).abs();
        let fraction_rounded = (fraction * 100.0).round() / 100.0;
        let minute = fraction_rounded * 59.0 / 0.98;

        (hour as i32, minute as u32)
    }
}
