// Event module
// Read-only event descriptors consumed by the day timeline

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::utils::date::intervals_overlap;

/// A single event placed on the day timeline.
///
/// The interval is half-open, `[start, end)`, in local wall-clock time. The
/// payload is carried through layout untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor<P = EventDetails> {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> EventDescriptor<P> {
    /// Create a descriptor without validating the interval.
    ///
    /// Layout accepts inverted or empty intervals, so construction never
    /// fails. Call [`EventDescriptor::validate`] when the data source should
    /// be checked.
    ///
    /// # Examples
    /// ```
    /// use day_timeline::models::event::EventDescriptor;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = EventDescriptor::new("standup", start, end, ());
    /// assert_eq!(event.duration().num_minutes(), 60);
    /// ```
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime, payload: P) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            payload,
        }
    }

    /// Create a descriptor from zoned instants, keeping their local wall-clock time.
    pub fn from_zoned<Tz: TimeZone>(
        id: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        payload: P,
    ) -> Self {
        Self::new(id, start.naive_local(), end.naive_local(), payload)
    }

    /// Length of the interval. Negative for inverted intervals.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap test against another descriptor.
    pub fn overlaps<Q>(&self, other: &EventDescriptor<Q>) -> bool {
        intervals_overlap(self.start, self.end, other.start, other.end)
    }

    /// Check the invariants the layout engine assumes but does not enforce.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.end < self.start {
            return Err(format!(
                "Event '{}' ends ({}) before it starts ({})",
                self.id, self.end, self.start
            ));
        }

        Ok(())
    }
}

/// Display payload for events loaded from JSON or built in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventDetails {
    /// Create a builder for constructing details with optional fields
    pub fn builder() -> EventDetailsBuilder {
        EventDetailsBuilder::new()
    }

    /// Validate the colour format if present (hex `#RRGGBB` or `#RGB`)
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }
        Ok(())
    }
}

/// Builder for [`EventDetails`]
#[derive(Debug, Default)]
pub struct EventDetailsBuilder {
    details: EventDetails,
}

impl EventDetailsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.details.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.details.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.details.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.details.category = Some(category.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.details.color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<EventDetails, String> {
        self.details.validate()?;
        Ok(self.details)
    }
}
