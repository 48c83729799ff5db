// Timeline module
// Immutable geometry configuration for the day axis

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOUR_HEIGHT: f32 = 45.0;
pub const DEFAULT_VERTICAL_INSET: f32 = 10.0;
pub const DEFAULT_LEFT_INSET: f32 = 53.0;

/// How overlapping events are grouped and assigned columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Greedy clustering against the longest and most recent member, one
    /// column per member. Matches previously rendered layouts exactly.
    #[default]
    Reference,
    /// Connected clustering with interval partitioning. Columns are reused
    /// once their event has ended, so blocks are wider.
    Packed,
}

impl LayoutStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutStrategy::Reference => "reference",
            LayoutStrategy::Packed => "packed",
        }
    }
}

impl std::str::FromStr for LayoutStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(LayoutStrategy::Reference),
            "packed" => Ok(LayoutStrategy::Packed),
            other => Err(format!("Unknown layout strategy '{}'", other)),
        }
    }
}

/// Geometry of one rendered day.
///
/// Passed by value; changing any field produces a new config rather than
/// mutating one shared with a running layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    /// Vertical distance between two hour lines
    pub hour_height: f32,
    /// Margin above hour 0 and below hour 24
    pub vertical_inset: f32,
    /// Horizontal space reserved for time labels
    pub left_inset: f32,
    pub container_width: f32,
    pub strategy: LayoutStrategy,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            hour_height: DEFAULT_HOUR_HEIGHT,
            vertical_inset: DEFAULT_VERTICAL_INSET,
            left_inset: DEFAULT_LEFT_INSET,
            container_width: 0.0,
            strategy: LayoutStrategy::Reference,
        }
    }
}

impl TimelineConfig {
    pub fn with_container_width(self, container_width: f32) -> Self {
        Self {
            container_width,
            ..self
        }
    }

    pub fn with_hour_height(self, hour_height: f32) -> Self {
        Self { hour_height, ..self }
    }

    pub fn with_vertical_inset(self, vertical_inset: f32) -> Self {
        Self {
            vertical_inset,
            ..self
        }
    }

    pub fn with_left_inset(self, left_inset: f32) -> Self {
        Self { left_inset, ..self }
    }

    pub fn with_strategy(self, strategy: LayoutStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Width shared by event columns. Not clamped; a container narrower
    /// than the label inset yields a negative width.
    pub fn available_width(&self) -> f32 {
        self.container_width - self.left_inset
    }

    /// Height of the whole timeline including both insets.
    pub fn full_height(&self) -> f32 {
        self.vertical_inset * 2.0 + self.hour_height * 24.0
    }

    /// Y of the midnight line at the end of the day.
    pub fn axis_bottom(&self) -> f32 {
        self.hour_height * 24.0 + self.vertical_inset
    }
}
