// Settings module
// User-editable timeline settings persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::timeline::{
    LayoutStrategy, TimelineConfig, DEFAULT_HOUR_HEIGHT, DEFAULT_LEFT_INSET,
    DEFAULT_VERTICAL_INSET,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    pub hour_height: f32,
    pub vertical_inset: f32,
    pub left_inset: f32,
    pub strategy: LayoutStrategy,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            hour_height: DEFAULT_HOUR_HEIGHT,
            vertical_inset: DEFAULT_VERTICAL_INSET,
            left_inset: DEFAULT_LEFT_INSET,
            strategy: LayoutStrategy::Reference,
        }
    }
}

impl TimelineSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(format!("Hour height must be positive, got {}", self.hour_height));
        }

        if !self.vertical_inset.is_finite() || self.vertical_inset < 0.0 {
            return Err(format!(
                "Vertical inset cannot be negative, got {}",
                self.vertical_inset
            ));
        }

        if !self.left_inset.is_finite() || self.left_inset < 0.0 {
            return Err(format!("Left inset cannot be negative, got {}", self.left_inset));
        }

        Ok(())
    }

    /// Geometry for a container of the given width.
    pub fn to_config(&self, container_width: f32) -> TimelineConfig {
        TimelineConfig {
            hour_height: self.hour_height,
            vertical_inset: self.vertical_inset,
            left_inset: self.left_inset,
            container_width,
            strategy: self.strategy,
        }
    }
}
