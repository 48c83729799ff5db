// Layout module
// Frames written by the overlap layout engine

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::event::{EventDescriptor, EventDetails};

/// Rectangle in the timeline container's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// True when the horizontal spans share no interior point.
    pub fn horizontally_disjoint(&self, other: &Frame) -> bool {
        self.max_x() <= other.x || other.max_x() <= self.x
    }
}

/// One event plus the frame the engine assigned to it.
///
/// The descriptor is shared with the caller and never mutated; only `frame`
/// is written during a layout pass.
#[derive(Debug, Clone)]
pub struct LayoutAttributes<P = EventDetails> {
    pub descriptor: Arc<EventDescriptor<P>>,
    pub frame: Frame,
}

impl<P> LayoutAttributes<P> {
    pub fn new(descriptor: Arc<EventDescriptor<P>>) -> Self {
        Self {
            descriptor,
            frame: Frame::default(),
        }
    }
}

impl<P> From<EventDescriptor<P>> for LayoutAttributes<P> {
    fn from(descriptor: EventDescriptor<P>) -> Self {
        Self::new(Arc::new(descriptor))
    }
}
