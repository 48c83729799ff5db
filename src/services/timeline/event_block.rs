use std::sync::Arc;

use crate::models::event::EventDescriptor;
use crate::models::layout::{Frame, LayoutAttributes};
use crate::services::pool::Reusable;

/// Display element for one event on the timeline.
#[derive(Debug)]
pub struct EventBlock<P> {
    frame: Frame,
    descriptor: Option<Arc<EventDescriptor<P>>>,
    attached: bool,
}

impl<P> Default for EventBlock<P> {
    fn default() -> Self {
        Self {
            frame: Frame::default(),
            descriptor: None,
            attached: false,
        }
    }
}

impl<P> EventBlock<P> {
    /// Show `attributes` in this block.
    pub fn bind(&mut self, attributes: &LayoutAttributes<P>) {
        self.frame = attributes.frame;
        self.descriptor = Some(Arc::clone(&attributes.descriptor));
        self.attached = true;
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn descriptor(&self) -> Option<&EventDescriptor<P>> {
        self.descriptor.as_deref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl<P> Reusable for EventBlock<P> {
    fn detach(&mut self) {
        self.attached = false;
    }

    fn prepare_for_reuse(&mut self) {
        self.frame = Frame::default();
        self.descriptor = None;
    }
}
