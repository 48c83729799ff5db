//! Presentation state for a single day's timeline.
//!
//! `Timeline` owns the layout attributes for one day, keeps one
//! [`EventBlock`] per event (recycled through a [`RecyclePool`]), and turns
//! long presses into hour/minute reports. Drawing is left to the caller,
//! which reads frames from [`Timeline::blocks`].

mod event_block;

pub use event_block::EventBlock;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::EventDetails;
use crate::models::layout::LayoutAttributes;
use crate::models::timeline::TimelineConfig;
use crate::services::layout::OverlapLayoutEngine;
use crate::services::pool::RecyclePool;
use crate::services::time_axis::TimeAxisMapper;
use crate::utils::date::{is_same_day, start_of_day};

/// Gesture phase reported alongside a press location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Receives the time under a long press.
#[cfg_attr(test, mockall::automock)]
pub trait TimelineDelegate {
    fn long_pressed_at(&mut self, hour: i32, minute: u32);
}

pub struct Timeline<P = EventDetails> {
    date: NaiveDate,
    config: TimelineConfig,
    attributes: Vec<LayoutAttributes<P>>,
    blocks: Vec<EventBlock<P>>,
    pool: RecyclePool<EventBlock<P>>,
    delegate: Option<Box<dyn TimelineDelegate>>,
}

impl<P> Timeline<P> {
    pub fn new(date: NaiveDate, config: TimelineConfig) -> Self {
        Self {
            date,
            config,
            attributes: Vec::new(),
            blocks: Vec::new(),
            pool: RecyclePool::new(),
            delegate: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    pub fn full_height(&self) -> f32 {
        self.config.full_height()
    }

    pub fn layout_attributes(&self) -> &[LayoutAttributes<P>] {
        &self.attributes
    }

    pub fn blocks(&self) -> &[EventBlock<P>] {
        &self.blocks
    }

    /// Released blocks waiting in the pool.
    pub fn pooled_blocks(&self) -> usize {
        self.pool.len()
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn TimelineDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Replace the day's events. Every frame is recomputed and the block
    /// list is rebuilt with exactly one block per event.
    pub fn set_layout_attributes(&mut self, attributes: Vec<LayoutAttributes<P>>) {
        self.attributes = attributes;
        self.prepare_blocks();
        self.relayout();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        if self.date != date {
            self.date = date;
            self.relayout();
        }
    }

    pub fn set_container_width(&mut self, width: f32) {
        self.update_config(self.config.with_container_width(width));
    }

    pub fn update_config(&mut self, config: TimelineConfig) {
        if self.config != config {
            log::debug!("Timeline config updated: {:?} -> {:?}", self.config, config);
            self.config = config;
            self.relayout();
        }
    }

    /// Report the time under `location` to the delegate.
    ///
    /// Only the start of a press is reported. Returns the reported time.
    pub fn handle_long_press(&mut self, location: (f32, f32), phase: PressPhase) -> Option<(i32, u32)> {
        if phase != PressPhase::Began {
            return None;
        }

        let (hour, minute) = self.mapper().y_to_time(location.1);
        log::debug!("Long press at y={} -> {:02}:{:02}", location.1, hour, minute);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.long_pressed_at(hour, minute);
        }
        Some((hour, minute))
    }

    /// Y of the current-time line, or `None` when `now` is not on this day.
    pub fn now_indicator_y(&self, now: NaiveDateTime) -> Option<f32> {
        is_same_day(now, start_of_day(self.date)).then(|| self.mapper().time_to_y(now))
    }

    /// Topmost event frame, used to scroll the first event into view.
    pub fn first_event_y(&self) -> Option<f32> {
        self.attributes
            .iter()
            .map(|attributes| attributes.frame.y)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Return every block to the pool before this timeline shows another day.
    pub fn prepare_for_reuse(&mut self) {
        let blocks = std::mem::take(&mut self.blocks);
        self.pool.release(blocks);
    }

    fn mapper(&self) -> TimeAxisMapper {
        TimeAxisMapper::new(self.date, self.config)
    }

    fn prepare_blocks(&mut self) {
        self.prepare_for_reuse();
        for _ in 0..self.attributes.len() {
            let block = self.pool.acquire();
            self.blocks.push(block);
        }
    }

    fn relayout(&mut self) {
        OverlapLayoutEngine::for_config(&self.config).layout(&mut self.attributes, self.date, self.config);
        for (block, attributes) in self.blocks.iter_mut().zip(&self.attributes) {
            block.bind(attributes);
        }
    }
}
