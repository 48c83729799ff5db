//! Overlap layout for the day timeline.
//!
//! Events are sorted by start time, grouped into clusters of overlapping
//! events, and each cluster divides the available width into equal columns.
//! Every pass recomputes every frame; nothing is retained between calls.
//!
//! The default [`LayoutStrategy::Reference`] clustering is greedy: an event
//! joins the current cluster when it overlaps the cluster's longest member or
//! its most recent member. It does not check the other members, so a cluster
//! can be sealed while one of its middle members still overlaps the next
//! event, and those two frames may then share horizontal space. Layouts
//! rendered by earlier releases depend on this grouping.
//! [`LayoutStrategy::Packed`] groups by connectivity instead and never
//! produces colliding frames.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::EventDescriptor;
use crate::models::layout::{Frame, LayoutAttributes};
use crate::models::timeline::{LayoutStrategy, TimelineConfig};
use crate::services::time_axis::TimeAxisMapper;

/// Column assigned to one event within its cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSlot {
    pub column: usize,
    pub columns: usize,
}

/// Assigns frames to events so that overlapping events sit side by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapLayoutEngine {
    strategy: LayoutStrategy,
}

impl OverlapLayoutEngine {
    pub fn new(strategy: LayoutStrategy) -> Self {
        Self { strategy }
    }

    /// Engine using the strategy selected in `config`.
    pub fn for_config(config: &TimelineConfig) -> Self {
        Self::new(config.strategy)
    }

    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    /// Write a frame into every element of `events`.
    ///
    /// Infallible: empty input is a no-op, and inverted or empty intervals
    /// produce zero or negative heights rather than errors.
    pub fn layout<P>(
        &self,
        events: &mut [LayoutAttributes<P>],
        reference_day: NaiveDate,
        config: TimelineConfig,
    ) {
        if events.is_empty() {
            return;
        }

        let mapper = TimeAxisMapper::new(reference_day, config);
        let order = start_order(events);
        let slots = self.slots_in_order(events, &order);

        let available_width = config.available_width();
        for (&index, slot) in order.iter().zip(&slots) {
            let attributes = &mut events[index];
            let start_y = mapper.time_to_y(attributes.descriptor.start);
            let end_y = mapper.time_to_y(attributes.descriptor.end);

            let columns = slot.columns as f32;
            attributes.frame = Frame {
                x: config.left_inset + slot.column as f32 / columns * available_width,
                y: start_y,
                width: available_width / columns,
                height: end_y - start_y,
            };
        }

        log::debug!(
            "Laid out {} events for {} ({} strategy)",
            events.len(),
            reference_day,
            self.strategy.as_str()
        );
    }

    /// Clusters as lists of input indices, each in the order members joined.
    pub fn clusters<P>(&self, events: &[LayoutAttributes<P>]) -> Vec<Vec<usize>> {
        let order = start_order(events);
        self.cluster_ranges(events, &order)
            .into_iter()
            .map(|range| order[range].to_vec())
            .collect()
    }

    /// Column assignment for each event, indexed like `events`.
    pub fn column_slots<P>(&self, events: &[LayoutAttributes<P>]) -> Vec<ColumnSlot> {
        let order = start_order(events);
        let slots = self.slots_in_order(events, &order);

        let mut by_input = vec![ColumnSlot::default(); events.len()];
        for (&index, slot) in order.iter().zip(slots) {
            by_input[index] = slot;
        }
        by_input
    }

    fn cluster_ranges<P>(&self, events: &[LayoutAttributes<P>], order: &[usize]) -> Vec<Range<usize>> {
        let descriptor = move |pos: usize| events[order[pos]].descriptor.as_ref();
        match self.strategy {
            LayoutStrategy::Reference => greedy_clusters(order.len(), descriptor),
            LayoutStrategy::Packed => connected_clusters(order.len(), descriptor),
        }
    }

    /// Slots aligned with `order`.
    fn slots_in_order<P>(&self, events: &[LayoutAttributes<P>], order: &[usize]) -> Vec<ColumnSlot> {
        let clusters = self.cluster_ranges(events, order);
        let mut slots = Vec::with_capacity(order.len());

        for range in clusters {
            log::trace!("Cluster of {} events at sorted position {}", range.len(), range.start);
            match self.strategy {
                LayoutStrategy::Reference => {
                    let columns = range.len();
                    slots.extend((0..columns).map(|column| ColumnSlot { column, columns }));
                }
                LayoutStrategy::Packed => {
                    let members = order[range]
                        .iter()
                        .map(|&index| events[index].descriptor.as_ref());
                    slots.extend(partition_columns(members));
                }
            }
        }

        slots
    }
}

/// Input indices sorted by start time. The sort is stable, so events that
/// start together keep their input order.
fn start_order<P>(events: &[LayoutAttributes<P>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&index| events[index].descriptor.start);
    order
}

/// Greedy clustering over sorted positions `0..len`.
///
/// An event joins the current cluster when it overlaps either the longest
/// member seen so far (earliest wins on ties) or the last member added.
fn greedy_clusters<'a, P: 'a>(
    len: usize,
    descriptor: impl Fn(usize) -> &'a EventDescriptor<P>,
) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    if len == 0 {
        return clusters;
    }

    let mut cluster_start = 0;
    let mut longest = 0;
    for pos in 1..len {
        let event = descriptor(pos);
        let joins = event.overlaps(descriptor(longest)) || event.overlaps(descriptor(pos - 1));

        if joins {
            if event.duration() > descriptor(longest).duration() {
                longest = pos;
            }
        } else {
            clusters.push(cluster_start..pos);
            cluster_start = pos;
            longest = pos;
        }
    }
    clusters.push(cluster_start..len);

    clusters
}

/// Clusters of transitively overlapping events over sorted positions.
fn connected_clusters<'a, P: 'a>(
    len: usize,
    descriptor: impl Fn(usize) -> &'a EventDescriptor<P>,
) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    if len == 0 {
        return clusters;
    }

    let mut cluster_start = 0;
    let mut max_end = descriptor(0).end;
    for pos in 1..len {
        let event = descriptor(pos);
        if event.start < max_end {
            max_end = max_end.max(event.end);
        } else {
            clusters.push(cluster_start..pos);
            cluster_start = pos;
            max_end = event.end;
        }
    }
    clusters.push(cluster_start..len);

    clusters
}

/// Interval partitioning of one cluster, members given in start order.
///
/// A column becomes free once its event has ended; the lowest free column is
/// reused before a new one is opened. Every member gets the cluster's final
/// column count.
fn partition_columns<'a, P: 'a>(
    members: impl Iterator<Item = &'a EventDescriptor<P>>,
) -> Vec<ColumnSlot> {
    let mut active: BinaryHeap<Reverse<(NaiveDateTime, usize)>> = BinaryHeap::new();
    let mut free: BinaryHeap<Reverse<usize>> = BinaryHeap::new();
    let mut assigned = Vec::new();
    let mut opened = 0;

    for event in members {
        while let Some(&Reverse((end, column))) = active.peek() {
            if end > event.start {
                break;
            }
            active.pop();
            free.push(Reverse(column));
        }

        let column = match free.pop() {
            Some(Reverse(column)) => column,
            None => {
                opened += 1;
                opened - 1
            }
        };
        active.push(Reverse((event.end.max(event.start), column)));
        assigned.push(column);
    }

    assigned
        .into_iter()
        .map(|column| ColumnSlot {
            column,
            columns: opened,
        })
        .collect()
}
