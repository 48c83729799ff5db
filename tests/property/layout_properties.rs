// Property-based tests for the overlap layout engine
// Random days of events checked against the layout invariants

use chrono::{Duration, NaiveDate, NaiveDateTime};
use day_timeline::models::event::EventDescriptor;
use day_timeline::models::layout::{Frame, LayoutAttributes};
use day_timeline::models::timeline::{LayoutStrategy, TimelineConfig};
use day_timeline::services::layout::OverlapLayoutEngine;
use proptest::prelude::*;

const EPSILON: f32 = 1e-3;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn minute_of_day(minute: u32) -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minute as i64)
}

fn build(spans: &[(u32, u32)]) -> Vec<LayoutAttributes<()>> {
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, length))| {
            EventDescriptor::new(
                format!("e{}", i),
                minute_of_day(start),
                minute_of_day(start + length),
                (),
            )
            .into()
        })
        .collect()
}

fn frames(events: &[LayoutAttributes<()>]) -> Vec<Frame> {
    events.iter().map(|e| e.frame).collect()
}

fn laid_out(spans: &[(u32, u32)], strategy: LayoutStrategy, width: f32) -> Vec<LayoutAttributes<()>> {
    let mut events = build(spans);
    let config = TimelineConfig::default()
        .with_container_width(width)
        .with_strategy(strategy);
    OverlapLayoutEngine::for_config(&config).layout(&mut events, day(), config);
    events
}

fn disjoint(a: &Frame, b: &Frame) -> bool {
    a.max_x() <= b.x + EPSILON || b.max_x() <= a.x + EPSILON
}

fn spans_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    // start minute within the day, length 0 minutes to 4 hours
    prop::collection::vec((0u32..1380, 0u32..240), 0..40)
}

fn strategy_strategy() -> impl Strategy<Value = LayoutStrategy> {
    prop_oneof![Just(LayoutStrategy::Reference), Just(LayoutStrategy::Packed)]
}

proptest! {
    /// Property: laying out the same events twice gives identical frames
    #[test]
    fn prop_layout_is_deterministic(
        spans in spans_strategy(),
        strategy in strategy_strategy(),
        width in 100.0f32..1200.0,
    ) {
        let first = laid_out(&spans, strategy, width);
        let second = laid_out(&spans, strategy, width);
        prop_assert_eq!(frames(&first), frames(&second));
    }

    /// Property: members of one cluster never share horizontal space
    #[test]
    fn prop_cluster_members_are_disjoint(
        spans in spans_strategy(),
        width in 100.0f32..1200.0,
    ) {
        let events = laid_out(&spans, LayoutStrategy::Reference, width);
        let clusters = OverlapLayoutEngine::default().clusters(&events);

        for cluster in clusters {
            for (i, &a) in cluster.iter().enumerate() {
                for &b in &cluster[i + 1..] {
                    prop_assert!(disjoint(&events[a].frame, &events[b].frame));
                }
            }
        }
    }

    /// Property: a cluster's columns tile the available width exactly
    #[test]
    fn prop_cluster_columns_cover_available_width(
        spans in spans_strategy(),
        width in 100.0f32..1200.0,
    ) {
        let events = laid_out(&spans, LayoutStrategy::Reference, width);
        let available = width - TimelineConfig::default().left_inset;

        for cluster in OverlapLayoutEngine::default().clusters(&events) {
            let total: f32 = cluster.iter().map(|&i| events[i].frame.width).sum();
            prop_assert!((total - available).abs() < EPSILON * cluster.len() as f32);

            let right_edge = cluster
                .iter()
                .map(|&i| events[i].frame.max_x())
                .fold(f32::MIN, f32::max);
            prop_assert!((right_edge - width).abs() < EPSILON);
        }
    }

    /// Property: with equal-length events the greedy clusters already
    /// separate every overlapping pair
    #[test]
    fn prop_uniform_durations_never_collide(
        starts in prop::collection::vec(0u32..1380, 0..40),
        length in 1u32..120,
    ) {
        let spans: Vec<(u32, u32)> = starts.iter().map(|&s| (s, length)).collect();
        let events = laid_out(&spans, LayoutStrategy::Reference, 400.0);

        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                if a.descriptor.overlaps(b.descriptor.as_ref()) {
                    prop_assert!(disjoint(&a.frame, &b.frame));
                }
            }
        }
    }

    /// Property: packed layout never lets overlapping events collide
    #[test]
    fn prop_packed_never_collides(spans in spans_strategy()) {
        let events = laid_out(&spans, LayoutStrategy::Packed, 400.0);

        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                if a.descriptor.overlaps(b.descriptor.as_ref()) {
                    prop_assert!(disjoint(&a.frame, &b.frame));
                }
            }
        }
    }

    /// Property: vertical span follows the time axis for same-day events
    #[test]
    fn prop_vertical_span_matches_duration(spans in spans_strategy()) {
        let events = laid_out(&spans, LayoutStrategy::Reference, 400.0);
        let config = TimelineConfig::default();

        for (event, &(start, length)) in events.iter().zip(&spans) {
            let expected_y = config.vertical_inset + start as f32 * config.hour_height / 60.0;
            prop_assert!((event.frame.y - expected_y).abs() < 0.01);

            let end = start + length;
            if end < 24 * 60 {
                let expected_height = length as f32 * config.hour_height / 60.0;
                prop_assert!((event.frame.height - expected_height).abs() < 0.01);
            } else {
                prop_assert!((event.frame.max_y() - config.axis_bottom()).abs() < 0.01);
            }
        }
    }
}
