//! Integration tests for the timeline subsystem.
//!
//! Exercises cross-crate interactions between lanecut-core and
//! lanecut-timeline: scale math, tick planning, and the layout engine.

use lanecut_core::TimelineConfig;
use lanecut_timeline::{
    ImageItem, ImageRef, TextItem, TickPlanner, TimeScale, TimelineModel, TrackLayoutEngine,
};

// ── Helpers ────────────────────────────────────────────────────

fn cfg() -> TimelineConfig {
    TimelineConfig::default()
}

fn build_model() -> TimelineModel {
    TimelineModel::new(
        vec![
            TextItem::new("Opening title", 0.0, 18.0, 0),
            TextItem::new("Lower third", 25.0, 60.0, 1),
        ],
        vec![
            ImageItem::new(ImageRef::new("assets/logo.png"), 10.0, 40.0, 2),
            ImageItem::new(ImageRef::new("assets/badge.png"), 50.0, 90.0, 3),
        ],
    )
}

fn build_engine() -> TrackLayoutEngine {
    TrackLayoutEngine::new(build_model(), &cfg())
}

// ── Scale & ticks ──────────────────────────────────────────────

#[test]
fn reference_tick_table() {
    // 120s clip, 1200px display, zoom 1: pps = 1200/144 = 8.33,
    // interval = ceil(80/8.33) = 10s.
    let scale = TimeScale::new(1200.0, 120.0, &cfg());
    let planner = TickPlanner::new(&cfg());

    assert!((scale.pixels_per_second(1.0) - 8.3333).abs() < 1e-3);
    assert_eq!(planner.main_interval(&scale, 1.0), 10.0);

    let times: Vec<f64> = planner.plan(&scale, 1.0).map(|t| t.time).collect();
    assert_eq!(times[0], 0.0);
    assert_eq!(times[1], 10.0);
    assert_eq!(*times.last().unwrap(), 140.0);
}

#[test]
fn zoom_rejection_is_idempotent() {
    let scale = TimeScale::new(1200.0, 120.0, &cfg());
    let zoom = scale.min_zoom();
    // Repeated rejected requests leave the value usable and unchanged.
    for _ in 0..5 {
        assert!(scale.zoom_for_wheel(zoom, 1.0).is_none());
    }
    // An accepted request still works afterwards.
    assert!(scale.zoom_for_wheel(zoom, -1.0).is_some());
}

#[test]
fn density_bounded_across_full_wheel_range() {
    let scale = TimeScale::new(1200.0, 120.0, &cfg());
    let c = cfg();
    let mut zoom = scale.min_zoom();
    loop {
        let pps = scale.pixels_per_second(zoom);
        assert!(pps >= c.min_pixels_per_second && pps <= c.max_pixels_per_second);
        match scale.zoom_for_wheel(zoom, -1.0) {
            Some(next) => zoom = next,
            None => break,
        }
    }
}

// ── Layout engine across variant pairings ──────────────────────

#[test]
fn swap_commits_atomically_for_all_pairings() {
    // text<->text, text<->image, image<->text, image<->image
    let pairs = [(0usize, 1usize), (1, 2), (2, 0), (2, 3)];
    for (from, to) in pairs {
        let mut engine = build_engine();
        let dragged = engine
            .model()
            .occupant_of_lane(from)
            .map(|slot| engine.model().item(slot).id())
            .unwrap();
        let occupant = engine
            .model()
            .occupant_of_lane(to)
            .map(|slot| engine.model().item(slot).id())
            .unwrap();

        engine.begin_relane(dragged, to).unwrap();
        // No intermediate state: before completion both items report their
        // original lanes, and the target lane never holds two items.
        assert_eq!(engine.model().lane_of(dragged), Some(from));
        assert_eq!(engine.model().lane_of(occupant), Some(to));

        engine.complete_relane(dragged);
        assert_eq!(engine.model().lane_of(dragged), Some(to));
        assert_eq!(engine.model().lane_of(occupant), Some(from));
    }
}

#[test]
fn swap_payloads_untouched() {
    let mut engine = build_engine();
    let dragged = engine.model().text_items[0].id;
    engine.begin_relane(dragged, 2).unwrap();
    engine.complete_relane(dragged);

    assert_eq!(engine.model().text_items[0].text, "Opening title");
    assert_eq!(
        engine.model().image_items[0].source,
        ImageRef::new("assets/logo.png")
    );
    // Times are untouched too; only lanes moved.
    assert_eq!(engine.model().text_items[0].start_time, 0.0);
    assert_eq!(engine.model().image_items[0].start_time, 10.0);
}

#[test]
fn retime_preserves_duration_through_engine() {
    let mut engine = build_engine();
    let id = engine.model().text_items[1].id;
    engine.retime(id, 30.0);
    let item = engine.model().get(id).unwrap();
    assert_eq!(item.start_time(), 30.0);
    assert_eq!(item.end_time(), 65.0);
}

#[test]
fn stale_callback_after_removal_leaves_model_untouched() {
    let mut engine = build_engine();
    let dragged = engine.model().text_items[0].id;
    let occupant = engine.model().text_items[1].id;

    engine.begin_relane(dragged, 1).unwrap();
    engine.model_mut().remove(dragged);
    engine.complete_relane(dragged);

    assert_eq!(engine.model().lane_of(occupant), Some(1));
}

#[test]
fn empty_lane_drop_is_rejected() {
    let mut engine = build_engine();
    let dragged = engine.model().text_items[0].id;
    let vacated = engine.model().image_items[1].id;
    engine.model_mut().remove(vacated);

    assert!(engine.begin_relane(dragged, 3).is_none());
    assert_eq!(engine.model().lane_of(dragged), Some(0));
}
