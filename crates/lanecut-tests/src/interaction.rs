//! Integration tests for the drag interaction flow.
//!
//! Drives the lanecut-ui drag controller and guide finder against the
//! lanecut-timeline engine the way the ruler widget does, without a UI.

use egui::Pos2;
use lanecut_core::{Rect, TimelineConfig};
use lanecut_timeline::{TextItem, TimeScale, TimelineModel, TrackLayoutEngine};
use lanecut_ui::{DragOutcome, GuideFinder, LaneGeometry, TrackDragController};

fn cfg() -> TimelineConfig {
    TimelineConfig::default()
}

fn scale() -> TimeScale {
    TimeScale::new(1200.0, 120.0, &cfg())
}

fn lanes(count: usize) -> LaneGeometry {
    LaneGeometry {
        top: 100.0,
        spacing: cfg().lane_spacing,
        count,
    }
}

fn two_caption_engine() -> TrackLayoutEngine {
    let model = TimelineModel::new(
        vec![
            TextItem::new("first", 0.0, 10.0, 0),
            TextItem::new("second", 20.0, 40.0, 1),
        ],
        vec![],
    );
    TrackLayoutEngine::new(model, &cfg())
}

/// Drag the lane-0 caption onto lane 1 and release: after the transition
/// completes the two items have exchanged lanes, with no intermediate state
/// where both report the target lane.
#[test]
fn vertical_drag_swaps_lanes_end_to_end() {
    let scale = scale();
    let mut engine = two_caption_engine();
    let geometry = lanes(engine.model().total_lanes());
    let dragged = engine.model().text_items[0].id;
    let occupant = engine.model().text_items[1].id;

    let origin = Pos2::new(0.0, geometry.lane_y(0));
    let mut drag = TrackDragController::new(
        dragged,
        origin,
        origin,
        80.0,
        scale.max_item_x(1.0),
        0,
        geometry,
        &cfg(),
    );

    // Cross the threshold vertically, then hover lane 1.
    let update = drag.update(Pos2::new(2.0, origin.y + 8.0));
    assert_eq!(update.hover_lane, None);
    let update = drag.update(Pos2::new(2.0, geometry.lane_y(1) - 3.0));
    assert_eq!(update.hover_lane, Some(1));

    let outcome = drag.release(&scale, 1.0);
    assert_eq!(
        outcome,
        DragOutcome::Relane {
            id: dragged,
            new_lane: 1
        }
    );

    let anim = engine.begin_relane(dragged, 1).unwrap();
    assert_eq!(anim.occupant, occupant);
    assert_eq!(engine.model().lane_of(dragged), Some(0));

    engine.complete_relane(dragged);
    assert_eq!(engine.model().lane_of(dragged), Some(1));
    assert_eq!(engine.model().lane_of(occupant), Some(0));
}

/// Horizontal drag retimes the item through the engine: a caption spanning
/// 50..100s dropped at the pixel for t=30 lands at 30..80s.
#[test]
fn horizontal_drag_retimes_end_to_end() {
    let scale = scale();
    let zoom = 1.0;
    let model = TimelineModel::new(vec![TextItem::new("clip", 50.0, 100.0, 0)], vec![]);
    let mut engine = TrackLayoutEngine::new(model, &cfg());
    let geometry = lanes(1);
    let id = engine.model().text_items[0].id;

    let origin = Pos2::new(scale.time_to_pixel(50.0, zoom), geometry.lane_y(0));
    let width = scale.time_to_pixel(100.0, zoom) - origin.x;
    let mut drag = TrackDragController::new(
        id,
        origin,
        origin,
        width,
        scale.max_item_x(zoom),
        0,
        geometry,
        &cfg(),
    );

    drag.update(Pos2::new(scale.time_to_pixel(30.0, zoom), origin.y + 1.0));
    match drag.release(&scale, zoom) {
        DragOutcome::Retime { new_start, .. } => engine.retime(id, new_start),
        other => panic!("expected retime, got {other:?}"),
    }

    let item = &engine.model().text_items[0];
    assert_eq!(item.start_time, 30.0);
    assert_eq!(item.end_time, 80.0);
}

/// An abandoned drag (threshold never crossed) leaves the model untouched.
#[test]
fn undecided_drag_mutates_nothing() {
    let scale = scale();
    let engine = two_caption_engine();
    let geometry = lanes(2);
    let id = engine.model().text_items[0].id;

    let origin = Pos2::new(0.0, geometry.lane_y(0));
    let mut drag =
        TrackDragController::new(id, origin, origin, 80.0, 1000.0, 0, geometry, &cfg());
    drag.update(Pos2::new(3.0, origin.y + 3.0));
    assert_eq!(drag.release(&scale, 1.0), DragOutcome::Released);
    assert_eq!(engine.model().text_items[0].lane, 0);
    assert_eq!(engine.model().text_items[0].start_time, 0.0);
}

/// Guide finding is independent of the timeline: a free-placed rect snaps to
/// a sibling edge and the caller sees the corrected position.
#[test]
fn guide_snap_for_free_placed_media() {
    let finder = GuideFinder::from_config(&cfg());
    let frame = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let mut moving = Rect::new(98.0, 50.0, 100.0, 50.0);
    let sibling = Rect::new(100.0, 200.0, 100.0, 50.0);

    let guides = finder.find_guides(&mut moving, &[sibling], frame);
    assert!(!guides.is_empty());
    assert_eq!(moving.x, 100.0);
}
