//! Per-item drag state machine for timeline track blocks.
//!
//! A drag starts undecided, then commits to one axis once the pointer has
//! moved far enough: horizontal drags retime the item, vertical drags move it
//! toward another lane. The commitment is irreversible for the rest of the
//! gesture.

use egui::Pos2;

use lanecut_core::TimelineConfig;
use lanecut_timeline::{ItemId, TimeScale};

/// Axis a drag gesture has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Undecided,
    Horizontal,
    Vertical,
}

/// Vertical geometry of the lane area, in content coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LaneGeometry {
    /// Top y of lane 0.
    pub top: f32,
    /// Distance between consecutive lane tops.
    pub spacing: f32,
    /// Number of lanes.
    pub count: usize,
}

impl LaneGeometry {
    pub fn lane_y(&self, lane: usize) -> f32 {
        self.top + lane as f32 * self.spacing
    }

    /// Index of the lane whose top is nearest to `y`. May be out of range.
    pub fn nearest_lane(&self, y: f32) -> i64 {
        ((y - self.top) / self.spacing).round() as i64
    }

    /// y of the last lane's top; the clamp bound for vertical drags.
    pub fn max_y(&self) -> f32 {
        self.top + self.count.saturating_sub(1) as f32 * self.spacing
    }
}

/// Constrained position plus live lane feedback for one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub pos: Pos2,
    /// Lane the pointer is hovering, when it differs from the item's own lane
    /// and is in range. Drives the lane indicator; advisory only.
    pub hover_lane: Option<usize>,
}

/// What a released drag asks of the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Horizontal drop: move the item in time, duration preserved.
    Retime { id: ItemId, new_start: f64 },
    /// Vertical drop on a different lane: request a lane swap.
    Relane { id: ItemId, new_lane: usize },
    /// Vertical drop back on the origin lane: animate home, mutate nothing.
    SnapBack,
    /// The disambiguation threshold was never crossed.
    Released,
}

/// Drag session for a single track block.
pub struct TrackDragController {
    id: ItemId,
    mode: DragMode,
    /// Pointer position at drag start.
    anchor: Pos2,
    /// Item top-left at drag start.
    origin: Pos2,
    width: f32,
    max_x: f32,
    lane: usize,
    lanes: LaneGeometry,
    threshold: f32,
    pos: Pos2,
}

impl TrackDragController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ItemId,
        anchor: Pos2,
        origin: Pos2,
        width: f32,
        max_x: f32,
        lane: usize,
        lanes: LaneGeometry,
        cfg: &TimelineConfig,
    ) -> Self {
        Self {
            id,
            mode: DragMode::Undecided,
            anchor,
            origin,
            width,
            max_x,
            lane,
            lanes,
            threshold: cfg.drag_threshold,
            pos: origin,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Current constrained item position.
    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    /// Item position before the drag began.
    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Lane the item occupied when the drag began.
    pub fn origin_lane(&self) -> usize {
        self.lane
    }

    /// Feed a pointer move; returns the constrained position and live
    /// hover-lane feedback.
    pub fn update(&mut self, pointer: Pos2) -> DragUpdate {
        let delta = pointer - self.anchor;

        if self.mode == DragMode::Undecided {
            let dx = delta.x.abs();
            let dy = delta.y.abs();
            if dx > self.threshold || dy > self.threshold {
                self.mode = if dy > dx {
                    DragMode::Vertical
                } else {
                    DragMode::Horizontal
                };
            }
        }

        let free_x = (self.origin.x + delta.x).clamp(0.0, (self.max_x - self.width).max(0.0));
        let free_y = (self.origin.y + delta.y).clamp(self.lanes.top, self.lanes.max_y());

        self.pos = match self.mode {
            DragMode::Horizontal => Pos2::new(free_x, self.origin.y),
            DragMode::Vertical => Pos2::new(self.origin.x, free_y),
            DragMode::Undecided => Pos2::new(free_x, free_y),
        };

        let hover_lane = if self.mode == DragMode::Vertical {
            let lane = self.lanes.nearest_lane(self.pos.y);
            (lane >= 0 && (lane as usize) < self.lanes.count && lane as usize != self.lane)
                .then_some(lane as usize)
        } else {
            None
        };

        DragUpdate {
            pos: self.pos,
            hover_lane,
        }
    }

    /// Resolve the gesture on pointer release.
    pub fn release(&self, scale: &TimeScale, zoom: f32) -> DragOutcome {
        match self.mode {
            DragMode::Horizontal => {
                let new_start = scale.pixel_to_time(self.pos.x, zoom).round().max(0.0);
                DragOutcome::Retime {
                    id: self.id,
                    new_start,
                }
            }
            DragMode::Vertical => {
                let lane = self
                    .lanes
                    .nearest_lane(self.pos.y)
                    .clamp(0, self.lanes.count.saturating_sub(1) as i64)
                    as usize;
                if lane == self.lane {
                    DragOutcome::SnapBack
                } else {
                    DragOutcome::Relane {
                        id: self.id,
                        new_lane: lane,
                    }
                }
            }
            DragMode::Undecided => DragOutcome::Released,
        }
    }
}
