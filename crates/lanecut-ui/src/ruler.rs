//! The timeline ruler widget: ticks, lanes, and draggable track blocks.

use egui::{self, Color32, Pos2, Rect, Rounding, Sense, Stroke, Vec2};
use tracing::trace;

use lanecut_core::TimelineConfig;
use lanecut_timeline::{
    ItemId, TickPlanner, TimeScale, TimelineModel, TrackLayoutEngine,
};

use crate::anim::Tween;
use crate::drag::{DragOutcome, LaneGeometry, TrackDragController};
use crate::resources::ImageStore;
use crate::theme::Theme;

/// Ephemeral view state owned by the ruler.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub zoom: f32,
    pub scroll_x: f32,
    /// Lane highlighted while a vertical drag hovers it. Advisory only.
    pub target_lane: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TweenKind {
    /// Item returning to its pre-drag position; no model change.
    SnapBack,
    /// Dragged item settling onto its new lane.
    DraggedToLane,
    /// Displaced occupant moving to the dragged item's origin lane; commits
    /// the swap keyed by `dragged` on completion.
    SwapOccupant { dragged: ItemId },
}

/// A y-axis transition in flight for one item.
struct ItemTween {
    id: ItemId,
    tween: Tween,
    kind: TweenKind,
}

/// What one track block draws and hit-tests against, in content coordinates
/// (x unscrolled, y from the widget top).
struct ItemView {
    id: ItemId,
    lane: usize,
    rect: Rect,
    content: ItemContent,
}

enum ItemContent {
    Text(String),
    Image(String),
}

/// Composition root: wires TimeScale, TickPlanner, the layout engine, and one
/// drag controller per gesture; owns zoom/scroll state.
pub struct TimelineRuler {
    cfg: TimelineConfig,
    scale: TimeScale,
    planner: TickPlanner,
    engine: TrackLayoutEngine,
    view: ViewState,
    drag: Option<TrackDragController>,
    tweens: Vec<ItemTween>,
    images: ImageStore,
    display_width: f32,
    display_height: f32,
}

impl TimelineRuler {
    pub fn new(
        nominal_duration: f64,
        display_width: f32,
        display_height: f32,
        model: TimelineModel,
        cfg: TimelineConfig,
    ) -> Self {
        let scale = TimeScale::new(display_width, nominal_duration, &cfg);
        let planner = TickPlanner::new(&cfg);
        let mut images = ImageStore::new();
        for item in &model.image_items {
            images.request(&item.source.url);
        }
        let view = ViewState {
            zoom: cfg.min_zoom,
            scroll_x: 0.0,
            target_lane: None,
        };
        Self {
            engine: TrackLayoutEngine::new(model, &cfg),
            cfg,
            scale,
            planner,
            view,
            drag: None,
            tweens: Vec::new(),
            images,
            display_width,
            display_height,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn engine(&self) -> &TrackLayoutEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TrackLayoutEngine {
        &mut self.engine
    }

    fn lane_geometry(&self) -> LaneGeometry {
        let total = self.engine.model().total_lanes();
        LaneGeometry {
            top: self.cfg.track_start_y(self.display_height, total),
            spacing: self.cfg.lane_spacing,
            count: total,
        }
    }

    /// Draw the timeline and process one frame of input.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(
            Vec2::new(self.display_width, self.display_height),
            Sense::click_and_drag(),
        );
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);

        self.images.poll(ui.ctx());
        if response.hovered() {
            self.handle_wheel(ui);
        }
        self.advance_tweens(ui);

        let lanes = self.lane_geometry();
        let zoom = self.view.zoom;
        let views = self.item_views(lanes);

        // ── Background + ruler ─────────────────────────────────
        painter.rect_filled(rect, 0.0, Theme::bg());
        self.draw_ruler(&painter, rect);

        // ── Lane strips ────────────────────────────────────────
        let content_width = self.scale.scaled_width(zoom).max(self.display_width);
        for lane in 0..lanes.count {
            let lane_rect = Rect::from_min_size(
                Pos2::new(rect.left() - self.view.scroll_x, rect.top() + lanes.lane_y(lane)),
                Vec2::new(content_width, self.cfg.track_height),
            );
            painter.rect_filled(lane_rect, 0.0, Theme::lane_bg());
            painter.rect_stroke(lane_rect, 0.0, Stroke::new(Theme::STROKE, Theme::border()));
        }

        // ── Target-lane indicator ──────────────────────────────
        if let Some(lane) = self.view.target_lane {
            let y = rect.top() + lanes.lane_y(lane) + self.cfg.track_height;
            painter.line_segment(
                [
                    Pos2::new(rect.left() - self.view.scroll_x, y),
                    Pos2::new(rect.left() - self.view.scroll_x + content_width, y),
                ],
                Stroke::new(Theme::INDICATOR_STROKE, Theme::indicator()),
            );
        }

        // ── Track blocks, dragged item on top ──────────────────
        let dragged_id = self.drag.as_ref().map(|d| d.id());
        for view in views.iter().filter(|v| Some(v.id) != dragged_id) {
            self.draw_item(&painter, rect, view, dragged_id);
        }
        if let Some(view) = views.iter().find(|v| Some(v.id) == dragged_id) {
            self.draw_item(&painter, rect, view, dragged_id);
        }

        // ── Pointer input ──────────────────────────────────────
        self.handle_pointer(&response, rect, lanes, zoom, &views);

        if !self.tweens.is_empty() || self.drag.is_some() {
            ui.ctx().request_repaint();
        }
    }

    /// Ctrl/Cmd-wheel zooms; a plain wheel scrolls horizontally.
    fn handle_wheel(&mut self, ui: &egui::Ui) {
        let (scroll, modifiers) = ui.input(|i| (i.raw_scroll_delta, i.modifiers));
        if scroll == Vec2::ZERO {
            return;
        }

        if modifiers.command || modifiers.ctrl {
            // egui's scroll-up is +y; wheel conventions put zoom-in at
            // negative delta.
            match self.scale.zoom_for_wheel(self.view.zoom, -scroll.y) {
                Some(zoom) => self.view.zoom = zoom,
                None => trace!(zoom = self.view.zoom, "zoom request out of range"),
            }
        } else {
            self.view.scroll_x -= scroll.x + scroll.y;
        }

        let max_scroll = (self.scale.scaled_width(self.view.zoom) - self.display_width).max(0.0);
        self.view.scroll_x = self.view.scroll_x.clamp(0.0, max_scroll);
    }

    /// Advance in-flight transitions; completed occupant transitions commit
    /// their lane swap.
    fn advance_tweens(&mut self, ui: &egui::Ui) {
        if self.tweens.is_empty() {
            return;
        }
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        for entry in &mut self.tweens {
            entry.tween.tick(dt);
        }
        let mut commits = Vec::new();
        self.tweens.retain(|entry| {
            if entry.tween.finished() {
                if let TweenKind::SwapOccupant { dragged } = entry.kind {
                    commits.push(dragged);
                }
                false
            } else {
                true
            }
        });
        for dragged in commits {
            self.engine.complete_relane(dragged);
        }
    }

    /// Current content-space rect for every item, with drag and tween
    /// overrides applied.
    fn item_views(&self, lanes: LaneGeometry) -> Vec<ItemView> {
        let zoom = self.view.zoom;
        let model = self.engine.model();
        let mut views = Vec::with_capacity(model.total_lanes());

        let mut push = |id: ItemId, lane: usize, start: f64, end: f64, content: ItemContent| {
            let mut pos = Pos2::new(
                self.scale.time_to_pixel(start, zoom),
                lanes.lane_y(lane),
            );
            if let Some(drag) = self.drag.as_ref().filter(|d| d.id() == id) {
                pos = drag.pos();
            } else if let Some(entry) = self.tweens.iter().find(|t| t.id == id) {
                pos.y = entry.tween.value();
            }
            let width = self.scale.time_to_pixel(end, zoom) - self.scale.time_to_pixel(start, zoom);
            views.push(ItemView {
                id,
                lane,
                rect: Rect::from_min_size(pos, Vec2::new(width, self.cfg.track_height)),
                content,
            });
        };

        for item in &model.text_items {
            push(
                item.id,
                item.lane,
                item.start_time,
                item.end_time,
                ItemContent::Text(item.text.clone()),
            );
        }
        for item in &model.image_items {
            push(
                item.id,
                item.lane,
                item.start_time,
                item.end_time,
                ItemContent::Image(item.source.url.clone()),
            );
        }
        views
    }

    fn draw_ruler(&self, painter: &egui::Painter, rect: Rect) {
        painter.line_segment(
            [rect.left_top(), rect.right_top()],
            Stroke::new(Theme::STROKE, Theme::ruler_border()),
        );

        for tick in self.planner.plan(&self.scale, self.view.zoom) {
            let x = rect.left() + tick.x - self.view.scroll_x;
            if x < rect.left() - 1.0 || x > rect.right() {
                continue;
            }
            painter.line_segment(
                [
                    Pos2::new(x, rect.top()),
                    Pos2::new(x, rect.top() + self.cfg.tick_length),
                ],
                Stroke::new(Theme::STROKE, Theme::main_tick()),
            );
            painter.text(
                Pos2::new(x + 4.0, rect.top() + 5.0),
                egui::Align2::LEFT_TOP,
                &tick.label,
                egui::FontId::monospace(Theme::FONT_TICK),
                Theme::tick_text(),
            );
        }
    }

    fn draw_item(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        view: &ItemView,
        dragged_id: Option<ItemId>,
    ) {
        let block = Rect::from_min_size(
            Pos2::new(
                rect.left() + view.rect.left() - self.view.scroll_x,
                rect.top() + view.rect.top(),
            ),
            view.rect.size(),
        );
        if block.right() < rect.left() || block.left() > rect.right() {
            return;
        }

        let active =
            dragged_id == Some(view.id) || self.view.target_lane == Some(view.lane);
        let fill = if active {
            Theme::item_active()
        } else {
            Theme::item_bg()
        };
        painter.rect_filled(block, Rounding::same(Theme::RADIUS), fill);
        painter.rect_stroke(
            block,
            Rounding::same(Theme::RADIUS),
            Stroke::new(Theme::STROKE, Theme::border()),
        );

        match &view.content {
            ItemContent::Text(text) => {
                let clipped = painter.with_clip_rect(block.shrink2(Vec2::new(
                    Theme::ITEM_PADDING,
                    0.0,
                )));
                clipped.text(
                    Pos2::new(block.left() + Theme::ITEM_PADDING, block.center().y),
                    egui::Align2::LEFT_CENTER,
                    text,
                    egui::FontId::proportional(Theme::FONT_ITEM),
                    Theme::item_text(),
                );
            }
            ItemContent::Image(url) => {
                if let Some(texture) = self.images.texture(url) {
                    let inset = Rect::from_min_max(
                        Pos2::new(block.left() + Theme::ITEM_PADDING, block.top() + 2.0),
                        Pos2::new(block.right() - Theme::ITEM_PADDING, block.bottom() - 2.0),
                    );
                    painter.image(
                        texture.id(),
                        inset,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            }
        }
    }

    fn handle_pointer(
        &mut self,
        response: &egui::Response,
        rect: Rect,
        lanes: LaneGeometry,
        zoom: f32,
        views: &[ItemView],
    ) {
        let to_content = |pos: Pos2| {
            Pos2::new(pos.x - rect.left() + self.view.scroll_x, pos.y - rect.top())
        };

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let content = to_content(pos);
                if let Some(view) = views.iter().rev().find(|v| v.rect.contains(content)) {
                    // A fresh drag invalidates any transition still running
                    // for this item.
                    self.tweens.retain(|t| t.id != view.id);
                    self.engine.cancel_relane(view.id);
                    self.drag = Some(TrackDragController::new(
                        view.id,
                        content,
                        view.rect.left_top(),
                        view.rect.width(),
                        self.scale.max_item_x(zoom),
                        view.lane,
                        lanes,
                        &self.cfg,
                    ));
                }
            }
        } else if response.dragged() {
            if let (Some(drag), Some(pos)) =
                (self.drag.as_mut(), response.interact_pointer_pos())
            {
                let content =
                    Pos2::new(pos.x - rect.left() + self.view.scroll_x, pos.y - rect.top());
                let update = drag.update(content);
                self.view.target_lane = update.hover_lane;
            }
        }

        if response.drag_stopped() {
            if let Some(drag) = self.drag.take() {
                match drag.release(&self.scale, zoom) {
                    DragOutcome::Retime { id, new_start } => {
                        self.engine.retime(id, new_start);
                    }
                    DragOutcome::Relane { id, new_lane } => {
                        match self.engine.begin_relane(id, new_lane) {
                            Some(anim) => {
                                self.tweens.push(ItemTween {
                                    id: anim.occupant,
                                    tween: Tween::new(
                                        lanes.lane_y(new_lane),
                                        lanes.lane_y(anim.occupant_target_lane),
                                        anim.duration,
                                    ),
                                    kind: TweenKind::SwapOccupant { dragged: id },
                                });
                                self.tweens.push(ItemTween {
                                    id,
                                    tween: Tween::new(
                                        drag.pos().y,
                                        lanes.lane_y(new_lane),
                                        anim.duration,
                                    ),
                                    kind: TweenKind::DraggedToLane,
                                });
                            }
                            // Empty or invalid lane: the drop is a no-op and
                            // the item animates home.
                            None => self.tweens.push(ItemTween {
                                id,
                                tween: Tween::new(
                                    drag.pos().y,
                                    lanes.lane_y(drag.origin_lane()),
                                    self.cfg.swap_anim_duration,
                                ),
                                kind: TweenKind::SnapBack,
                            }),
                        }
                    }
                    DragOutcome::SnapBack => {
                        self.tweens.push(ItemTween {
                            id: drag.id(),
                            tween: Tween::new(
                                drag.pos().y,
                                drag.origin().y,
                                self.cfg.swap_anim_duration,
                            ),
                            kind: TweenKind::SnapBack,
                        });
                    }
                    DragOutcome::Released => {}
                }
                self.view.target_lane = None;
            }
        }
    }
}
