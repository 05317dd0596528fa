//! Light editor theme for the timeline surface.

use egui::Color32;

/// Central palette and styling constants.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_TICK: f32 = 11.0; // ruler labels
    pub const FONT_ITEM: f32 = 14.0; // caption text on blocks

    // ── Layout ─────────────────────────────────────────────────
    pub const RADIUS: f32 = 4.0; // track block corners
    pub const RADIUS_SM: f32 = 2.0; // inset image corners
    pub const STROKE: f32 = 1.0;
    pub const INDICATOR_STROKE: f32 = 2.0;
    pub const ITEM_PADDING: f32 = 5.0; // inset for text/images inside a block

    // ── Surface ────────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::WHITE
    }
    /// Lane background strip.
    pub const fn lane_bg() -> Color32 {
        Color32::from_rgb(250, 250, 250)
    }

    // ── Track blocks ───────────────────────────────────────────
    pub const fn item_bg() -> Color32 {
        Color32::from_rgb(240, 240, 240)
    }
    /// Block fill while dragging or sitting in the targeted lane.
    pub const fn item_active() -> Color32 {
        Color32::from_rgb(230, 230, 230)
    }
    pub const fn border() -> Color32 {
        Color32::from_rgb(224, 224, 224)
    }
    pub const fn item_text() -> Color32 {
        Color32::from_rgb(51, 51, 51)
    }

    // ── Ruler ──────────────────────────────────────────────────
    pub const fn main_tick() -> Color32 {
        Color32::from_rgba_premultiplied(41, 41, 41, 204) // #333 @ 0.8
    }
    pub const fn tick_text() -> Color32 {
        Color32::from_rgba_premultiplied(87, 87, 87, 217) // #666 @ 0.85
    }
    pub const fn ruler_border() -> Color32 {
        Color32::from_rgb(232, 232, 232)
    }

    // ── Accents ────────────────────────────────────────────────
    /// Target-lane indicator line.
    pub const fn indicator() -> Color32 {
        Color32::from_rgb(24, 144, 255)
    }
    /// Alignment guide lines.
    pub const fn guide() -> Color32 {
        Color32::from_rgb(0, 150, 255)
    }
}
