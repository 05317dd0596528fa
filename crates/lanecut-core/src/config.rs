//! Shared timeline configuration.
//!
//! One immutable value passed into every component at construction. Apps can
//! deserialize overrides; components never reach for globals.

use serde::{Deserialize, Serialize};

/// Layout, zoom, and interaction constants for the timeline.
///
/// Fields omitted from a deserialized override file keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Height of an item block in pixels.
    pub track_height: f32,
    /// Vertical distance between consecutive lane tops.
    pub lane_spacing: f32,
    /// Height of the ruler strip above the lanes.
    pub ruler_height: f32,
    /// Length of a main tick line.
    pub tick_length: f32,
    /// Desired minimum pixel distance between consecutive ticks.
    pub target_tick_spacing: f32,
    /// Zoom floor.
    pub min_zoom: f32,
    /// Pixel density ceiling; zooming in stops here.
    pub max_pixels_per_second: f32,
    /// Pixel density floor; zooming out stops here.
    pub min_pixels_per_second: f32,
    /// Multiplier applied per wheel notch when zooming.
    pub wheel_zoom_factor: f32,
    /// Displacement (px) before a drag commits to an axis.
    pub drag_threshold: f32,
    /// Distance (px) at which alignment guides fire and snap.
    pub guide_threshold: f32,
    /// Duration of snap-back and lane-swap transitions, in seconds.
    pub swap_anim_duration: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            track_height: 30.0,
            lane_spacing: 40.0,
            ruler_height: 30.0,
            tick_length: 15.0,
            target_tick_spacing: 80.0,
            min_zoom: 0.33,
            max_pixels_per_second: 120.0,
            min_pixels_per_second: 1.0,
            wheel_zoom_factor: 1.1,
            drag_threshold: 5.0,
            guide_threshold: 10.0,
            swap_anim_duration: 0.08,
        }
    }
}

impl TimelineConfig {
    /// Top y of the lane area, vertically centered between the ruler and the
    /// bottom of the display.
    pub fn track_start_y(&self, display_height: f32, total_lanes: usize) -> f32 {
        let lanes_height = total_lanes as f32 * self.lane_spacing;
        let available = display_height - self.ruler_height;
        self.ruler_height + (available - lanes_height) / 2.0
    }

    /// Top y of the given lane.
    pub fn lane_y(&self, track_start_y: f32, lane: usize) -> f32 {
        track_start_y + lane as f32 * self.lane_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_area_centered() {
        let cfg = TimelineConfig::default();
        // 3 lanes of 40px in a 400px display with a 30px ruler:
        // available = 370, lanes = 120, start = 30 + 125 = 155.
        let start = cfg.track_start_y(400.0, 3);
        assert!((start - 155.0).abs() < 0.001);
        assert!((cfg.lane_y(start, 2) - 235.0).abs() < 0.001);
    }
}
