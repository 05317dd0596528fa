//! Ruler tick planning.

use lanecut_core::{format_timecode, TimelineConfig};

use crate::scale::TimeScale;

/// One labeled ruler marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Time in seconds.
    pub time: f64,
    /// Unscrolled pixel position at the planning zoom.
    pub x: f32,
    /// Zero-padded `HH:MM:SS` label.
    pub label: String,
}

/// Chooses the tick interval for the current zoom and yields the ticks to
/// draw.
#[derive(Debug, Clone)]
pub struct TickPlanner {
    target_tick_spacing: f32,
}

impl TickPlanner {
    pub fn new(cfg: &TimelineConfig) -> Self {
        Self {
            target_tick_spacing: cfg.target_tick_spacing,
        }
    }

    /// Whole seconds between consecutive ticks. Rounded up so ticks never
    /// render closer together than the target spacing, whatever the zoom.
    pub fn main_interval(&self, scale: &TimeScale, zoom: f32) -> f64 {
        (self.target_tick_spacing as f64 / scale.pixels_per_second(zoom) as f64)
            .ceil()
            .max(1.0)
    }

    /// Lazily yield ticks from zero through the greater of the effective
    /// duration and the visible right edge, so the viewport is always covered
    /// even when the scrollable content is narrower.
    pub fn plan(&self, scale: &TimeScale, zoom: f32) -> Ticks {
        let interval = self.main_interval(scale, zoom);
        let end = scale.effective_duration().max(scale.visible_end(zoom));
        Ticks {
            next: 0.0,
            end,
            interval,
            pixels_per_second: scale.pixels_per_second(zoom) as f64,
        }
    }
}

/// Finite tick iterator produced by [`TickPlanner::plan`].
#[derive(Debug, Clone)]
pub struct Ticks {
    next: f64,
    end: f64,
    interval: f64,
    pixels_per_second: f64,
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next > self.end {
            return None;
        }
        let time = self.next;
        self.next += self.interval;
        Some(Tick {
            time,
            x: (time * self.pixels_per_second) as f32,
            label: format_timecode(time),
        })
    }
}
