//! Time <-> pixel mapping under zoom.

use lanecut_core::TimelineConfig;

/// Pure mapping between seconds and pixels for a given zoom factor.
///
/// The ruler works against an *effective* duration, the nominal media
/// duration plus a fixed 20% trailing margin, so the last visible tick never
/// sits flush with the ruler's end. Zoom limits are owned here: the floor is
/// configured, the ceiling is derived from the pixel-density ceiling so that
/// zooming in can never produce ticks denser than
/// `max_pixels_per_second` regardless of clip duration.
#[derive(Debug, Clone)]
pub struct TimeScale {
    display_width: f32,
    nominal_duration: f64,
    min_zoom: f32,
    min_pixels_per_second: f32,
    max_pixels_per_second: f32,
    wheel_zoom_factor: f32,
}

const TRAILING_MARGIN: f64 = 1.2;

impl TimeScale {
    pub fn new(display_width: f32, nominal_duration: f64, cfg: &TimelineConfig) -> Self {
        Self {
            display_width,
            nominal_duration,
            min_zoom: cfg.min_zoom,
            min_pixels_per_second: cfg.min_pixels_per_second,
            max_pixels_per_second: cfg.max_pixels_per_second,
            wheel_zoom_factor: cfg.wheel_zoom_factor,
        }
    }

    pub fn display_width(&self) -> f32 {
        self.display_width
    }

    pub fn nominal_duration(&self) -> f64 {
        self.nominal_duration
    }

    /// Nominal duration plus the trailing ruler margin.
    pub fn effective_duration(&self) -> f64 {
        self.nominal_duration * TRAILING_MARGIN
    }

    pub fn pixels_per_second(&self, zoom: f32) -> f32 {
        (self.display_width as f64 * zoom as f64 / self.effective_duration()) as f32
    }

    pub fn time_to_pixel(&self, time: f64, zoom: f32) -> f32 {
        (time * self.pixels_per_second(zoom) as f64) as f32
    }

    pub fn pixel_to_time(&self, x: f32, zoom: f32) -> f64 {
        x as f64 / self.pixels_per_second(zoom) as f64
    }

    /// Full width of the scrollable content at this zoom.
    pub fn scaled_width(&self, zoom: f32) -> f32 {
        self.display_width * zoom
    }

    /// Pixel position of the nominal duration; the clamp bound for
    /// horizontal item drags.
    pub fn max_item_x(&self, zoom: f32) -> f32 {
        self.time_to_pixel(self.nominal_duration, zoom)
    }

    /// Time at the right edge of the visible display width.
    pub fn visible_end(&self, zoom: f32) -> f64 {
        self.pixel_to_time(self.display_width, zoom)
    }

    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    /// Derived ceiling: the zoom at which density reaches the configured
    /// maximum, rounded up to keep the full density range reachable.
    pub fn max_zoom(&self) -> f32 {
        (self.effective_duration() * self.max_pixels_per_second as f64 / self.display_width as f64)
            .ceil() as f32
    }

    /// Whether a requested zoom is within both the zoom range and the pixel
    /// density range. Requests that fail leave state untouched upstream.
    pub fn accepts_zoom(&self, zoom: f32) -> bool {
        if zoom < self.min_zoom || zoom > self.max_zoom() {
            return false;
        }
        let pps = self.pixels_per_second(zoom);
        pps >= self.min_pixels_per_second && pps <= self.max_pixels_per_second
    }

    /// Compute the zoom resulting from one wheel notch, DOM sign convention
    /// (`delta_y < 0` zooms in). Returns `None` when the request would leave
    /// the valid range; callers keep their current zoom in that case.
    pub fn zoom_for_wheel(&self, current: f32, delta_y: f32) -> Option<f32> {
        let next = if delta_y < 0.0 {
            current * self.wheel_zoom_factor
        } else {
            current / self.wheel_zoom_factor
        };
        self.accepts_zoom(next).then_some(next)
    }
}
