//! Timed item types for the timeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, stable identifier for a timed item.
pub type ItemId = Uuid;

/// Opaque reference to a displayable image resource.
///
/// The timeline never loads or decodes this; display layers resolve it
/// independently and failures never touch timeline geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Which variant a timed item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Text,
    Image,
}

/// Common positional capability shared by all item variants.
///
/// Lane-swap and retime logic operate only through this trait; payloads are
/// untouched by layout operations.
pub trait LaneItem {
    fn id(&self) -> ItemId;
    fn kind(&self) -> ItemKind;
    fn lane(&self) -> usize;
    fn set_lane(&mut self, lane: usize);
    fn start_time(&self) -> f64;
    fn end_time(&self) -> f64;

    fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Move the item to a new start time, preserving its duration.
    fn retime(&mut self, new_start: f64);
}

/// A text caption block on the timeline.
///
/// Invariant: `0 <= start_time < end_time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub id: ItemId,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub lane: usize,
}

impl TextItem {
    pub fn new(text: impl Into<String>, start_time: f64, end_time: f64, lane: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            start_time,
            end_time,
            lane,
        }
    }
}

/// An image overlay block on the timeline.
///
/// Invariant: `0 <= start_time < end_time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageItem {
    pub id: ItemId,
    pub source: ImageRef,
    pub start_time: f64,
    pub end_time: f64,
    pub lane: usize,
}

impl ImageItem {
    pub fn new(source: ImageRef, start_time: f64, end_time: f64, lane: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            start_time,
            end_time,
            lane,
        }
    }
}

macro_rules! impl_lane_item {
    ($ty:ty, $kind:expr) => {
        impl LaneItem for $ty {
            fn id(&self) -> ItemId {
                self.id
            }
            fn kind(&self) -> ItemKind {
                $kind
            }
            fn lane(&self) -> usize {
                self.lane
            }
            fn set_lane(&mut self, lane: usize) {
                self.lane = lane;
            }
            fn start_time(&self) -> f64 {
                self.start_time
            }
            fn end_time(&self) -> f64 {
                self.end_time
            }
            fn retime(&mut self, new_start: f64) {
                let duration = self.end_time - self.start_time;
                self.start_time = new_start.max(0.0);
                self.end_time = self.start_time + duration;
            }
        }
    };
}

impl_lane_item!(TextItem, ItemKind::Text);
impl_lane_item!(ImageItem, ItemKind::Image);
