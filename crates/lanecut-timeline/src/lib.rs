//! LaneCut Timeline - Timeline data model and layout engine
//!
//! Implements the timeline structure for the caption/overlay editor:
//! - Timed items (text captions, image overlays) assigned to lanes
//! - Time <-> pixel mapping under zoom (TimeScale)
//! - Ruler tick planning (TickPlanner)
//! - Retime and lane-swap operations (TrackLayoutEngine)

pub mod item;
pub mod layout;
pub mod model;
pub mod scale;
pub mod ticks;

pub use item::{ImageItem, ImageRef, ItemId, ItemKind, LaneItem, TextItem};
pub use layout::{SwapAnimation, TrackLayoutEngine};
pub use model::{Slot, TimelineModel};
pub use scale::TimeScale;
pub use ticks::{Tick, TickPlanner, Ticks};
