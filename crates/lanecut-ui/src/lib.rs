//! LaneCut UI - egui widgets for the timeline editor
//!
//! Provides UI components:
//! - Timeline ruler with draggable track blocks
//! - Axis-disambiguating drag controller
//! - Alignment guides for free-form placed media
//! - Asynchronous image loading for overlay display

pub mod anim;
pub mod drag;
pub mod guides;
pub mod resources;
pub mod ruler;
pub mod theme;

pub use anim::Tween;
pub use drag::{DragMode, DragOutcome, DragUpdate, LaneGeometry, TrackDragController};
pub use guides::{Guide, GuideAxis, GuideFinder};
pub use resources::ImageStore;
pub use ruler::{TimelineRuler, ViewState};
pub use theme::Theme;
