//! LaneCut Core - Foundation types for the timeline editor
//!
//! This crate provides the fundamental types used throughout LaneCut:
//! - Geometric primitives (Rect, Vec2)
//! - The shared timeline configuration object
//! - Timecode formatting
//! - Error types

pub mod config;
pub mod error;
pub mod geometry;
pub mod timecode;

pub use config::TimelineConfig;
pub use error::{LanecutError, Result};
pub use geometry::{Rect, Vec2};
pub use timecode::format_timecode;
