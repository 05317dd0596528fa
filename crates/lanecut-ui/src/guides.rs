//! Alignment guides for free-form placed canvas objects.
//!
//! Independent of the timeline: callers hand in plain rectangles for the
//! moving object, its siblings, and the container frame, and get back the
//! guide lines to draw. A firing relation also *snaps* the moving rectangle
//! onto the matched feature, so the caller's node position is corrected
//! while the drag is still in progress.

use lanecut_core::{Rect, TimelineConfig};

/// Which axis a guide line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAxis {
    /// Vertical line at a fixed x.
    X,
    /// Horizontal line at a fixed y.
    Y,
}

/// A transient snap line at a matched feature position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub axis: GuideAxis,
    pub position: f32,
}

/// Computes snap guides between a moving rectangle, its siblings, and the
/// container frame.
#[derive(Debug, Clone)]
pub struct GuideFinder {
    /// Distance (px) under which a relation fires.
    pub threshold: f32,
}

impl GuideFinder {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn from_config(cfg: &TimelineConfig) -> Self {
        Self::new(cfg.guide_threshold)
    }

    /// Test all alignment relations and snap `moving` onto whatever fires.
    ///
    /// Relations are checked sibling by sibling (edges, then centers), then
    /// against the frame (centers, then edges). When several relations fire
    /// on the same axis the last one checked wins; iteration order over
    /// `siblings` makes the result deterministic.
    pub fn find_guides(&self, moving: &mut Rect, siblings: &[Rect], frame: Rect) -> Vec<Guide> {
        let mut guides = Vec::new();

        for sibling in siblings {
            self.align_to_sibling(moving, *sibling, &mut guides);
        }
        self.align_to_frame(moving, frame, &mut guides);

        guides
    }

    fn fires(&self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.threshold
    }

    fn align_to_sibling(&self, moving: &mut Rect, other: Rect, guides: &mut Vec<Guide>) {
        // Left edges
        if self.fires(moving.x, other.x) {
            guides.push(Guide {
                axis: GuideAxis::X,
                position: other.x,
            });
            moving.x = other.x;
        }
        // Right edges
        if self.fires(moving.right(), other.right()) {
            guides.push(Guide {
                axis: GuideAxis::X,
                position: other.right(),
            });
            moving.x = other.right() - moving.width;
        }
        // Horizontal centers
        if self.fires(moving.center().x, other.center().x) {
            guides.push(Guide {
                axis: GuideAxis::X,
                position: other.center().x,
            });
            moving.x = other.center().x - moving.width / 2.0;
        }
        // Top edges
        if self.fires(moving.y, other.y) {
            guides.push(Guide {
                axis: GuideAxis::Y,
                position: other.y,
            });
            moving.y = other.y;
        }
        // Bottom edges
        if self.fires(moving.bottom(), other.bottom()) {
            guides.push(Guide {
                axis: GuideAxis::Y,
                position: other.bottom(),
            });
            moving.y = other.bottom() - moving.height;
        }
        // Vertical centers
        if self.fires(moving.center().y, other.center().y) {
            guides.push(Guide {
                axis: GuideAxis::Y,
                position: other.center().y,
            });
            moving.y = other.center().y - moving.height / 2.0;
        }
    }

    fn align_to_frame(&self, moving: &mut Rect, frame: Rect, guides: &mut Vec<Guide>) {
        let center = frame.center();

        if self.fires(moving.center().x, center.x) {
            guides.push(Guide {
                axis: GuideAxis::X,
                position: center.x,
            });
            moving.x = center.x - moving.width / 2.0;
        }
        if self.fires(moving.center().y, center.y) {
            guides.push(Guide {
                axis: GuideAxis::Y,
                position: center.y,
            });
            moving.y = center.y - moving.height / 2.0;
        }
        if self.fires(moving.x, frame.x) {
            guides.push(Guide {
                axis: GuideAxis::X,
                position: frame.x,
            });
            moving.x = frame.x;
        }
        if self.fires(moving.right(), frame.right()) {
            guides.push(Guide {
                axis: GuideAxis::X,
                position: frame.right(),
            });
            moving.x = frame.right() - moving.width;
        }
        if self.fires(moving.y, frame.y) {
            guides.push(Guide {
                axis: GuideAxis::Y,
                position: frame.y,
            });
            moving.y = frame.y;
        }
        if self.fires(moving.bottom(), frame.bottom()) {
            guides.push(Guide {
                axis: GuideAxis::Y,
                position: frame.bottom(),
            });
            moving.y = frame.bottom() - moving.height;
        }
    }
}

impl Default for GuideFinder {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    #[test]
    fn test_left_edge_guide_snaps_x() {
        let finder = GuideFinder::new(10.0);
        let mut moving = Rect::new(98.0, 50.0, 100.0, 50.0);
        let sibling = Rect::new(100.0, 200.0, 100.0, 50.0);

        let guides = finder.find_guides(&mut moving, &[sibling], frame());

        assert!(guides.contains(&Guide {
            axis: GuideAxis::X,
            position: 100.0
        }));
        assert_eq!(moving.x, 100.0);
    }

    #[test]
    fn test_no_guide_outside_threshold() {
        let finder = GuideFinder::new(10.0);
        let mut moving = Rect::new(400.0, 400.0, 50.0, 50.0);
        let sibling = Rect::new(100.0, 200.0, 100.0, 50.0);

        let guides = finder.find_guides(&mut moving, &[sibling], frame());
        assert!(guides.is_empty());
        assert_eq!(moving.x, 400.0);
    }

    #[test]
    fn test_both_axes_can_fire_together() {
        let finder = GuideFinder::new(10.0);
        let mut moving = Rect::new(97.0, 203.0, 100.0, 50.0);
        let sibling = Rect::new(100.0, 200.0, 100.0, 50.0);

        let guides = finder.find_guides(&mut moving, &[sibling], frame());
        assert_eq!(moving.x, 100.0);
        assert_eq!(moving.y, 200.0);
        assert!(guides.iter().any(|g| g.axis == GuideAxis::X));
        assert!(guides.iter().any(|g| g.axis == GuideAxis::Y));
    }

    #[test]
    fn test_frame_center_alignment() {
        let finder = GuideFinder::new(10.0);
        // Center at 958, 8px off the 960 frame center.
        let mut moving = Rect::new(908.0, 100.0, 100.0, 50.0);

        let guides = finder.find_guides(&mut moving, &[], frame());
        assert!(guides.contains(&Guide {
            axis: GuideAxis::X,
            position: 960.0
        }));
        assert_eq!(moving.center().x, 960.0);
    }

    #[test]
    fn test_frame_edge_alignment() {
        let finder = GuideFinder::new(10.0);
        let mut moving = Rect::new(4.0, 500.0, 100.0, 50.0);

        finder.find_guides(&mut moving, &[], frame());
        assert_eq!(moving.x, 0.0);
    }

    #[test]
    fn test_last_relation_wins_per_axis() {
        let finder = GuideFinder::new(10.0);
        // Left edge near sibling A's left, and also near sibling B's left.
        let mut moving = Rect::new(100.0, 500.0, 50.0, 50.0);
        let a = Rect::new(96.0, 0.0, 50.0, 50.0);
        let b = Rect::new(104.0, 0.0, 50.0, 50.0);

        let guides = finder.find_guides(&mut moving, &[a, b], frame());
        // B is checked after A; its snap is the one that sticks.
        assert_eq!(moving.x, 104.0);
        assert!(guides.len() >= 2);
    }
}
