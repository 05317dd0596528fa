//! Retime and lane-swap operations over the timeline model.

use smallvec::SmallVec;
use tracing::debug;

use lanecut_core::TimelineConfig;

use crate::item::ItemId;
use crate::model::TimelineModel;

/// Animation request returned by [`TrackLayoutEngine::begin_relane`].
///
/// The display layer animates the occupant to the target lane's position and
/// calls [`TrackLayoutEngine::complete_relane`] with the *dragged* item's id
/// when the transition finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapAnimation {
    pub occupant: ItemId,
    /// Lane the occupant moves into (the dragged item's origin lane).
    pub occupant_target_lane: usize,
    /// Transition duration in seconds.
    pub duration: f32,
}

/// A lane swap that has been requested but not yet committed.
#[derive(Debug, Clone, Copy)]
struct PendingSwap {
    dragged: ItemId,
    occupant: ItemId,
    dragged_from: usize,
    dragged_to: usize,
}

/// Owns the [`TimelineModel`] and resolves drag intents into mutations.
///
/// All model writes happen here, from drag-end handlers or swap-completion
/// callbacks. Stale references are tolerated as silent no-ops since drags are
/// asynchronous relative to other model edits.
pub struct TrackLayoutEngine {
    model: TimelineModel,
    pending: SmallVec<[PendingSwap; 2]>,
    swap_duration: f32,
}

impl TrackLayoutEngine {
    pub fn new(model: TimelineModel, cfg: &TimelineConfig) -> Self {
        Self {
            model,
            pending: SmallVec::new(),
            swap_duration: cfg.swap_anim_duration,
        }
    }

    pub fn model(&self) -> &TimelineModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut TimelineModel {
        &mut self.model
    }

    /// Move an item to a new start time, preserving its duration.
    ///
    /// Unknown ids are ignored: the item may have been removed while the drag
    /// was in flight.
    pub fn retime(&mut self, id: ItemId, new_start: f64) {
        match self.model.get_mut(id) {
            Some(item) => {
                item.retime(new_start);
                debug!(%id, new_start, "retimed item");
            }
            None => debug!(%id, "retime target no longer exists"),
        }
    }

    /// Start a lane swap between `id` and whatever occupies `new_lane`.
    ///
    /// Returns the occupant's animation request, or `None` when the drop is a
    /// no-op: the dragged item is gone, the lane is out of range or empty
    /// (moving into an unoccupied lane is deliberately unsupported), or the
    /// item was dropped on its own lane.
    pub fn begin_relane(&mut self, id: ItemId, new_lane: usize) -> Option<SwapAnimation> {
        if new_lane >= self.model.total_lanes() {
            return None;
        }
        let dragged_from = self.model.lane_of(id)?;
        if dragged_from == new_lane {
            return None;
        }
        let occupant_slot = self.model.occupant_of_lane(new_lane)?;
        let occupant = self.model.item(occupant_slot).id();

        // A fresh drag on an item with an uncommitted swap supersedes it.
        self.pending.retain(|p| p.dragged != id && p.occupant != id);

        self.pending.push(PendingSwap {
            dragged: id,
            occupant,
            dragged_from,
            dragged_to: new_lane,
        });
        Some(SwapAnimation {
            occupant,
            occupant_target_lane: dragged_from,
            duration: self.swap_duration,
        })
    }

    /// Commit the pending swap for `id` once its transition has finished.
    ///
    /// The swap is re-validated before applying: both items must still exist
    /// and still hold the lanes recorded when the swap began, since the
    /// completion callback can fire after intervening edits. Both lane fields
    /// are then written back-to-back with no observable intermediate state.
    pub fn complete_relane(&mut self, id: ItemId) {
        let Some(idx) = self.pending.iter().position(|p| p.dragged == id) else {
            return;
        };
        let swap = self.pending.remove(idx);

        let valid = self.model.lane_of(swap.dragged) == Some(swap.dragged_from)
            && self.model.lane_of(swap.occupant) == Some(swap.dragged_to);
        if !valid {
            debug!(dragged = %swap.dragged, occupant = %swap.occupant, "dropping stale lane swap");
            return;
        }

        if let Some(item) = self.model.get_mut(swap.dragged) {
            item.set_lane(swap.dragged_to);
        }
        if let Some(item) = self.model.get_mut(swap.occupant) {
            item.set_lane(swap.dragged_from);
        }
        debug!(
            dragged = %swap.dragged,
            occupant = %swap.occupant,
            lane = swap.dragged_to,
            "committed lane swap"
        );
    }

    /// Abandon the pending swap for `id` without touching the model.
    pub fn cancel_relane(&mut self, id: ItemId) {
        self.pending.retain(|p| p.dragged != id);
    }

    /// Whether `id` has a swap awaiting its transition.
    pub fn has_pending_swap(&self, id: ItemId) -> bool {
        self.pending.iter().any(|p| p.dragged == id)
    }
}
