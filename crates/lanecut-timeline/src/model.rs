//! The timeline model: two insertion-ordered item collections.

use serde::{Deserialize, Serialize};

use crate::item::{ImageItem, ItemId, LaneItem, TextItem};

/// Transient handle to an item's position within the model.
///
/// Indices are positional and invalidated by any removal; resolve with
/// [`TimelineModel::locate`] and use immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Text(usize),
    Image(usize),
}

/// Owns the timed items for one display session.
///
/// Items are unordered by position but keep insertion order for deterministic
/// iteration. In steady state at most one item occupies a given lane; a
/// transient duplicate is only ever visible inside the atomic swap in
/// [`crate::layout::TrackLayoutEngine`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineModel {
    pub text_items: Vec<TextItem>,
    pub image_items: Vec<ImageItem>,
}

impl TimelineModel {
    pub fn new(text_items: Vec<TextItem>, image_items: Vec<ImageItem>) -> Self {
        Self {
            text_items,
            image_items,
        }
    }

    /// One lane per item, text lanes counted before image lanes.
    pub fn total_lanes(&self) -> usize {
        self.text_items.len() + self.image_items.len()
    }

    /// Find an item by id across both collections.
    pub fn locate(&self, id: ItemId) -> Option<Slot> {
        if let Some(i) = self.text_items.iter().position(|t| t.id == id) {
            return Some(Slot::Text(i));
        }
        self.image_items
            .iter()
            .position(|t| t.id == id)
            .map(Slot::Image)
    }

    /// Find the item currently assigned to `lane`, if any.
    pub fn occupant_of_lane(&self, lane: usize) -> Option<Slot> {
        if let Some(i) = self.text_items.iter().position(|t| t.lane == lane) {
            return Some(Slot::Text(i));
        }
        self.image_items
            .iter()
            .position(|t| t.lane == lane)
            .map(Slot::Image)
    }

    pub fn item(&self, slot: Slot) -> &dyn LaneItem {
        match slot {
            Slot::Text(i) => &self.text_items[i],
            Slot::Image(i) => &self.image_items[i],
        }
    }

    pub fn item_mut(&mut self, slot: Slot) -> &mut dyn LaneItem {
        match slot {
            Slot::Text(i) => &mut self.text_items[i],
            Slot::Image(i) => &mut self.image_items[i],
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&dyn LaneItem> {
        self.locate(id).map(|slot| self.item(slot))
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut dyn LaneItem> {
        let slot = self.locate(id)?;
        Some(self.item_mut(slot))
    }

    pub fn lane_of(&self, id: ItemId) -> Option<usize> {
        self.get(id).map(|item| item.lane())
    }

    /// Iterate all items in insertion order, text items first.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LaneItem> {
        self.text_items
            .iter()
            .map(|t| t as &dyn LaneItem)
            .chain(self.image_items.iter().map(|t| t as &dyn LaneItem))
    }

    /// Remove an item by id. Returns true if something was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.locate(id) {
            Some(Slot::Text(i)) => {
                self.text_items.remove(i);
                true
            }
            Some(Slot::Image(i)) => {
                self.image_items.remove(i);
                true
            }
            None => false,
        }
    }
}
