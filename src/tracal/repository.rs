//! The authoritative in-memory item collection.
//!
//! [`ItemRepository`] owns the item list, the edit cursor, and id
//! assignment. It performs no I/O: persistence is mirrored separately by
//! [`crate::store::snapshot::SnapshotStore`], invoked by the command layer
//! after each successful mutation.
//!
//! Two deliberate departures from naive list handling:
//!
//! - Ids come from a monotonically increasing counter seeded past the
//!   highest id present at hydration, so deleting the highest-id item never
//!   causes an id to be reused within a process lifetime.
//! - [`ItemRepository::items`] hands out an immutable view, never the
//!   mutable backing storage.

use crate::model::Item;

pub struct ItemRepository {
    items: Vec<Item>,
    current: Option<u64>,
    next_id: u64,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Hydration constructor, normally fed from the persisted snapshot.
    pub fn from_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|i| i.id + 1).max().unwrap_or(0);
        Self {
            items,
            current: None,
            next_id,
        }
    }

    /// The collection, in insertion order. Read-only view.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item. Cannot fail; the caller has already validated
    /// the inputs.
    pub fn add(&mut self, name: String, calories: i64) -> Item {
        let item = Item::new(self.next_id, name, calories);
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Point the edit cursor at an existing item. Returns the item, or
    /// `None` (cursor unchanged) when the id is absent.
    pub fn set_current(&mut self, id: u64) -> Option<&Item> {
        let found = self.items.iter().position(|i| i.id == id)?;
        self.current = Some(id);
        self.items.get(found)
    }

    pub fn current(&self) -> Option<&Item> {
        let id = self.current?;
        self.find_by_id(id)
    }

    /// Overwrite the item under the edit cursor, consuming the cursor.
    /// Returns a copy of the updated item, or `None` (nothing mutated)
    /// when the cursor is unset.
    pub fn update_current(&mut self, name: String, calories: i64) -> Option<Item> {
        let id = self.current?;
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.name = name;
        item.calories = calories;
        let updated = item.clone();
        self.current = None;
        Some(updated)
    }

    /// Remove by id. Returns the removed item, or `None` (collection
    /// unchanged) when the id is absent. A cursor pointing at the removed
    /// item is cleared.
    pub fn remove(&mut self, id: u64) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        if self.current == Some(id) {
            self.current = None;
        }
        Some(self.items.remove(pos))
    }

    /// Empty the collection and the cursor. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.items.clear();
        self.current = None;
    }

    /// Sum of calories over the whole collection; 0 when empty.
    /// Recomputed by a full scan on every call, never cached.
    pub fn total_calories(&self) -> i64 {
        self.items.iter().map(|i| i.calories).sum()
    }
}

impl Default for ItemRepository {
    fn default() -> Self {
        Self::new()
    }
}
