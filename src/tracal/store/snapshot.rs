use super::KeyValueStore;
use crate::error::{Result, TracalError};
use crate::model::Item;

/// Key the item snapshot lives under in the backing store.
const ITEMS_KEY: &str = "items";

/// Mirrors repository mutations into the durable store as a
/// full-collection snapshot.
///
/// Every mutation is a read-modify-write of the entire serialized
/// collection under a single fixed key. That is a deliberate
/// simplicity/consistency trade-off for a single-process, single-user
/// tool: nothing can interleave between the read and the write. Porting
/// this to a genuinely concurrent environment requires explicit mutual
/// exclusion around the snapshot cycle; none is provided here.
///
/// The mirror owns no state of its own beyond the backing store handle —
/// it is a pure translation layer between repository mutations and the
/// store's get/set/remove operations.
pub struct SnapshotStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the full snapshot. An absent key and a corrupt snapshot both
    /// hydrate as an empty collection; neither is fatal.
    pub fn load_all(&self) -> Result<Vec<Item>> {
        let raw = match self.store.get(ITEMS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Append `item` to the snapshot. A missing snapshot is treated as
    /// empty, not as an error.
    pub fn append(&self, item: &Item) -> Result<()> {
        let mut items = self.load_all()?;
        items.push(item.clone());
        self.write(&items)
    }

    /// Overwrite the snapshot entry with the same id as `item`. No-op
    /// (no rewrite) when the id is not present.
    pub fn replace(&self, item: &Item) -> Result<()> {
        let mut items = self.load_all()?;
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(entry) => *entry = item.clone(),
            None => return Ok(()),
        }
        self.write(&items)
    }

    /// Drop the entry with `id` from the snapshot and rewrite it.
    pub fn remove(&self, id: u64) -> Result<()> {
        let mut items = self.load_all()?;
        items.retain(|i| i.id != id);
        self.write(&items)
    }

    /// Delete the snapshot key entirely rather than rewriting it as an
    /// empty array; `load_all` reads both states the same way.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(ITEMS_KEY)
    }

    fn write(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(TracalError::Serialization)?;
        self.store.set(ITEMS_KEY, &raw)
    }
}
