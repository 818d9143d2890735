//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all tracal operations, regardless of the UI
//! being used.
//!
//! The facade:
//! - **Hydrates** the repository from the persisted snapshot, exactly once,
//!   at construction
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that belongs in `commands/*.rs`),
//! I/O, and presentation concerns.
//!
//! ## Generic Over KeyValueStore
//!
//! `TracalApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `TracalApi<FileStore>`
//! - Testing: `TracalApi<MemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::config::TracalConfig;
use crate::error::Result;
use crate::model::Item;
use crate::repository::ItemRepository;
use crate::store::snapshot::SnapshotStore;
use crate::store::KeyValueStore;

/// The main API facade for tracal operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct TracalApi<S: KeyValueStore> {
    repo: ItemRepository,
    snapshots: SnapshotStore<S>,
    config: TracalConfig,
}

impl<S: KeyValueStore> TracalApi<S> {
    /// Build the API over `store`, hydrating the repository from the
    /// persisted snapshot. A missing or corrupt snapshot starts empty.
    pub fn new(store: S, config: TracalConfig) -> Result<Self> {
        let snapshots = SnapshotStore::new(store);
        let items = snapshots.load_all()?;
        Ok(Self {
            repo: ItemRepository::from_items(items),
            snapshots,
            config,
        })
    }

    pub fn add_item(&mut self, name: String, calories_raw: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.repo, &self.snapshots, name, calories_raw)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.repo)
    }

    pub fn edit_item(
        &mut self,
        id: u64,
        name: String,
        calories_raw: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.repo, &self.snapshots, id, name, calories_raw)
    }

    pub fn delete_item(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.repo, &self.snapshots, id)
    }

    pub fn clear_items(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.repo, &self.snapshots, confirmed)
    }

    pub fn total(&self) -> Result<commands::CmdResult> {
        commands::total::run(&self.repo, &self.config)
    }

    /// Read access to the collection, in insertion order.
    pub fn items(&self) -> &[Item] {
        self.repo.items()
    }

    pub fn total_calories(&self) -> i64 {
        self.repo.total_calories()
    }

    pub fn config(&self) -> &TracalConfig {
        &self.config
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn api() -> TracalApi<MemoryStore> {
        TracalApi::new(MemoryStore::new(), TracalConfig::default()).unwrap()
    }

    #[test]
    fn starts_empty_with_no_snapshot() {
        let api = api();
        assert!(api.items().is_empty());
        assert_eq!(api.total_calories(), 0);
    }

    #[test]
    fn hydrates_from_existing_snapshot() {
        let store = MemoryStore::new();
        store
            .set(
                "items",
                r#"[{"id":0,"name":"Rice","calories":500},{"id":1,"name":"Egg","calories":150}]"#,
            )
            .unwrap();

        let api = TracalApi::new(store, TracalConfig::default()).unwrap();
        assert_eq!(api.items().len(), 2);
        assert_eq!(api.total_calories(), 650);
    }

    #[test]
    fn new_ids_continue_past_hydrated_ones() {
        let store = MemoryStore::new();
        store
            .set("items", r#"[{"id":7,"name":"Rice","calories":500}]"#)
            .unwrap();

        let mut api = TracalApi::new(store, TracalConfig::default()).unwrap();
        let result = api.add_item("Egg".into(), "150").unwrap();
        assert_eq!(result.affected_items[0].id, 8);
    }

    #[test]
    fn dispatches_full_workflow() {
        let mut api = api();
        api.add_item("Rice".into(), "500").unwrap();
        api.add_item("Egg".into(), "150").unwrap();
        api.edit_item(0, "Rice".into(), "600").unwrap();
        api.delete_item(1).unwrap();

        assert_eq!(api.items().len(), 1);
        assert_eq!(api.total_calories(), 600);

        api.clear_items(true).unwrap();
        assert!(api.items().is_empty());
    }
}
