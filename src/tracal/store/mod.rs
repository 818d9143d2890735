//! # Storage Layer
//!
//! This module defines the storage abstraction for tracal. The
//! [`KeyValueStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, browser storage, etc.) without
//!   changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `<key>.json` inside the data directory
//!   - The directory is created lazily on first write
//!
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! For `FileStore` the data directory looks like:
//! ```text
//! ~/.local/share/tracal/
//! ├── items.json          # Full item snapshot (JSON array)
//! └── config.json         # Configuration
//! ```
//!
//! The item snapshot itself is managed by [`snapshot::SnapshotStore`],
//! which layers the full-collection mirror protocol on top of this trait.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod snapshot;

/// Abstract interface for a synchronous key-value store.
///
/// All methods take `&self`: backends either use interior mutability
/// (memory) or are stateless I/O (filesystem).
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when the key is absent;
    /// `Err` only on real I/O failures.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, creating it if needed.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
