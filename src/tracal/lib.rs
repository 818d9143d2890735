//! # Tracal Architecture
//!
//! Tracal is a **UI-agnostic calorie-tracking library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Hydrates the repository from the snapshot at startup     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Mutates the repository, then mirrors into the snapshot   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository + Storage (repository.rs, store/)               │
//! │  - ItemRepository: in-memory list, edit cursor, aggregates  │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), MemoryStore (testing)            │
//! │  - SnapshotStore: full-collection JSON mirror               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, repository, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a GUI, or any other UI.
//!
//! ## Persistence Model
//!
//! The item collection is mirrored into a durable key-value store as one
//! JSON snapshot under a single fixed key, rewritten in full after every
//! mutation. That read-modify-write cycle is only safe because tracal is
//! single-process and single-threaded; see [`store::snapshot`] for the
//! stated limitation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`repository`]: The authoritative in-memory item collection
//! - [`store`]: Storage abstraction, backends, and the snapshot mirror
//! - [`model`]: Core data types (`Item`) and input-boundary parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod store;
