//! # Command Layer
//!
//! This module contains the **core business logic** of tracal. Each command
//! lives in its own submodule and implements pure Rust functions that
//! operate on data types.
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Mutate the repository first, then mirror the mutation into the
//!   snapshot store — never the other way around
//! - Return structured [`CmdResult`] with affected items and messages
//! - Are completely UI-agnostic
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts or confirmations (return data, UI
//!   decides)
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! `MemoryStore` to avoid filesystem dependencies and verify both the
//! returned `CmdResult` and the mirrored snapshot state.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a food item
//! - [`list`]: List items and the running total
//! - [`edit`]: Update an existing item
//! - [`delete`]: Remove an item by id
//! - [`clear`]: Remove every item
//! - [`total`]: Report the calorie total against the configured limit

use serde::Serialize;

use crate::model::Item;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod total;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created or modified by the operation
    pub affected_items: Vec<Item>,
    /// Items to display (for list-style commands)
    pub listed_items: Vec<Item>,
    /// The calorie total, when the command computes one
    pub total: Option<i64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }
}
