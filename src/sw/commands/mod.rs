//! # Command Layer
//!
//! One submodule per `sw` command. Commands are pure functions over an
//! in-memory [`Keyring`]: they take the keyring and the positional arguments,
//! and hand back a [`CmdResult`] carrying the (possibly unchanged) keyring plus
//! whatever the UI should show.
//!
//! Loading and saving is the API layer's job; commands never touch the store.
//! They also never print: messages travel back as [`CmdMessage`]s.
//!
//! ## Soft failures
//!
//! Argument-count and label checks are not errors. A command that fails one
//! returns `Ok` with the keyring untouched, `modified == false` and an error
//! level message. `Err` is reserved for operational faults (unreadable import
//! file, ssh client that cannot be started).
//!
//! ## Command Modules
//!
//! - [`list`]: Table of labels and addresses
//! - [`add`]: Register a new label
//! - [`rename`]: Move an address to a new label
//! - [`remove`]: Forget a label
//! - [`ssh`]: `connect` and `run`, both hand off to the ssh client
//! - [`export`]: Dump the keyring as JSON
//! - [`import`]: Merge a JSON keyring file into the current one
//! - [`helpers`]: The validation guards shared by the commands above

use crate::model::Keyring;

pub mod add;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod remove;
pub mod rename;
pub mod ssh;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A single keyring row, as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub address: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The keyring after the command ran.
    pub keyring: Keyring,
    /// Whether `keyring` differs from what was loaded and must be saved.
    pub modified: bool,
    pub listed_entries: Vec<Entry>,
    /// JSON rendering of the keyring (for `export`).
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    /// An untouched keyring.
    pub fn unchanged(keyring: Keyring) -> Self {
        Self {
            keyring,
            ..Default::default()
        }
    }

    /// A keyring that must be persisted.
    pub fn modified(keyring: Keyring) -> Self {
        Self {
            keyring,
            modified: true,
            ..Default::default()
        }
    }

    /// A soft failure: keyring untouched, one error message explaining why.
    pub fn rejected(keyring: Keyring, message: CmdMessage) -> Self {
        let mut result = Self::unchanged(keyring);
        result.add_message(message);
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_exported(mut self, exported: String) -> Self {
        self.exported = Some(exported);
        self
    }
}
