//! # sw architecture
//!
//! `sw` keeps a small address book of ssh targets: short labels mapped to
//! whatever the ssh client accepts as a destination (`user@host`, an alias from
//! `~/.ssh/config`, ...). The book is one JSON object on disk.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                  │
//! │  - Parses the command, prints results and usage          │
//! │  - The ONLY place that knows about stdout/exit codes     │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                            │
//! │  - load → command → save-if-modified                     │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                │
//! │  - Validation guards, then a pure keyring transformation │
//! └──────────────────────────────────────────────────────────┘
//!              │                              │
//!              ▼                              ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │  Store (store/)         │   │  Runner (runner.rs)         │
//! │  FileStore, InMemory    │   │  ssh via `sh -c`, recorder  │
//! └─────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! ## Failure tiers
//!
//! Bad input (wrong argument count, unknown or duplicate label) is reported as
//! a message and leaves the keyring untouched. Operational faults (the keyring
//! cannot be written, the import file is missing or not JSON) are `Err` and
//! end the process. A keyring file that is missing or corrupt is read as an
//! empty keyring.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per command, plus the shared guards
//! - [`store`]: Keyring persistence
//! - [`runner`]: ssh client invocation
//! - [`model`]: The [`model::Keyring`] type
//! - [`config`]: Storage path and ssh program resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;
pub mod store;
