//! # Shelf Architecture
//!
//! Shelf is a personal library catalog: a list of books, each `available` or
//! `checked-out`, kept in a single JSON file. The library holds all of the
//! catalog logic; the `shelf` binary is a thin console client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, menu.rs, print.rs)            │
//! │  - Interactive menu and one-shot subcommands                │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses raw input (ids, years, statuses)                  │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns catalog outcomes into messages and listings        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Store (catalog.rs)                                 │
//! │  - In-memory Vec<Book>, rewritten to storage on mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (JSON file), InMemoryStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Single Writer
//!
//! One process owns one catalog file. There is no locking: two shelf processes
//! writing the same file will lose each other's updates.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`catalog`]: The Catalog Store (load, save, add, delete, search, change status)
//! - [`commands`]: Per-command result shaping
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `BookStatus`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
