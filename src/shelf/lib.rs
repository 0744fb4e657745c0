//! # Shelf Architecture
//!
//! Shelf is a small book catalog: a list of books (name, description, stock flag)
//! kept in memory, saved to a JSON file after every change, with an append-only
//! history of what was done to it.
//!
//! The catalog is a library first. The CLI is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Turns raw strings into ids, fields, orders and flags     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input validation and user-facing messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs, merge_sort.rs, search.rs)             │
//! │  - Owns the books, assigns ids, sorts and searches          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, history.rs)                         │
//! │  - DataStore: JsonFileStore (production), InMemoryStore     │
//! │  - HistoryLog: FileHistory (production), MemoryHistory      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Everything returns `Result<CmdResult>` or plain Rust values.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing operation
//! - [`catalog`]: The authoritative in-memory collection
//! - [`merge_sort`]: Generic stable merge sort
//! - [`search`]: Binary search and linear scans over a sorted copy
//! - [`field`]: Field selectors, sort order, match mode
//! - [`store`]: Record persistence
//! - [`history`]: The action log
//! - [`model`]: The `Book` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod history;
pub mod merge_sort;
pub mod model;
pub mod search;
pub mod store;
