//! # Rollcall Architecture
//!
//! Rollcall is a **UI-agnostic roster client library**. It pulls student and class
//! records from a school's REST backend, narrows and orders them the way the user asked,
//! and derives the headline counts. The `rollcall` binary is one client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, implements RosterRenderer for a tty    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AppState, the data source and the preferences   │
//! │  - Refreshes the roster after every mutation                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! │  - Pipeline (pipeline/) does filter, sort, indicators       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Boundaries                                                 │
//! │  - source/: RosterSource (HttpSource, InMemorySource)       │
//! │  - store/: KeyValueStore (FileKvStore, InMemoryKvStore)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient State
//!
//! Everything the pipeline reads is passed in explicitly: the roster and the
//! criteria live in [`state::AppState`], and "today" is a parameter of every
//! age-dependent function. Nothing reads the clock below the CLI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`pipeline`]: Record filter, record sorter, indicator aggregator
//! - [`age`]: Age calculation from a birth date
//! - [`prefs`]: Sort preference persistence
//! - [`source`]: Data source abstraction and the HTTP client
//! - [`store`]: Key-value persistence surface
//! - [`state`]: Explicit application state
//! - [`render`]: Renderer capability trait
//! - [`export`]: CSV and JSON export/import
//! - [`validation`]: Student form validation
//! - [`model`]: Core data types (`Student`, `Class`, ids)
//! - [`config`]: Client configuration
//! - [`error`]: Error types

pub mod age;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod prefs;
pub mod render;
pub mod source;
pub mod state;
pub mod store;
pub mod validation;
