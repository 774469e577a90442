//! # CLI Layer
//!
//! This module is **one possible UI client** for rollcall. It is the only place
//! that parses arguments, reads the clock, writes to the terminal and decides
//! exit codes.
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions and the grouped help screen
//! - [`commands`]: `run()`, context setup and per-command handlers
//! - [`print`]: [`print::TerminalRenderer`], the terminal `RosterRenderer`

pub mod commands;
pub mod print;
pub mod setup;

pub use commands::run;
