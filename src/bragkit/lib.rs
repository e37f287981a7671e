//! # Bragkit Architecture
//!
//! Bragkit is a **front end for the `brag` CLI**. It does not store brags: the
//! external CLI owns storage. Bragkit finds that CLI, calls it with the right
//! arguments and turns what comes back into entries and notifications that a
//! host (the bundled terminal client, a launcher plugin) can render.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Plays the host: forms are flags, lists are printed       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the invoker and the clipboard                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add, Export, Search, Recent                              │
//! │  - Build argv, parse output, fold failures into messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Invocation Layer (invoker/, resolver.rs)                   │
//! │  - CommandInvoker trait                                     │
//! │  - SubprocessInvoker (production), ScriptedInvoker (tests)  │
//! │  - PathResolver: where is `brag` when PATH is not set up?   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Three things go wrong in practice: the CLI is not installed where we look,
//! the CLI exits non-zero, or its output is not the JSON we expect. All three
//! surface as [`error::BragError`] at the invoker/parse boundary and are turned
//! into one error notification plus an empty list by the command that made the
//! call. Nothing is retried; the user simply runs the action again.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `ScriptedInvoker`, asserting the exact
//!    argv and the resulting `CmdResult`.
//! 2. **Invoker/Resolver**: real processes (`/bin/sh`) and temp directories.
//! 3. **CLI**: `tests/` drives the binary against a fake `brag` script.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Add, Export, Search, Recent
//! - [`invoker`]: Subprocess boundary
//! - [`resolver`]: CLI path discovery
//! - [`model`]: `BragEntry`, `ExportFormat`, `RecentDays`
//! - [`config`]: Persisted front-end preferences
//! - [`clipboard`]: Clipboard trait and OS implementation
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod invoker;
pub mod model;
pub mod resolver;
