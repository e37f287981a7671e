//! # Invocation Layer
//!
//! Every operation ends up as one `brag <subcommand> <args...>` call. The
//! [`CommandInvoker`] trait is the seam between the commands and the process
//! boundary:
//!
//! - [`process::SubprocessInvoker`]: spawns the real CLI.
//!   - Arguments are passed as discrete argv tokens, never through a shell,
//!     so quotes, semicolons and `$(...)` in user text reach the CLI verbatim.
//!   - One child per call, awaited before returning. No retry, no timeout.
//!
//! - [`scripted::ScriptedInvoker`]: in-memory double for tests.
//!   - Records each call.
//!   - Replays queued responses in order.
//!
//! ## Failure Taxonomy
//!
//! | Situation                          | Error                          |
//! |------------------------------------|--------------------------------|
//! | executable missing                 | `BragError::CliNotFound`       |
//! | CLI exits non-zero                 | `BragError::CliFailed`         |
//! | other spawn failure                | `BragError::Io`                |
//!
//! Parsing the output is the caller's job (see [`crate::model::parse_entries`]).

use crate::error::Result;

pub mod process;
pub mod scripted;

/// Runs the brag CLI.
pub trait CommandInvoker {
    /// Invokes `subcommand` followed by `args` and returns captured stdout.
    fn invoke(&self, subcommand: &str, args: &[String]) -> Result<String>;
}

