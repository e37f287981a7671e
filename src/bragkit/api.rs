//! # API Facade
//!
//! [`BragApi`] is the single entry point a host calls into. It owns the two
//! host-side collaborators, the [`CommandInvoker`] that reaches the brag CLI
//! and the [`Clipboard`], and dispatches to `commands/*.rs`.
//!
//! Like the commands it wraps, the API never prints and never fails: every
//! method returns a [`CmdResult`] whose messages say what happened.
//!
//! Production wiring is `BragApi<SubprocessInvoker, SystemClipboard>`; tests
//! use `ScriptedInvoker` and `MemoryClipboard`.

use crate::clipboard::{format_entry_json, Clipboard};
use crate::commands;
use crate::invoker::CommandInvoker;
use crate::model::{BragEntry, RecentDays};
use chrono::NaiveDate;

pub use crate::commands::add::AddForm;
pub use crate::commands::export::{ExportForm, ExportTarget};
pub use crate::commands::recent::RecentList;
pub use crate::commands::{CmdMessage, CmdResult, FetchToken, MessageLevel};

/// The two copy actions offered on a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    Content,
    Json,
}

pub struct BragApi<I: CommandInvoker, C: Clipboard> {
    invoker: I,
    clipboard: C,
}

impl<I: CommandInvoker, C: Clipboard> BragApi<I, C> {
    pub fn new(invoker: I, clipboard: C) -> Self {
        Self { invoker, clipboard }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn add(&self, form: &AddForm) -> CmdResult {
        commands::add::run(&self.invoker, form)
    }

    pub fn export(&self, form: &ExportForm) -> CmdResult {
        commands::export::run(&self.invoker, &self.clipboard, form)
    }

    pub fn search(&self) -> CmdResult {
        commands::search::run(&self.invoker)
    }

    pub fn recent(&self, days: RecentDays, today: NaiveDate) -> CmdResult {
        commands::recent::run(&self.invoker, days, today)
    }

    /// Refreshes a Recent view in place; only the newest fetch is committed.
    pub fn refresh_recent(&self, list: &mut RecentList, days: RecentDays, today: NaiveDate) {
        list.refresh(&self.invoker, days, today);
    }

    pub fn copy_entry(&self, entry: &BragEntry, action: CopyAction) -> CmdResult {
        let text = match action {
            CopyAction::Content => Ok(entry.content.clone()),
            CopyAction::Json => format_entry_json(entry),
        };

        let mut result = CmdResult::default();
        match text.and_then(|t| self.clipboard.copy(&t)) {
            Ok(()) => result.add_message(CmdMessage::success("Copied to clipboard")),
            Err(e) => result
                .add_message(CmdMessage::error("Failed to copy").with_detail(e.to_string())),
        }
        result
    }
}
