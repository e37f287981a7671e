//! Recent brags within a fixed time window.
//!
//! The window is emulated client side: the start date is computed here and
//! passed as `--start`, the CLI has no notion of "last N days".
//!
//! A list view can refetch while an earlier fetch is still running (the user
//! flips the days dropdown twice). [`RecentList`] tags each fetch with a
//! [`FetchToken`] and only commits the newest one, so a slow stale response can
//! never overwrite a fresher list.

use crate::commands::helpers::{failure, fetch_entries, LOAD_FAILED};
use crate::commands::{CmdMessage, CmdResult, FetchSequencer, FetchToken};
use crate::invoker::CommandInvoker;
use crate::model::{BragEntry, RecentDays};
use chrono::{Duration, NaiveDate};
use std::cmp::Reverse;

pub fn start_date(days: RecentDays, today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(days.days()))
}

/// Newest first. Stable, so entries with equal timestamps keep CLI order;
/// unparseable timestamps sink to the bottom.
pub fn sort_newest_first(entries: &mut [BragEntry]) {
    entries.sort_by_key(|e| Reverse(e.created_at()));
}

pub fn run<I: CommandInvoker>(invoker: &I, days: RecentDays, today: NaiveDate) -> CmdResult {
    match fetch_entries(invoker, Some(start_date(days, today))) {
        Ok(mut entries) => {
            sort_newest_first(&mut entries);
            CmdResult::default().with_entries(entries)
        }
        Err(e) => failure(LOAD_FAILED, &e),
    }
}

/// State of the Recent list view.
#[derive(Debug, Default)]
pub struct RecentList {
    sequencer: FetchSequencer,
    days: RecentDays,
    entries: Vec<BragEntry>,
    messages: Vec<CmdMessage>,
    loading: bool,
}

impl RecentList {
    pub fn new(days: RecentDays) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn days(&self) -> RecentDays {
        self.days
    }

    pub fn entries(&self) -> &[BragEntry] {
        &self.entries
    }

    pub fn messages(&self) -> &[CmdMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Selects a window and starts a fetch for it.
    pub fn begin(&mut self, days: RecentDays) -> FetchToken {
        self.days = days;
        self.loading = true;
        self.sequencer.begin()
    }

    /// Applies a finished fetch. Returns `false` (and changes nothing) when a
    /// newer fetch has been started since `token` was issued.
    pub fn complete(&mut self, token: FetchToken, result: CmdResult) -> bool {
        if !self.sequencer.is_current(token) {
            log::debug!("dropping stale recent fetch {:?}", token);
            return false;
        }
        self.entries = result.entries;
        self.messages = result.messages;
        self.loading = false;
        true
    }

    /// Fetch-and-commit in one step.
    pub fn refresh<I: CommandInvoker>(
        &mut self,
        invoker: &I,
        days: RecentDays,
        today: NaiveDate,
    ) -> &[BragEntry] {
        let token = self.begin(days);
        let result = run(invoker, days, today);
        self.complete(token, result);
        &self.entries
    }
}
