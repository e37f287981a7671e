use crate::model::BragEntry;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod add;
pub mod export;
pub mod helpers;
pub mod recent;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A notification for the host to show (a toast, a status line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub title: String,
    pub detail: Option<String>,
}

impl CmdMessage {
    fn new(level: MessageLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            detail: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, title)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Outcome of one user action.
///
/// Commands never return `Err`: failures are folded into an error message and
/// an empty entry list, so the host only has to render what it gets.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub entries: Vec<BragEntry>,
    /// Raw CLI output, when the action asked for it instead of the clipboard.
    pub output: Option<String>,
    /// The form that triggered the action should be closed.
    pub dismiss: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<BragEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn dismissed(mut self) -> Self {
        self.dismiss = true;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}

/// Identifies one fetch issued by a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

/// Hands out increasing tokens so that only the newest fetch may update a view.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: AtomicU64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch; every earlier token becomes stale.
    pub fn begin(&self) -> FetchToken {
        FetchToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let seq = FetchSequencer::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn has_errors_only_for_error_level() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("careful"));
        assert!(!result.has_errors());
        result.add_message(CmdMessage::error("Failed").with_detail("boom"));
        assert!(result.has_errors());
        assert_eq!(result.messages[1].detail.as_deref(), Some("boom"));
    }
}
