use crate::clipboard::Clipboard;
use crate::commands::helpers::{export_args, failure};
use crate::commands::{CmdMessage, CmdResult};
use crate::invoker::CommandInvoker;
use crate::model::ExportFormat;
use chrono::NaiveDate;

const FAILED: &str = "Failed to export";

/// Where exported text goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportTarget {
    #[default]
    Clipboard,
    /// Hand the text back in [`CmdResult::output`].
    Output,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportForm {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub format: ExportFormat,
    pub target: ExportTarget,
}

impl ExportForm {
    pub fn to_args(&self) -> Vec<String> {
        export_args(self.start, self.end, self.format)
    }
}

pub fn run<I: CommandInvoker, C: Clipboard>(
    invoker: &I,
    clipboard: &C,
    form: &ExportForm,
) -> CmdResult {
    let stdout = match invoker.invoke("export", &form.to_args()) {
        Ok(stdout) => stdout,
        Err(e) => return failure(FAILED, &e),
    };

    match form.target {
        ExportTarget::Clipboard => {
            if let Err(e) = clipboard.copy(&stdout) {
                return failure(FAILED, &e);
            }
            let mut result = CmdResult::default().dismissed();
            result.add_message(CmdMessage::success("Exported and copied to clipboard!"));
            result
        }
        ExportTarget::Output => CmdResult::default().with_output(stdout).dismissed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::error::{BragError, Result};
    use crate::invoker::scripted::ScriptedInvoker;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy(&self, _text: &str) -> Result<()> {
            Err(BragError::Clipboard("no display".into()))
        }
    }

    #[test]
    fn default_form_exports_everything_as_json() {
        let invoker = ScriptedInvoker::new().respond("[]\n");
        let clipboard = MemoryClipboard::new();

        let result = run(&invoker, &clipboard, &ExportForm::default());

        assert_eq!(invoker.last_argv().unwrap(), vec!["export", "--format", "json"]);
        assert_eq!(clipboard.contents().as_deref(), Some("[]\n"));
        assert!(result.dismiss);
        assert_eq!(
            result.messages,
            vec![CmdMessage::success("Exported and copied to clipboard!")]
        );
    }

    #[test]
    fn date_range_and_format_become_flags() {
        let invoker = ScriptedInvoker::new().respond("- Shipped v2\n");
        let clipboard = MemoryClipboard::new();
        let form = ExportForm {
            start: NaiveDate::from_ymd_opt(2024, 1, 1),
            end: NaiveDate::from_ymd_opt(2024, 3, 31),
            format: ExportFormat::Markdown,
            target: ExportTarget::Clipboard,
        };

        run(&invoker, &clipboard, &form);

        assert_eq!(
            invoker.last_argv().unwrap(),
            vec!["export", "--start", "2024-01-01", "--end", "2024-03-31", "--format", "markdown"]
        );
        assert_eq!(clipboard.contents().as_deref(), Some("- Shipped v2\n"));
    }

    #[test]
    fn output_target_skips_clipboard() {
        let invoker = ScriptedInvoker::new().respond("- a\n");
        let clipboard = MemoryClipboard::new();
        let form = ExportForm {
            format: ExportFormat::Text,
            target: ExportTarget::Output,
            ..ExportForm::default()
        };

        let result = run(&invoker, &clipboard, &form);

        assert_eq!(result.output.as_deref(), Some("- a\n"));
        assert!(clipboard.contents().is_none());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn cli_failure_is_reported_and_nothing_copied() {
        let invoker = ScriptedInvoker::new().fail("Invalid isoformat string");
        let clipboard = MemoryClipboard::new();

        let result = run(&invoker, &clipboard, &ExportForm::default());

        assert!(clipboard.contents().is_none());
        assert!(!result.dismiss);
        assert_eq!(result.messages[0].title, FAILED);
        assert!(result.messages[0]
            .detail
            .as_deref()
            .unwrap()
            .contains("Invalid isoformat string"));
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let invoker = ScriptedInvoker::new().respond("[]");
        let result = run(&invoker, &BrokenClipboard, &ExportForm::default());

        assert!(result.has_errors());
        assert!(result.messages[0].detail.as_deref().unwrap().contains("no display"));
    }
}
