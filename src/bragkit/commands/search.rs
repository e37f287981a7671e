use crate::commands::helpers::{failure, fetch_entries, LOAD_FAILED};
use crate::commands::CmdResult;
use crate::invoker::CommandInvoker;

/// Loads every brag, in CLI order. Narrowing the list is left to the host's
/// own filter.
pub fn run<I: CommandInvoker>(invoker: &I) -> CmdResult {
    match fetch_entries(invoker, None) {
        Ok(entries) => CmdResult::default().with_entries(entries),
        Err(e) => failure(LOAD_FAILED, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::scripted::ScriptedInvoker;

    const TWO_ENTRIES: &str = r#"[
      {"content": "Old", "timestamp": "2024-01-01T09:00:00Z", "tags": [], "project": null},
      {"content": "New", "timestamp": "2024-02-01T09:00:00Z", "tags": ["x"], "project": "core"}
    ]"#;

    #[test]
    fn loads_all_entries_unmodified() {
        let invoker = ScriptedInvoker::new().respond(TWO_ENTRIES);
        let result = run(&invoker);

        assert_eq!(invoker.last_argv().unwrap(), vec!["export", "--format", "json"]);
        let contents: Vec<_> = result.entries.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["Old", "New"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn malformed_output_yields_empty_list_and_error() {
        let invoker = ScriptedInvoker::new().respond("Traceback (most recent call last):");
        let result = run(&invoker);

        assert!(result.entries.is_empty());
        assert!(result.has_errors());
        assert_eq!(result.messages[0].title, LOAD_FAILED);
    }

    #[test]
    fn non_zero_exit_yields_empty_list_and_error() {
        let invoker = ScriptedInvoker::new().fail("permission denied");
        let result = run(&invoker);

        assert!(result.entries.is_empty());
        assert!(result.has_errors());
    }
}
