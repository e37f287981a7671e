use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BragError, Result};
use crate::invoker::CommandInvoker;
use crate::model::{parse_entries, BragEntry, ExportFormat};
use chrono::NaiveDate;

pub const LOAD_FAILED: &str = "Failed to load brags";

/// `YYYY-MM-DD`, the date form `brag export` expects.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Builds the argument list for `brag export`.
pub fn export_args(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    format: ExportFormat,
) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(start) = start {
        args.push("--start".to_string());
        args.push(format_date(start));
    }
    if let Some(end) = end {
        args.push("--end".to_string());
        args.push(format_date(end));
    }
    args.push("--format".to_string());
    args.push(format.to_string());
    args
}

/// Runs `brag export --format json` with an optional start date and parses the result.
pub fn fetch_entries<I: CommandInvoker>(
    invoker: &I,
    start: Option<NaiveDate>,
) -> Result<Vec<BragEntry>> {
    let stdout = invoker.invoke("export", &export_args(start, None, ExportFormat::Json))?;
    parse_entries(&stdout)
}

/// Empty result carrying a single error notification.
pub fn failure(title: &str, error: &BragError) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(title).with_detail(error.to_string()));
    result
}
