//! # Rendering
//!
//! Turns entries and notifications into terminal text. Layout (widths,
//! truncation, alignment) is computed on plain strings first and colour is
//! applied last, so the width math never counts escape codes.

use bragkit::api::{CmdMessage, MessageLevel};
use bragkit::model::BragEntry;
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const META_MAX_WIDTH: usize = 30;
const EMPTY_LIST: &str = "No brags found.";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let line = format_message(message);
        match message.level {
            MessageLevel::Info => println!("{}", line.dimmed()),
            MessageLevel::Success => println!("{}", line.green()),
            MessageLevel::Warning => println!("{}", line.yellow()),
            MessageLevel::Error => eprintln!("{}", line.red()),
        }
    }
}

fn format_message(message: &CmdMessage) -> String {
    match &message.detail {
        Some(detail) => format!("{}: {}", message.title, detail),
        None => message.title.clone(),
    }
}

/// One line per entry: position, content, project and tags, then age.
pub fn render_entries(entries: &[BragEntry], now: DateTime<Utc>) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let idx_width = format!("{}. ", entries.len()).width();
    let mut out = String::new();

    for (i, entry) in entries.iter().enumerate() {
        let idx = format!("{:>width$}", format!("{}. ", i + 1), width = idx_width);
        let meta = truncate_to_width(&format_meta(entry), META_MAX_WIDTH);
        let age = format!(
            "{:>width$}",
            format_age(entry, now),
            width = TIME_WIDTH
        );

        let meta_width = if meta.is_empty() { 0 } else { meta.width() + 1 };
        let available = LINE_WIDTH.saturating_sub(2 + idx_width + meta_width + TIME_WIDTH);
        let content = truncate_to_width(&single_line(&entry.content), available);
        let padding = available.saturating_sub(content.width());

        out.push_str(&format!(
            "  {}{}{}{}{}\n",
            idx.yellow(),
            content,
            " ".repeat(padding),
            if meta.is_empty() {
                String::new()
            } else {
                format!(" {}", meta.cyan())
            },
            age.dimmed()
        ));
    }

    out
}

fn format_meta(entry: &BragEntry) -> String {
    let mut parts = Vec::new();
    if let Some(project) = entry.project.as_deref().filter(|p| !p.is_empty()) {
        parts.push(format!("[{}]", project));
    }
    parts.extend(entry.tags.iter().map(|t| format!("#{}", t)));
    parts.join(" ")
}

fn format_age(entry: &BragEntry, now: DateTime<Utc>) -> String {
    match entry.created_at() {
        Some(created) => {
            let elapsed = now.signed_duration_since(created).to_std().unwrap_or_default();
            timeago::Formatter::new().convert(elapsed)
        }
        None => entry.timestamp.chars().take(10).collect(),
    }
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Header shown above a list view.
pub fn render_heading(title: &str, count: usize) -> String {
    let noun = if count == 1 { "brag" } else { "brags" };
    format!("{} {}\n", title.bold(), format!("({} {})", count, noun).dimmed())
}
