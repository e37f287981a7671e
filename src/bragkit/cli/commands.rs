//! # CLI Layer
//!
//! The terminal stands in for the launcher UI:
//!
//! - the Add and Export forms are subcommand flags,
//! - the Search and Recent lists are printed, with `--filter` playing the
//!   list's search bar and `--copy`/`--copy-json` its item actions,
//! - notifications become coloured status lines (errors on stderr).
//!
//! This is the only module that prints, and the only one that decides exit
//! codes: a handler returns `Ok(false)` when the action reported a failure so
//! `main` can exit non-zero without treating it as a crash.

use super::render::{print_messages, render_entries, render_heading};
use super::setup::{Cli, Commands, ListArgs};
use bragkit::api::{
    AddForm, CmdMessage, CmdResult, CopyAction, ExportForm, ExportTarget, RecentList,
};
use bragkit::config::BragConfig;
use bragkit::error::Result;
use bragkit::init::{initialize, BragContext};
use bragkit::model::{BragEntry, ExportFormat, RecentDays};
use bragkit::resolver::{self, CLI_NAME};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::Colorize;

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(cli.command, initialize)
}

/// Doctor is dispatched before the context is built so it still runs when
/// the config dir cannot be determined.
fn execute<F>(command: Option<Commands>, init: F) -> Result<bool>
where
    F: FnOnce() -> Result<BragContext>,
{
    let command = match command {
        Some(Commands::Doctor) => return handle_doctor(),
        other => other,
    };

    let mut ctx = init()?;

    match command {
        Some(Commands::Add {
            content,
            tags,
            project,
        }) => handle_add(&ctx, content, tags, project),
        Some(Commands::Export {
            start,
            end,
            format,
            print,
        }) => handle_export(&ctx, start, end, format, print),
        Some(Commands::Search { list }) => handle_search(&ctx, &list),
        Some(Commands::Recent { days, list }) => handle_recent(&mut ctx, days, &list),
        Some(Commands::Doctor) => handle_doctor(),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_recent(&mut ctx, None, &ListArgs::default()),
    }
}

/// Logs go to stderr via `RUST_LOG`; `--verbose` turns on debug when it is unset.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }
    let _ = builder.try_init();
}

fn finish(result: &CmdResult) -> Result<bool> {
    print_messages(&result.messages);
    Ok(!result.has_errors())
}

fn handle_add(
    ctx: &BragContext,
    content: Vec<String>,
    tags: String,
    project: String,
) -> Result<bool> {
    let form = AddForm::new(content.join(" "))
        .with_tags(tags)
        .with_project(project);
    let result = ctx.api.add(&form);
    finish(&result)
}

fn handle_export(
    ctx: &BragContext,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    format: Option<ExportFormat>,
    print: bool,
) -> Result<bool> {
    let form = ExportForm {
        start,
        end,
        format: format.unwrap_or(ctx.config.export_format),
        target: if print {
            ExportTarget::Output
        } else {
            ExportTarget::Clipboard
        },
    };

    let result = ctx.api.export(&form);
    if let Some(output) = &result.output {
        print!("{}", output);
    }
    finish(&result)
}

fn handle_search(ctx: &BragContext, args: &ListArgs) -> Result<bool> {
    let result = ctx.api.search();
    show_list(ctx, "All Brags", result.entries, result.messages, args)
}

fn handle_recent(
    ctx: &mut BragContext,
    days: Option<RecentDays>,
    args: &ListArgs,
) -> Result<bool> {
    let selected = days.unwrap_or_else(|| ctx.config.recent_days());
    remember_days(ctx, selected);

    let mut list = RecentList::new(selected);
    ctx.api
        .refresh_recent(&mut list, selected, Utc::now().date_naive());

    let entries = list.entries().to_vec();
    let messages = list.messages().to_vec();
    show_list(ctx, &selected.title(), entries, messages, args)
}

/// The days dropdown keeps its last value between runs.
fn remember_days(ctx: &mut BragContext, days: RecentDays) {
    if ctx.config.recent_days() == days {
        return;
    }
    ctx.config.set_recent_days(days);
    if let Err(e) = ctx.save_config() {
        log::warn!("could not remember recent days: {}", e);
    }
}

fn show_list(
    ctx: &BragContext,
    title: &str,
    entries: Vec<BragEntry>,
    mut messages: Vec<CmdMessage>,
    args: &ListArgs,
) -> Result<bool> {
    let visible = apply_filter(entries, args.filter.as_deref());

    print!("{}", render_heading(title, visible.len()));
    print!("{}", render_entries(&visible, Utc::now()));

    let copy = args
        .copy
        .map(|n| (n, CopyAction::Content))
        .or(args.copy_json.map(|n| (n, CopyAction::Json)));
    if let Some((position, action)) = copy {
        match position.checked_sub(1).and_then(|i| visible.get(i)) {
            Some(entry) => messages.extend(ctx.api.copy_entry(entry, action).messages),
            None => {
                let missing = format!("No brag at position {}", position);
                messages.push(CmdMessage::error(missing));
            }
        }
    }

    let result = CmdResult {
        messages,
        ..CmdResult::default()
    };
    finish(&result)
}

/// The list's search bar: narrows what is shown, never what was fetched.
fn apply_filter(entries: Vec<BragEntry>, filter: Option<&str>) -> Vec<BragEntry> {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(term) => entries.into_iter().filter(|e| e.matches(term)).collect(),
        None => entries,
    }
}

fn handle_doctor() -> Result<bool> {
    let resolver = resolver::default_resolver();

    println!("{}", "Looking for the brag CLI in:".bold());
    for candidate in resolver.probe() {
        let marker = if candidate.exists {
            "✓".green()
        } else {
            "✗".dimmed()
        };
        println!("  {} {}", marker, candidate.path.display());
    }

    let resolved = resolver.resolve();
    if resolved == std::path::Path::new(CLI_NAME) {
        print_messages(&[CmdMessage::warning(format!(
            "No brag CLI found; falling back to '{}' on PATH. Install it with pipx or pip --user.",
            CLI_NAME
        ))]);
    } else {
        print_messages(&[CmdMessage::success(format!("Using {}", resolved.display()))]);
    }
    Ok(true)
}

fn handle_config(
    ctx: &mut BragContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<bool> {
    match (key, value) {
        (None, _) => {
            for key in BragConfig::KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.save_config()?;
            print_messages(&[CmdMessage::success(format!("{} = {}", key, value))]);
        }
    }
    Ok(true)
}
