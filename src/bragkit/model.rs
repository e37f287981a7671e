use crate::error::{BragError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single accomplishment as emitted by `brag export --format json`.
///
/// Entries are display data: the front end never edits them, it only reorders
/// (Recent) or filters (the host list filter) what the CLI returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BragEntry {
    pub content: String,
    /// ISO-8601 timestamp assigned by the CLI, kept verbatim.
    pub timestamp: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub project: Option<String>,
}

impl BragEntry {
    /// Parses `timestamp` as a UTC instant.
    ///
    /// The CLI writes RFC 3339 with a `Z` suffix; naive timestamps (no offset)
    /// are read as UTC.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Case-insensitive substring match over content, project and tags.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.content.to_lowercase().contains(&term)
            || self
                .project
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(&term))
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

/// Output formats understood by `brag export --format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Text => "text",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = BragError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(BragError::InvalidInput(format!(
                "Unknown export format '{}' (expected json, markdown or text)",
                other
            ))),
        }
    }
}

/// Time windows offered by the Recent view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RecentDays {
    #[default]
    Week,
    TwoWeeks,
    Month,
    Quarter,
}

impl RecentDays {
    pub const ALL: [RecentDays; 4] = [
        RecentDays::Week,
        RecentDays::TwoWeeks,
        RecentDays::Month,
        RecentDays::Quarter,
    ];

    pub fn days(&self) -> u32 {
        match self {
            RecentDays::Week => 7,
            RecentDays::TwoWeeks => 14,
            RecentDays::Month => 30,
            RecentDays::Quarter => 90,
        }
    }

    pub fn title(&self) -> String {
        format!("Last {} Days", self.days())
    }
}

impl TryFrom<u32> for RecentDays {
    type Error = BragError;

    fn try_from(days: u32) -> Result<Self> {
        RecentDays::ALL
            .into_iter()
            .find(|d| d.days() == days)
            .ok_or_else(|| {
                BragError::InvalidInput(format!(
                    "Unsupported time period: {} days (choose 7, 14, 30 or 90)",
                    days
                ))
            })
    }
}

impl FromStr for RecentDays {
    type Err = BragError;

    fn from_str(s: &str) -> Result<Self> {
        let days: u32 = s
            .trim()
            .parse()
            .map_err(|_| BragError::InvalidInput(format!("Invalid number of days: {}", s)))?;
        RecentDays::try_from(days)
    }
}

impl fmt::Display for RecentDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

/// Splits the comma separated tags field of the Add form.
/// Pieces are trimmed and empty ones dropped; order is preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Parses the JSON array printed by `brag export --format json`.
pub fn parse_entries(json: &str) -> Result<Vec<BragEntry>> {
    let entries = serde_json::from_str(json)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn entry(ts: &str) -> BragEntry {
        BragEntry {
            content: "Shipped it".into(),
            timestamp: ts.into(),
            tags: vec![],
            project: None,
        }
    }

    #[test]
    fn parses_cli_json_array() {
        let json = r#"[
          {"content": "Shipped v2", "timestamp": "2024-03-01T10:00:00.123456Z",
           "tags": ["infra", "oncall"], "project": "core"},
          {"content": "Fixed flaky test", "timestamp": "2024-03-02T08:30:00Z",
           "tags": [], "project": null}
        ]"#;

        let entries = parse_entries(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tags, vec!["infra", "oncall"]);
        assert_eq!(entries[0].project.as_deref(), Some("core"));
        assert_eq!(entries[1].project, None);
    }

    #[test]
    fn missing_tags_and_project_default() {
        let entries = parse_entries(r#"[{"content": "x", "timestamp": "2024-03-01T10:00:00Z"}]"#)
            .unwrap();
        assert!(entries[0].tags.is_empty());
        assert!(entries[0].project.is_none());
    }

    #[test]
    fn rejects_non_array_output() {
        assert!(parse_entries("Brag added").is_err());
        assert!(parse_entries(r#"{"content": "x"}"#).is_err());
    }

    #[test]
    fn absent_project_serializes_as_null() {
        let json = serde_json::to_string(&entry("2024-03-01T10:00:00Z")).unwrap();
        assert!(json.contains(r#""project":null"#));
    }

    #[test]
    fn created_at_accepts_zulu_and_naive() {
        let zulu = entry("2024-03-01T10:15:30.5Z").created_at().unwrap();
        assert_eq!((zulu.year(), zulu.month(), zulu.day()), (2024, 3, 1));
        assert_eq!(zulu.hour(), 10);

        let naive = entry("2024-03-01T10:15:30").created_at().unwrap();
        assert_eq!(naive.minute(), 15);

        let offset = entry("2024-03-01T12:00:00+02:00").created_at().unwrap();
        assert_eq!(offset.hour(), 10);

        assert!(entry("yesterday").created_at().is_none());
    }

    #[test]
    fn parse_tags_trims_and_drops_empties() {
        assert_eq!(parse_tags("infra, oncall"), vec!["infra", "oncall"]);
        assert_eq!(parse_tags(" a ,, ,b,"), vec!["a", "b"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn export_format_round_trips_through_str() {
        for format in [ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Text] {
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
        }
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn recent_days_only_accepts_fixed_windows() {
        assert_eq!("14".parse::<RecentDays>().unwrap(), RecentDays::TwoWeeks);
        assert_eq!(RecentDays::try_from(90).unwrap(), RecentDays::Quarter);
        assert!(RecentDays::try_from(10).is_err());
        assert!("week".parse::<RecentDays>().is_err());
        assert_eq!(RecentDays::default().days(), 7);
    }

    #[test]
    fn matches_content_project_and_tags() {
        let e = BragEntry {
            content: "Migrated billing".into(),
            timestamp: "2024-03-01T10:00:00Z".into(),
            tags: vec!["Infra".into()],
            project: Some("Payments".into()),
        };
        assert!(e.matches("billing"));
        assert!(e.matches("payments"));
        assert!(e.matches("infra"));
        assert!(e.matches(""));
        assert!(!e.matches("frontend"));
    }
}
