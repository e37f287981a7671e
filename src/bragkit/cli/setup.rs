use bragkit::model::{ExportFormat, RecentDays};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("BRAGKIT_GIT_HASH");
    const COMMIT_DATE: &str = env!("BRAGKIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("BRAGKIT_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bragkit", bin_name = "bragkit", version = get_version())]
#[command(
    about = "Record and review your accomplishments through the brag CLI",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new brag
    #[command(alias = "a")]
    Add {
        /// What did you accomplish? (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,

        /// Comma separated tags, e.g. "infra, oncall"
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Project name
        #[arg(short, long, default_value = "")]
        project: String,
    },

    /// Export brags and copy them to the clipboard
    Export {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Output format: json, markdown or text (defaults to the configured format)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Print to stdout instead of copying to the clipboard
        #[arg(long)]
        print: bool,
    },

    /// List every brag
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List brags from the last 7, 14, 30 or 90 days
    #[command(alias = "r")]
    Recent {
        /// Time period in days (remembered for next time)
        #[arg(short, long)]
        days: Option<RecentDays>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show where the brag CLI is looked for and which one is used
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (recent-days, export-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Options shared by the list views.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Only show brags whose content, project or tags contain this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Copy the content of the Nth listed brag
    #[arg(long, value_name = "N", conflicts_with = "copy_json")]
    pub copy: Option<usize>,

    /// Copy the Nth listed brag as JSON
    #[arg(long, value_name = "N")]
    pub copy_json: Option<usize>,
}
