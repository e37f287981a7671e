//! # CLI Path Resolution
//!
//! Launchers and desktop shells start commands without the user's login shell,
//! so `brag` is usually not on `PATH`. The resolver probes a fixed, ordered list
//! of install locations (pip `--user` on macOS, pipx, Homebrew, `/usr/local`)
//! and picks the first one that exists.
//!
//! When nothing is found it falls back to the bare command name. Spawning that
//! will most likely fail with "not found", which the invoker reports as
//! [`BragError::CliNotFound`](crate::error::BragError::CliNotFound).
//!
//! The answer is memoised per resolver: after the first call the filesystem is
//! not consulted again, so a CLI installed later in the same process is not
//! picked up.

use directories::BaseDirs;
use once_cell::sync::{Lazy, OnceCell};
use std::path::{Path, PathBuf};

/// Name used when no candidate exists.
pub const CLI_NAME: &str = "brag";

static DEFAULT_RESOLVER: Lazy<PathResolver> = Lazy::new(PathResolver::default);

/// The process-wide resolver over [`default_candidates`].
pub fn default_resolver() -> &'static PathResolver {
    &DEFAULT_RESOLVER
}

/// Resolves the CLI path once for the whole process.
pub fn cli_path() -> &'static Path {
    DEFAULT_RESOLVER.resolve()
}

/// Default candidate locations for a given home directory.
pub fn default_candidates(home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = home {
        for python in ["3.9", "3.10", "3.11", "3.12"] {
            candidates.push(
                home.join("Library/Python")
                    .join(python)
                    .join("bin")
                    .join(CLI_NAME),
            );
        }
        candidates.push(home.join(".local/bin").join(CLI_NAME));
    }

    candidates.push(Path::new("/usr/local/bin").join(CLI_NAME));
    candidates.push(Path::new("/opt/homebrew/bin").join(CLI_NAME));
    candidates
}

/// One probed candidate, as reported by `doctor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub exists: bool,
}

#[derive(Debug)]
pub struct PathResolver {
    candidates: Vec<PathBuf>,
    resolved: OnceCell<PathBuf>,
}

impl Default for PathResolver {
    fn default() -> Self {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::new(default_candidates(home.as_deref()))
    }
}

impl PathResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            resolved: OnceCell::new(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first existing candidate, or [`CLI_NAME`] when none exist.
    /// Computed on first call only.
    pub fn resolve(&self) -> &Path {
        self.resolved.get_or_init(|| {
            let found = self.candidates.iter().find(|p| p.exists()).cloned();
            match found {
                Some(path) => {
                    log::debug!("resolved brag CLI at {}", path.display());
                    path
                }
                None => {
                    log::debug!(
                        "no brag CLI in {} candidate locations, falling back to '{}'",
                        self.candidates.len(),
                        CLI_NAME
                    );
                    PathBuf::from(CLI_NAME)
                }
            }
        })
    }

    /// Checks every candidate without touching the memoised result.
    pub fn probe(&self) -> Vec<Candidate> {
        self.candidates
            .iter()
            .map(|path| Candidate {
                path: path.clone(),
                exists: path.exists(),
            })
            .collect()
    }
}
