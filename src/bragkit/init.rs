use crate::api::BragApi;
use crate::clipboard::SystemClipboard;
use crate::config::BragConfig;
use crate::error::{BragError, Result};
use crate::invoker::process::SubprocessInvoker;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct BragContext {
    pub api: BragApi<SubprocessInvoker, SystemClipboard>,
    pub config: BragConfig,
    pub config_dir: PathBuf,
}

impl BragContext {
    pub fn save_config(&self) -> Result<()> {
        self.config.save(&self.config_dir)
    }
}

pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "bragkit", "bragkit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BragError::Config("Could not determine config dir".to_string()))
}

/// Production wiring: resolved CLI path, OS clipboard, on-disk config.
///
/// An unreadable config file is reported and replaced by defaults rather than
/// blocking every command.
pub fn initialize() -> Result<BragContext> {
    let config_dir = config_dir()?;
    let config = BragConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!("ignoring config in {}: {}", config_dir.display(), e);
        BragConfig::default()
    });

    let api = BragApi::new(SubprocessInvoker::resolved(), SystemClipboard);

    Ok(BragContext {
        api,
        config,
        config_dir,
    })
}
