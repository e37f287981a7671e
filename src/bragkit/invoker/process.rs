use super::CommandInvoker;
use crate::error::{BragError, Result};
use crate::resolver;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub struct SubprocessInvoker {
    program: PathBuf,
}

impl SubprocessInvoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Invoker bound to the process-wide resolved CLI path.
    pub fn resolved() -> Self {
        Self::new(resolver::cli_path())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl CommandInvoker for SubprocessInvoker {
    fn invoke(&self, subcommand: &str, args: &[String]) -> Result<String> {
        log::debug!(
            "invoking {} {} {:?}",
            self.program.display(),
            subcommand,
            args
        );

        let output = Command::new(&self.program)
            .arg(subcommand)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => BragError::CliNotFound(self.program.clone()),
                _ => BragError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!("brag {} exited with {}: {}", subcommand, output.status, stderr);
            return Err(BragError::CliFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
