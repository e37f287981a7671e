use crate::commands::helpers::failure;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BragError, Result};
use crate::invoker::CommandInvoker;
use crate::model::parse_tags;

const FAILED: &str = "Failed to add brag";

/// Fields of the "Add Brag" form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub content: String,
    /// Comma separated.
    pub tags: String,
    pub project: String,
}

impl AddForm {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Arguments following the `add` subcommand.
    pub fn to_args(&self) -> Result<Vec<String>> {
        if self.content.trim().is_empty() {
            return Err(BragError::InvalidInput("Content cannot be empty".into()));
        }

        let mut args = vec![self.content.clone()];
        for tag in parse_tags(&self.tags) {
            args.push("--tags".to_string());
            args.push(tag);
        }
        let project = self.project.trim();
        if !project.is_empty() {
            args.push("--project".to_string());
            args.push(project.to_string());
        }
        Ok(args)
    }
}

pub fn run<I: CommandInvoker>(invoker: &I, form: &AddForm) -> CmdResult {
    let outcome = form
        .to_args()
        .and_then(|args| invoker.invoke("add", &args));

    match outcome {
        Ok(_) => {
            let mut result = CmdResult::default().dismissed();
            result.add_message(CmdMessage::success("Brag added!"));
            result
        }
        Err(e) => failure(FAILED, &e),
    }
}
