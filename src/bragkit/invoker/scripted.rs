use super::CommandInvoker;
use crate::error::{BragError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A recorded `brag` call: subcommand plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub subcommand: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// The full argv after the program name.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.subcommand.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// In-memory invoker that replays queued responses.
///
/// With nothing queued every call succeeds with empty output.
#[derive(Default)]
pub struct ScriptedInvoker {
    responses: RefCell<VecDeque<Result<String>>>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, stdout: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(stdout.into()));
        self
    }

    /// Queues a non-zero exit with the given error-stream text.
    pub fn fail(self, stderr: impl Into<String>) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(BragError::CliFailed {
                status: "exit status: 1".to_string(),
                stderr: stderr.into(),
            }));
        self
    }

    pub fn fail_with(self, error: BragError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn last_argv(&self) -> Option<Vec<String>> {
        self.calls.borrow().last().map(Invocation::argv)
    }
}

impl CommandInvoker for ScriptedInvoker {
    fn invoke(&self, subcommand: &str, args: &[String]) -> Result<String> {
        self.calls.borrow_mut().push(Invocation {
            subcommand: subcommand.to_string(),
            args: args.to_vec(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}
