//! Test doubles shared by the unit tests.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::backend::Backend;
use crate::cli::args::subcommand;
use crate::confirm::Confirm;
use crate::errors::AqError;
use crate::invocation::{EnvSource, ParsedInvocation};
use crate::registry::Registry;
use crate::types::Request;

/// Build an environment from key/value pairs.
pub fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// Parse `argv` (starting with the subcommand name) against `registry`.
pub fn parse<'r>(
    registry: &'r Registry,
    argv: &[&str],
    env: &dyn EnvSource,
) -> Result<ParsedInvocation<'r>, AqError> {
    let spec = registry
        .lookup(argv[0])
        .unwrap_or_else(|| panic!("unknown command {}", argv[0]));
    let matches = subcommand(spec).try_get_matches_from(argv.iter().copied())?;
    ParsedInvocation::resolve(spec, &matches, env)
}

/// A confirmation responder with a fixed answer that records what it was asked.
pub struct Scripted {
    answer: bool,
    asked: Cell<usize>,
    last_prompt: RefCell<Option<String>>,
}

impl Scripted {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
            last_prompt: RefCell::new(None),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.borrow().clone()
    }
}

impl Confirm for Scripted {
    fn confirm(&self, prompt: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        *self.last_prompt.borrow_mut() = Some(prompt.to_owned());
        self.answer
    }
}

/// A backend that records every request and optionally fails.
#[derive(Default)]
pub struct RecordingBackend {
    requests: RefCell<Vec<Request>>,
    failure: Option<&'static str>,
}

impl RecordingBackend {
    pub fn failing(message: &'static str) -> Self {
        Self {
            requests: RefCell::default(),
            failure: Some(message),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Backend for RecordingBackend {
    fn submit(&self, request: &Request) -> anyhow::Result<()> {
        self.requests.borrow_mut().push(request.clone());
        match self.failure {
            Some(message) => Err(anyhow::anyhow!(message)),
            None => Ok(()),
        }
    }
}
