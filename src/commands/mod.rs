/// Command dispatch: routes a validated invocation to its action handler.
pub mod head;
pub mod load;
pub mod ls;
pub mod mk;
pub mod query;
pub mod rm;

use std::collections::BTreeMap;

use anyhow::{Context, bail};

use crate::backend::Backend;
use crate::errors::AqError;
use crate::invocation::ParsedInvocation;

/// What an action handler reports back.
pub type ExecutionResult = anyhow::Result<()>;

/// Performs the real work of one command.
pub trait Action {
    /// Execute the command for a validated invocation.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying operation.
    fn execute(&self, invocation: &ParsedInvocation<'_>) -> ExecutionResult;
}

impl<F> Action for F
where
    F: Fn(&ParsedInvocation<'_>) -> ExecutionResult,
{
    fn execute(&self, invocation: &ParsedInvocation<'_>) -> ExecutionResult {
        self(invocation)
    }
}

/// Signature of the built-in handlers in this module's children.
type Handler = fn(&ParsedInvocation<'_>, &dyn Backend) -> ExecutionResult;

/// A built-in handler bound to the backend it submits to.
struct BackendAction<'a> {
    backend: &'a dyn Backend,
    handler: Handler,
}

impl Action for BackendAction<'_> {
    fn execute(&self, invocation: &ParsedInvocation<'_>) -> ExecutionResult {
        (self.handler)(invocation, self.backend)
    }
}

/// Mapping from command name to its action handler.
#[derive(Default)]
pub struct ActionTable<'a> {
    actions: BTreeMap<&'static str, Box<dyn Action + 'a>>,
}

impl<'a> ActionTable<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers for every built-in command, all submitting to `backend`.
    #[must_use]
    pub fn builtin(backend: &'a dyn Backend) -> Self {
        let handlers: [(&'static str, Handler); 6] = [
            ("query", query::run),
            ("ls", ls::run),
            ("head", head::run),
            ("mk", mk::run),
            ("rm", rm::run),
            ("load", load::run),
        ];
        let mut table = Self::new();
        for (name, handler) in handlers {
            table.register(name, BackendAction { backend, handler });
        }
        table
    }

    /// Bind `action` to `name`, replacing any earlier binding.
    pub fn register(&mut self, name: &'static str, action: impl Action + 'a) {
        self.actions.insert(name, Box::new(action));
    }

    /// Run the handler for the invocation's command.
    ///
    /// # Errors
    ///
    /// Returns `AqError::Execution` when no handler is bound or the handler fails.
    pub fn dispatch(&self, invocation: &ParsedInvocation<'_>) -> Result<(), AqError> {
        let name = invocation.command().name;
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| AqError::Execution(anyhow::anyhow!("no action registered for '{name}'")))?;

        log::debug!("dispatching '{name}'");
        action.execute(invocation).map_err(AqError::Execution)
    }
}

/// `s3://BUCKET/PREFIX` where the service writes results.
pub(crate) fn output_location(invocation: &ParsedInvocation<'_>) -> String {
    let bucket = invocation.text("bucket");
    let prefix = invocation.text("object_prefix").trim_start_matches('/');
    format!("s3://{bucket}/{prefix}")
}

/// Split `DATABASE.TABLE`.
pub(crate) fn split_table(name: &str) -> anyhow::Result<(String, String)> {
    match name.split_once('.') {
        Some((db, table)) if !db.is_empty() && !table.is_empty() && !table.contains('.') => {
            Ok((db.to_owned(), table.to_owned()))
        }
        _ => bail!("'{name}' is not of the form DATABASE.TABLE"),
    }
}

/// Convert a non-negative integer flag.
pub(crate) fn non_negative(invocation: &ParsedInvocation<'_>, flag: &str) -> anyhow::Result<u64> {
    let value = invocation.integer(flag);
    u64::try_from(value).with_context(|| format!("--{flag} must not be negative (got {value})"))
}
