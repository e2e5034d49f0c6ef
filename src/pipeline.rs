/// One run of `aq`: match, resolve, validate, dispatch.
///
/// ```text
/// Idle -> Parsed -> Validated -> Executed(0 | 1)
///              \-> Rejected(1)
///      \-> NoCommand(0)
/// ```
use clap::ArgMatches;

use crate::commands::ActionTable;
use crate::confirm::Confirm;
use crate::errors::AqError;
use crate::invocation::{EnvSource, ParsedInvocation};
use crate::registry::Registry;
use crate::validate::validate;

/// The capabilities a run depends on.
pub struct Services<'a> {
    pub env: &'a dyn EnvSource,
    pub confirm: &'a dyn Confirm,
    pub actions: &'a ActionTable<'a>,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// No registered command was named; the caller should list the commands.
    NoCommand,
    /// The named command ran to completion.
    Executed(&'static str),
}

/// Drive clap's matches through validation and dispatch.
///
/// # Errors
///
/// Returns `AqError::Usage` or `AqError::Canceled` when validation rejects the
/// invocation, and `AqError::Execution` when the action fails.
pub fn run(
    matches: &ArgMatches,
    registry: &Registry,
    services: &Services<'_>,
) -> Result<Completion, AqError> {
    let Some((name, sub_matches)) = matches.subcommand() else {
        log::debug!("no subcommand given");
        return Ok(Completion::NoCommand);
    };

    let Some(command) = registry.lookup(name) else {
        log::warn!("unknown command '{name}'");
        return Ok(Completion::NoCommand);
    };

    let invocation = ParsedInvocation::resolve(command, sub_matches, services.env)?;
    validate(&invocation, services.confirm).into_result()?;
    services.actions.dispatch(&invocation)?;

    Ok(Completion::Executed(command.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::build;
    use crate::errors::ErrorKind;
    use crate::registry::builtin;
    use crate::testing::{RecordingBackend, Scripted, env};

    fn run_with(
        argv: &[&str],
        vars: &[(&str, &str)],
        confirm: &Scripted,
        backend: &RecordingBackend,
    ) -> Result<Completion, AqError> {
        let registry = builtin().unwrap();
        let env = env(vars);
        let actions = ActionTable::builtin(backend);
        let services = Services {
            env: &env,
            confirm,
            actions: &actions,
        };
        let matches = build(&registry).try_get_matches_from(argv.iter().copied())?;
        run(&matches, &registry, &services)
    }

    #[test]
    fn test_no_subcommand() {
        let backend = RecordingBackend::default();
        let result = run_with(&["aq"], &[], &Scripted::new(true), &backend);
        assert_eq!(result.unwrap(), Completion::NoCommand);
    }

    #[test]
    fn test_unknown_subcommand_lists_instead_of_failing() {
        let backend = RecordingBackend::default();
        let result = run_with(&["aq", "cp", "a", "b"], &[], &Scripted::new(true), &backend);
        assert_eq!(result.unwrap(), Completion::NoCommand);
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_accepted_command_reaches_backend() {
        let backend = RecordingBackend::default();
        let result = run_with(
            &["aq", "mk", "db"],
            &[("AQ_DEFAULT_BUCKET", "r")],
            &Scripted::new(true),
            &backend,
        );
        assert_eq!(result.unwrap(), Completion::Executed("mk"));
        assert_eq!(backend.requests().len(), 1);
    }

    #[test]
    fn test_rejected_command_never_dispatches() {
        let backend = RecordingBackend::default();
        let err = run_with(&["aq", "mk", "db.t"], &[("AQ_DEFAULT_BUCKET", "r")], &Scripted::new(true), &backend)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_declined_rm_is_cancellation() {
        let backend = RecordingBackend::default();
        let confirm = Scripted::new(false);
        let err = run_with(&["aq", "rm", "db"], &[("AQ_DEFAULT_BUCKET", "r")], &confirm, &backend)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cancellation);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(confirm.asked(), 1);
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_handler_failure_is_execution_error() {
        let backend = RecordingBackend::failing("database not found");
        let err = run_with(&["aq", "ls", "-b", "r", "nope"], &[], &Scripted::new(true), &backend)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Execution);
        assert_eq!(err.to_string(), "database not found");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let backend = RecordingBackend::default();
        let result = run_with(&["aq", "ls", "-b", "r", "--json", "-vv"], &[], &Scripted::new(true), &backend);
        assert_eq!(result.unwrap(), Completion::Executed("ls"));
    }
}
