/// Resolution of one matched subcommand into flag values and positional arguments.
///
/// Flag values are resolved in precedence order: explicit command-line value,
/// then the flag's environment variable, then its default. A flag with none of
/// these resolves to its kind's empty value (`""`, `0`, or `false`).
use std::collections::{BTreeMap, HashMap};

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::errors::AqError;
use crate::registry::{CommandSpec, FlagKind, FlagSpec};

/// clap id of the multi-valued positional that collects a command's arguments.
pub const ARGS_ID: &str = "args";

/// A resolved flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    Integer(i64),
    Switch(bool),
}

/// Read access to environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The matched command, its resolved flags, and its positional arguments.
#[derive(Debug)]
pub struct ParsedInvocation<'r> {
    command: &'r CommandSpec,
    flags: BTreeMap<&'static str, FlagValue>,
    args: Vec<String>,
}

impl<'r> ParsedInvocation<'r> {
    /// Resolve every flag of `command` from clap's matches and `env`.
    ///
    /// # Errors
    ///
    /// Returns `AqError::Usage` when an environment variable or default
    /// cannot be interpreted as the flag's kind.
    pub fn resolve(
        command: &'r CommandSpec,
        matches: &ArgMatches,
        env: &dyn EnvSource,
    ) -> Result<Self, AqError> {
        let flags = command
            .flags
            .iter()
            .map(|flag| resolve_flag(flag, matches, env).map(|value| (flag.name, value)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let args = matches
            .get_many::<String>(ARGS_ID)
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default();

        log::debug!(
            "parsed '{}': flags={flags:?} args={args:?}",
            command.name
        );

        Ok(Self {
            command,
            flags,
            args,
        })
    }

    #[must_use]
    pub fn command(&self) -> &'r CommandSpec {
        self.command
    }

    /// Positional arguments in the order given.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The `index`th positional argument, if present.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// Text flag value; `""` when undeclared or of another kind.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        match self.flag(name) {
            Some(FlagValue::Text(v)) => v,
            _ => "",
        }
    }

    /// Integer flag value; `0` when undeclared or of another kind.
    #[must_use]
    pub fn integer(&self, name: &str) -> i64 {
        match self.flag(name) {
            Some(FlagValue::Integer(v)) => *v,
            _ => 0,
        }
    }

    /// Switch flag value; `false` when undeclared or of another kind.
    #[must_use]
    pub fn switch(&self, name: &str) -> bool {
        matches!(self.flag(name), Some(FlagValue::Switch(true)))
    }
}

fn resolve_flag(
    flag: &FlagSpec,
    matches: &ArgMatches,
    env: &dyn EnvSource,
) -> Result<FlagValue, AqError> {
    if matches.value_source(flag.name) == Some(ValueSource::CommandLine) {
        let value = match flag.kind {
            FlagKind::Text => matches
                .get_one::<String>(flag.name)
                .map(|v| FlagValue::Text(v.clone())),
            FlagKind::Integer => matches.get_one::<i64>(flag.name).map(|v| FlagValue::Integer(*v)),
            FlagKind::Switch => Some(FlagValue::Switch(matches.get_flag(flag.name))),
        };
        if let Some(value) = value {
            log::trace!("--{} set on the command line", flag.name);
            return Ok(value);
        }
    }

    if let Some((var, raw)) = flag.env.and_then(|var| env.var(var).map(|raw| (var, raw))) {
        log::trace!("--{} taken from ${var}", flag.name);
        return flag
            .kind
            .parse(&raw)
            .map_err(|e| AqError::Usage(format!("invalid value in {var} for --{}: {e}", flag.name)));
    }

    match flag.default.raw() {
        Some(raw) => flag
            .kind
            .parse(&raw)
            .map_err(|e| AqError::Usage(format!("invalid default for --{}: {e}", flag.name))),
        None => Ok(flag.kind.empty()),
    }
}
