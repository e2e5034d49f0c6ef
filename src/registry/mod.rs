/// The command table: every subcommand `aq` knows, its flags, and its precondition.
pub mod flags;
pub mod table;

use std::collections::HashSet;

use crate::errors::AqError;
use crate::validate::Precondition;

pub use flags::{FlagDefault, FlagKind, FlagSpec};
pub use table::builtin;

/// Declarative description of one subcommand.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    /// One-line help summary.
    pub summary: &'static str,
    /// Positional-argument usage string, e.g. `DATABASE.TABLE SOURCE SCHEMA`.
    pub usage: &'static str,
    pub flags: Vec<FlagSpec>,
    /// Check run against the parsed invocation before the action.
    pub precondition: Precondition,
}

impl CommandSpec {
    /// Look up one of this command's flags by long name.
    #[cfg(test)]
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }
}

/// Ordered set of commands, built once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command to the table.
    ///
    /// # Errors
    ///
    /// Returns `AqError::Registry` if the name is already registered or the
    /// command declares two flags with the same name or alias.
    pub fn register(&mut self, command: CommandSpec) -> Result<(), AqError> {
        if self.lookup(command.name).is_some() {
            return Err(AqError::Registry(format!(
                "command '{}' is registered more than once",
                command.name
            )));
        }

        let mut names = HashSet::new();
        let mut shorts = HashSet::new();
        for flag in &command.flags {
            if !names.insert(flag.name) || !shorts.insert(flag.short) {
                return Err(AqError::Registry(format!(
                    "command '{}' declares flag '{}' (-{}) more than once",
                    command.name, flag.name, flag.short
                )));
            }
        }

        log::trace!("registered command '{}'", command.name);
        self.commands.push(command);
        Ok(())
    }

    /// Find a command by exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    #[must_use]
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }
}
