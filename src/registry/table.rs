/// The built-in `aq` command table.
use super::flags::{FlagSpec, bucket, object_prefix};
use super::{CommandSpec, Registry};
use crate::errors::AqError;
use crate::validate::rules;

/// The only source format `load` accepts.
pub const NEWLINE_DELIMITED_JSON: &str = "NEWLINE_DELIMITED_JSON";

/// Build the registry with every `aq` subcommand, in display order.
///
/// # Errors
///
/// Returns `AqError::Registry` if the table declares a duplicate command or flag.
pub fn builtin() -> Result<Registry, AqError> {
    let mut registry = Registry::new();

    registry.register(CommandSpec {
        name: "query",
        summary: "Run query",
        usage: "QUERY",
        flags: vec![
            bucket(),
            object_prefix(),
            FlagSpec::integer(
                "timeout",
                't',
                "Wait for execution of the query for this number of seconds. \
                 If this is set to 0, timeout is disabled.",
            )
            .default_value("0"),
        ],
        precondition: rules::query,
    })?;

    registry.register(CommandSpec {
        name: "ls",
        summary: "Show databases or tables in specified database",
        usage: "[DATABASE]",
        flags: vec![bucket(), object_prefix()],
        precondition: rules::ls,
    })?;

    registry.register(CommandSpec {
        name: "head",
        summary: "Show records in specified table",
        usage: "DATABASE.TABLE",
        flags: vec![
            bucket(),
            object_prefix(),
            FlagSpec::integer("max_rows", 'n', "This number of rows are printed.")
                .default_value("100"),
        ],
        precondition: rules::head,
    })?;

    registry.register(CommandSpec {
        name: "mk",
        summary: "Create database",
        usage: "DATABASE",
        flags: vec![bucket(), object_prefix()],
        precondition: rules::mk,
    })?;

    registry.register(CommandSpec {
        name: "rm",
        summary: "Drop database or table",
        usage: "NAME",
        flags: vec![
            bucket(),
            object_prefix(),
            FlagSpec::switch("force", 'f', "Skip confirmation if this is set."),
        ],
        precondition: rules::rm,
    })?;

    registry.register(CommandSpec {
        name: "load",
        summary: "Create table and load data",
        usage: "DATABASE.TABLE SOURCE SCHEMA",
        flags: vec![
            bucket(),
            object_prefix(),
            FlagSpec::text(
                "source_format",
                's',
                "Specify source file data format. Now aq support only NEWLINE_DELIMITED_JSON.",
            )
            .default_value(NEWLINE_DELIMITED_JSON),
            FlagSpec::text(
                "partitioning",
                'p',
                "Specify partition key and type. ex. key1:type1,key2:type2,...",
            ),
        ],
        precondition: rules::load,
    })?;

    Ok(registry)
}
