/// Everything `aq` itself writes to stderr: errors and the command listing.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::GlobalOpts;
use crate::errors::AqError;
use crate::registry::Registry;
use crate::types::{CommandInfoOutput, ErrorOutput};

/// Output settings for one run.
pub struct OutputCtx {
    /// Program name used to prefix execution errors.
    pub program: String,
    pub json: bool,
    /// Print the detailed command table in the fallback listing.
    pub verbose: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(program: String, opts: &GlobalOpts) -> Self {
        Self {
            program,
            json: opts.json,
            verbose: opts.verbose > 0,
        }
    }
}

/// Write an error for `err` to `out`.
///
/// Usage and cancellation messages are written bare; execution failures are
/// prefixed with the program name. clap renders its own errors unless JSON
/// output was asked for.
pub fn write_error<W: Write>(out: &mut W, err: &AqError, ctx: &OutputCtx) {
    if ctx.json {
        write_json(out, &ErrorOutput::from_error(err));
        return;
    }

    let _ = match err {
        AqError::Cli(clap_err) => write!(out, "{}", clap_err.render()),
        AqError::Execution(_) | AqError::Registry(_) => writeln!(out, "{}: {err}", ctx.program),
        _ => writeln!(out, "{err}"),
    };
}

/// Write the fallback listing of registered commands to `out`.
pub fn write_fallback<W: Write>(out: &mut W, registry: &Registry, ctx: &OutputCtx) {
    if ctx.json {
        let commands: Vec<CommandInfoOutput> = registry
            .commands()
            .iter()
            .map(|c| CommandInfoOutput {
                name: c.name.to_owned(),
                usage: c.usage.to_owned(),
                summary: c.summary.to_owned(),
            })
            .collect();
        write_json(out, &commands);
        return;
    }

    let names: Vec<&str> = registry.names().collect();
    let _ = writeln!(out, "Subcommands: {}", names.join(", "));

    if ctx.verbose {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(["NAME", "ARGS", "DESCRIPTION"]);
        for c in registry.commands() {
            table.add_row([c.name, c.usage, c.summary]);
        }
        let _ = writeln!(out, "{table}");
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            let _ = writeln!(out, "{s}");
        }
        Err(e) => {
            let _ = writeln!(out, "JSON serialization error: {e}");
        }
    }
}
