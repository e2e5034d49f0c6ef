/// clap command tree generated from the registry.
use std::ffi::OsString;

use clap::{Arg, ArgAction, Args, Command};

use crate::invocation::ARGS_ID;
use crate::registry::{CommandSpec, FlagDefault, FlagKind, FlagSpec, Registry};

/// Options accepted by every subcommand.
#[derive(Debug, Default, Args)]
pub struct GlobalOpts {
    /// Emit errors and the command listing as JSON on stderr.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Best-effort read of the global options straight from argv, for use
    /// before clap has parsed it (logger setup, reporting clap's own errors).
    /// Scanning stops at `--`.
    #[must_use]
    pub fn scan(argv: &[OsString]) -> Self {
        let mut opts = Self::default();
        for arg in argv.iter().skip(1).map(|a| a.to_string_lossy()) {
            match &*arg {
                "--" => break,
                "--json" => opts.json = true,
                "--verbose" => opts.verbose = opts.verbose.saturating_add(1),
                short if short.len() > 1
                    && short.starts_with('-')
                    && short[1..].chars().all(|c| c == 'v') =>
                {
                    let count = u8::try_from(short.len() - 1).unwrap_or(u8::MAX);
                    opts.verbose = opts.verbose.saturating_add(count);
                }
                _ => {}
            }
        }
        opts
    }
}

/// Build the root `aq` command with one subcommand per registered command.
///
/// Unknown subcommand names are accepted by clap so the caller can fall back
/// to listing the registered ones.
#[must_use]
pub fn build(registry: &Registry) -> Command {
    let root = Command::new("aq")
        .about("Command Line Tool for AWS Athena (bq command like)")
        .version(env!("CARGO_PKG_VERSION"))
        .allow_external_subcommands(true)
        .subcommands(registry.commands().iter().map(subcommand));
    GlobalOpts::augment_args(root)
}

/// Build the clap subcommand for one command spec.
#[must_use]
pub fn subcommand(spec: &CommandSpec) -> Command {
    let positional = Arg::new(ARGS_ID)
        .value_name("ARGS")
        .help(spec.usage)
        .num_args(0..)
        .action(ArgAction::Append);

    Command::new(spec.name)
        .about(spec.summary)
        .override_usage(format!("aq {} [OPTIONS] {}", spec.name, spec.usage))
        .args(spec.flags.iter().map(flag_arg))
        .arg(positional)
}

fn flag_arg(flag: &FlagSpec) -> Arg {
    let arg = Arg::new(flag.name)
        .long(flag.name)
        .short(flag.short)
        .help(help_text(flag));

    match flag.kind {
        FlagKind::Text => arg.value_name("VALUE").action(ArgAction::Set),
        FlagKind::Integer => arg
            .value_name("N")
            .action(ArgAction::Set)
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64)),
        FlagKind::Switch => arg.action(ArgAction::SetTrue),
    }
}

/// Help line with the environment fallback and default appended, since
/// neither is declared to clap.
fn help_text(flag: &FlagSpec) -> String {
    let mut help = flag.help.to_owned();
    if let Some(var) = flag.env {
        help.push_str(&format!(" [env: {var}]"));
    }
    match flag.default {
        FlagDefault::Unset => {}
        FlagDefault::Value(v) => help.push_str(&format!(" [default: {v}]")),
        FlagDefault::Computed(f) => help.push_str(&format!(" [default: {}]", f())),
    }
    help
}
