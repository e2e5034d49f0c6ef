/// CLI layer: argument parsing, process-boundary error reporting, exit codes.
pub mod args;
pub mod output;

use std::ffi::OsString;
use std::path::Path;

use clap::FromArgMatches;

use crate::errors::AqError;
use crate::logging;
use crate::pipeline::{self, Completion, Services};
use crate::registry::Registry;

pub use args::GlobalOpts;
pub use output::{OutputCtx, write_error, write_fallback};

/// Run `aq` for `argv` and return the process exit code.
///
/// 0 on success, on a help/version display, and when no registered command was
/// named; 1 for every failure.
pub fn run<I, T>(argv: I, registry: &Registry, services: &Services<'_>) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = program_name(argv.first());

    let scanned = GlobalOpts::scan(&argv);
    logging::init(scanned.verbose);
    let stderr = std::io::stderr();

    let matches = match args::build(registry).try_get_matches_from(&argv) {
        Ok(matches) => matches,
        Err(clap_err) => {
            // help and --version go to stdout as clap renders them
            if !clap_err.use_stderr() {
                let _ = clap_err.print();
                return 0;
            }
            log::debug!("argv rejected: {:?}", clap_err.kind());
            let err = AqError::from(clap_err);
            write_error(&mut stderr.lock(), &err, &OutputCtx::new(program, &scanned));
            return err.exit_code();
        }
    };

    let opts = GlobalOpts::from_arg_matches(&matches).unwrap_or(scanned);
    let ctx = OutputCtx::new(program, &opts);

    match pipeline::run(&matches, registry, services) {
        Ok(Completion::NoCommand) => {
            write_fallback(&mut stderr.lock(), registry, &ctx);
            0
        }
        Ok(Completion::Executed(name)) => {
            log::debug!("'{name}' finished");
            0
        }
        Err(err) => {
            write_error(&mut stderr.lock(), &err, &ctx);
            err.exit_code()
        }
    }
}

/// File name of `argv[0]`, or `aq` when it is missing.
fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_name())
        .map_or_else(|| "aq".to_owned(), |n| n.to_string_lossy().into_owned())
}
