#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! aq — command line front end for a managed, distributed query service.

mod backend;
mod cli;
mod commands;
mod confirm;
mod errors;
mod invocation;
mod logging;
mod pipeline;
mod registry;
#[cfg(test)]
mod testing;
mod types;
mod validate;

use backend::EchoBackend;
use commands::ActionTable;
use confirm::TerminalConfirm;
use invocation::ProcessEnv;
use pipeline::Services;

fn main() {
    let argv: Vec<std::ffi::OsString> = std::env::args_os().collect();
    logging::init(cli::GlobalOpts::scan(&argv).verbose);

    let registry = match registry::builtin() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("aq: {err}");
            std::process::exit(err.exit_code());
        }
    };

    let backend = EchoBackend;
    let actions = ActionTable::builtin(&backend);
    let services = Services {
        env: &ProcessEnv,
        confirm: &TerminalConfirm,
        actions: &actions,
    };

    std::process::exit(cli::run(argv, &registry, &services));
}
