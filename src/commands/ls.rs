/// `ls` command: list databases, or the tables of one database.
use super::{ExecutionResult, output_location};
use crate::backend::Backend;
use crate::invocation::ParsedInvocation;
use crate::types::{ListRequest, Request};

/// Run `aq ls [DATABASE]`.
///
/// # Errors
///
/// Returns any backend failure.
pub fn run(invocation: &ParsedInvocation<'_>, backend: &dyn Backend) -> ExecutionResult {
    let request = ListRequest {
        database: invocation.arg(0).map(str::to_owned),
        output_location: output_location(invocation),
    };
    backend.submit(&Request::List(request))
}
