/// `query` command: start a query whose results land under the output location.
use super::{ExecutionResult, non_negative, output_location};
use crate::backend::Backend;
use crate::invocation::ParsedInvocation;
use crate::types::{QueryRequest, Request};

/// Run `aq query QUERY`.
///
/// A `--timeout` of 0 means no timeout. The value is only forwarded.
///
/// # Errors
///
/// Returns an error for a negative timeout or any backend failure.
pub fn run(invocation: &ParsedInvocation<'_>, backend: &dyn Backend) -> ExecutionResult {
    let timeout = non_negative(invocation, "timeout")?;
    let request = QueryRequest {
        query: invocation.arg(0).unwrap_or_default().to_owned(),
        output_location: output_location(invocation),
        timeout_secs: (timeout > 0).then_some(timeout),
    };
    backend.submit(&Request::Query(request))
}
