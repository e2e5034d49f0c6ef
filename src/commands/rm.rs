/// `rm` command: drop a database or a table.
use anyhow::bail;

use super::{ExecutionResult, output_location};
use crate::backend::Backend;
use crate::invocation::ParsedInvocation;
use crate::types::{DropRequest, DropTarget, Request};

/// Run `aq rm NAME`, where NAME is `DATABASE` or `DATABASE.TABLE`.
///
/// Confirmation has already happened during validation.
///
/// # Errors
///
/// Returns an error for a name with more than one `.` or any backend failure.
pub fn run(invocation: &ParsedInvocation<'_>, backend: &dyn Backend) -> ExecutionResult {
    let request = DropRequest {
        target: target(invocation.arg(0).unwrap_or_default())?,
        output_location: output_location(invocation),
    };
    backend.submit(&Request::Drop(request))
}

fn target(name: &str) -> anyhow::Result<DropTarget> {
    let parts: Vec<&str> = name.split('.').collect();
    match parts.as_slice() {
        [database] if !database.is_empty() => Ok(DropTarget::Database {
            database: (*database).to_owned(),
        }),
        [database, table] if !database.is_empty() && !table.is_empty() => Ok(DropTarget::Table {
            database: (*database).to_owned(),
            table: (*table).to_owned(),
        }),
        _ => bail!("'{name}' is neither DATABASE nor DATABASE.TABLE"),
    }
}
