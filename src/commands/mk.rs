/// `mk` command: create a database.
use super::{ExecutionResult, output_location};
use crate::backend::Backend;
use crate::invocation::ParsedInvocation;
use crate::types::{CreateDatabaseRequest, Request};

/// Run `aq mk DATABASE`.
///
/// # Errors
///
/// Returns any backend failure.
pub fn run(invocation: &ParsedInvocation<'_>, backend: &dyn Backend) -> ExecutionResult {
    let request = CreateDatabaseRequest {
        database: invocation.arg(0).unwrap_or_default().to_owned(),
        output_location: output_location(invocation),
    };
    backend.submit(&Request::CreateDatabase(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builtin;
    use crate::testing::{RecordingBackend, env, parse};

    #[test]
    fn test_create_database_request() {
        let registry = builtin().unwrap();
        let inv = parse(&registry, &["mk", "-b", "r", "-o", "p", "analytics"], &env(&[])).unwrap();
        let backend = RecordingBackend::default();

        run(&inv, &backend).unwrap();

        assert_eq!(
            backend.requests(),
            [Request::CreateDatabase(CreateDatabaseRequest {
                database: "analytics".into(),
                output_location: "s3://r/p".into(),
            })]
        );
    }
}
