/// `head` command: show the first rows of a table.
use super::{ExecutionResult, non_negative, output_location, split_table};
use crate::backend::Backend;
use crate::invocation::ParsedInvocation;
use crate::types::{HeadRequest, Request};

/// Run `aq head DATABASE.TABLE`.
///
/// # Errors
///
/// Returns an error for a malformed table name, a negative `--max_rows`,
/// or any backend failure.
pub fn run(invocation: &ParsedInvocation<'_>, backend: &dyn Backend) -> ExecutionResult {
    let (database, table) = split_table(invocation.arg(0).unwrap_or_default())?;
    let request = HeadRequest {
        database,
        table,
        max_rows: non_negative(invocation, "max_rows")?,
        output_location: output_location(invocation),
    };
    backend.submit(&Request::Head(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builtin;
    use crate::testing::{RecordingBackend, env, parse};

    #[test]
    fn test_head_request() {
        let registry = builtin().unwrap();
        let inv = parse(&registry, &["head", "-n", "5", "-b", "r", "-o", "p", "db.events"], &env(&[]))
            .unwrap();
        let backend = RecordingBackend::default();

        run(&inv, &backend).unwrap();

        assert_eq!(
            backend.requests(),
            [Request::Head(HeadRequest {
                database: "db".into(),
                table: "events".into(),
                max_rows: 5,
                output_location: "s3://r/p".into(),
            })]
        );
    }

    #[test]
    fn test_default_max_rows() {
        let registry = builtin().unwrap();
        let inv = parse(&registry, &["head", "-b", "r", "db.events"], &env(&[])).unwrap();
        let backend = RecordingBackend::default();

        run(&inv, &backend).unwrap();

        let Request::Head(request) = &backend.requests()[0] else {
            panic!("expected a head request");
        };
        assert_eq!(request.max_rows, 100);
    }
}
