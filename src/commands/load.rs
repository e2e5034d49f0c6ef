/// `load` command: create a table over S3 data.
use anyhow::{Context, bail};

use super::{ExecutionResult, output_location, split_table};
use crate::backend::Backend;
use crate::invocation::ParsedInvocation;
use crate::types::{LoadRequest, Partition, Request};

/// Run `aq load DATABASE.TABLE SOURCE SCHEMA`.
///
/// # Errors
///
/// Returns an error for a malformed table name, a missing schema, a bad
/// `--partitioning` spec, or any backend failure.
pub fn run(invocation: &ParsedInvocation<'_>, backend: &dyn Backend) -> ExecutionResult {
    let (database, table) = split_table(invocation.arg(0).unwrap_or_default())?;
    let schema = invocation
        .arg(2)
        .context("SCHEMA must be specified.")?
        .to_owned();
    let partitions = parse_partitioning(invocation.text("partitioning"))?;

    let request = LoadRequest {
        database,
        table,
        source: invocation.arg(1).unwrap_or_default().to_owned(),
        schema,
        source_format: invocation.text("source_format").to_owned(),
        partitions,
        output_location: output_location(invocation),
    };
    backend.submit(&Request::Load(request))
}

/// Parse `key1:type1,key2:type2,...` into ordered partition columns.
///
/// An empty spec means no partitions.
///
/// # Errors
///
/// Returns an error naming the first entry that is not `name:type`.
pub fn parse_partitioning(spec: &str) -> anyhow::Result<Vec<Partition>> {
    if spec.trim().is_empty() {
        return Ok(Vec::new());
    }

    spec.split(',')
        .map(|entry| {
            let entry = entry.trim();
            match entry.split_once(':') {
                Some((name, data_type))
                    if !name.trim().is_empty()
                        && !data_type.trim().is_empty()
                        && !data_type.contains(':') =>
                {
                    Ok(Partition {
                        name: name.trim().to_owned(),
                        data_type: data_type.trim().to_owned(),
                    })
                }
                _ => bail!("invalid partitioning entry '{entry}', expected key:type"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builtin;
    use crate::testing::{RecordingBackend, env, parse};

    #[test]
    fn test_parse_partitioning() {
        assert!(parse_partitioning("").unwrap().is_empty());

        let parts = parse_partitioning("dt:string, hour:int").unwrap();
        assert_eq!(
            parts,
            [
                Partition {
                    name: "dt".into(),
                    data_type: "string".into()
                },
                Partition {
                    name: "hour".into(),
                    data_type: "int".into()
                },
            ]
        );
    }

    #[test]
    fn test_parse_partitioning_rejects_bad_entries() {
        let err = parse_partitioning("dt:string,hour").unwrap_err();
        assert!(err.to_string().contains("'hour'"));
        assert!(parse_partitioning("dt:").is_err());
        assert!(parse_partitioning(":int").is_err());
        assert!(parse_partitioning("a:b:c").is_err());
    }

    #[test]
    fn test_load_request() {
        let registry = builtin().unwrap();
        let inv = parse(
            &registry,
            &[
                "load",
                "-b",
                "r",
                "-o",
                "p",
                "-p",
                "dt:string",
                "db.events",
                "s3://raw/events/",
                "id:int,name:string",
            ],
            &env(&[]),
        )
        .unwrap();
        let backend = RecordingBackend::default();

        run(&inv, &backend).unwrap();

        assert_eq!(
            backend.requests(),
            [Request::Load(LoadRequest {
                database: "db".into(),
                table: "events".into(),
                source: "s3://raw/events/".into(),
                schema: "id:int,name:string".into(),
                source_format: "NEWLINE_DELIMITED_JSON".into(),
                partitions: vec![Partition {
                    name: "dt".into(),
                    data_type: "string".into(),
                }],
                output_location: "s3://r/p".into(),
            })]
        );
    }

    #[test]
    fn test_missing_schema_fails() {
        let registry = builtin().unwrap();
        let inv = parse(&registry, &["load", "-b", "r", "db.events", "s3://raw/"], &env(&[])).unwrap();
        let backend = RecordingBackend::default();

        let err = run(&inv, &backend).unwrap_err();
        assert_eq!(err.to_string(), "SCHEMA must be specified.");
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_unqualified_table_fails() {
        let registry = builtin().unwrap();
        let inv = parse(&registry, &["load", "-b", "r", "events", "s3://raw/", "S"], &env(&[])).unwrap();
        let err = run(&inv, &RecordingBackend::default()).unwrap_err();
        assert!(err.to_string().contains("DATABASE.TABLE"));
    }
}
