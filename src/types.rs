/// Shared serializable types: requests handed to the backend and the
/// structured envelopes written to stderr in `--json` mode.
use serde::{Deserialize, Serialize};

/// One operation for the query service, as built by a command handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Query(QueryRequest),
    List(ListRequest),
    Head(HeadRequest),
    CreateDatabase(CreateDatabaseRequest),
    Drop(DropRequest),
    Load(LoadRequest),
}

/// Start a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    /// `s3://BUCKET/PREFIX` where results are written.
    pub output_location: String,
    /// Seconds to wait for completion; `None` disables the timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// List databases, or the tables of one database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub output_location: String,
}

/// Print the first rows of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadRequest {
    pub database: String,
    pub table: String,
    pub max_rows: u64,
    pub output_location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    pub database: String,
    pub output_location: String,
}

/// What `rm` drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    Database { database: String },
    Table { database: String, table: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRequest {
    pub target: DropTarget,
    pub output_location: String,
}

/// A partition column of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

/// Create a table over data in S3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    pub database: String,
    pub table: String,
    /// `s3://` location of the source objects.
    pub source: String,
    /// Column schema, passed through as given.
    pub schema: String,
    pub source_format: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub partitions: Vec<Partition>,
    pub output_location: String,
}

/// A registered subcommand, as listed by the fallback reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInfoOutput {
    pub name: String,
    /// Positional-argument usage string.
    pub usage: String,
    pub summary: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `AqError`.
    #[must_use]
    pub fn from_error(err: &crate::errors::AqError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_tagged_by_op() {
        let request = Request::CreateDatabase(CreateDatabaseRequest {
            database: "logs".into(),
            output_location: "s3://results/Unsaved/2024/01/01".into(),
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["op"], "create_database");
        assert_eq!(json["database"], "logs");
    }

    #[test]
    fn test_drop_target_and_partition_field_names() {
        let request = Request::Drop(DropRequest {
            target: DropTarget::Table {
                database: "db".into(),
                table: "t".into(),
            },
            output_location: "s3://r/p".into(),
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["target"]["kind"], "table");

        let partition = Partition {
            name: "dt".into(),
            data_type: "string".into(),
        };
        let json = serde_json::to_value(&partition).unwrap();
        assert_eq!(json["type"], "string");
    }

    #[test]
    fn test_error_envelope() {
        let err = crate::errors::AqError::Canceled;
        let out = ErrorOutput::from_error(&err);
        assert!(!out.ok);
        assert_eq!(out.error.code, "canceled");
        assert_eq!(out.error.message, "Canceled.");
    }
}
