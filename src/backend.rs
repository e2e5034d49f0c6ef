/// The seam between command handlers and the remote query service.
use std::io::{self, Write};

use anyhow::Context;

use crate::types::Request;

/// Performs requests against the query service.
pub trait Backend {
    /// Submit one request.
    ///
    /// # Errors
    ///
    /// Any failure reported by the service.
    fn submit(&self, request: &Request) -> anyhow::Result<()>;
}

/// Writes each request as one JSON line on stdout instead of contacting a
/// service. The default backend of the `aq` binary.
pub struct EchoBackend;

impl EchoBackend {
    /// Serialize `request` as a single line into `out`.
    ///
    /// # Errors
    ///
    /// Returns serialization or write failures.
    pub fn write_to<W: Write>(out: &mut W, request: &Request) -> anyhow::Result<()> {
        serde_json::to_writer(&mut *out, request).context("failed to encode request")?;
        writeln!(out).context("failed to write request")?;
        Ok(())
    }
}

impl Backend for EchoBackend {
    fn submit(&self, request: &Request) -> anyhow::Result<()> {
        log::info!("submitting {request:?}");
        let stdout = io::stdout();
        Self::write_to(&mut stdout.lock(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListRequest;

    #[test]
    fn test_echo_writes_one_json_line() {
        let request = Request::List(ListRequest {
            database: None,
            output_location: "s3://results/p".into(),
        });
        let mut out = Vec::new();
        EchoBackend::write_to(&mut out, &request).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\"op\":\"list\",\"output_location\":\"s3://results/p\"}\n");
    }
}
